#![cfg(test)]
/*!
Theme selector lint for the web build.

Purpose:
- Every class the shared page components emit must be styled by the theme in
  `web/assets/main.css`. A renamed class in a component or a dropped rule in
  the stylesheet otherwise degrades the page silently at runtime.

How it works:
- The theme is embedded with `include_str!` (same file the app links via `asset!`).
- Component sources under `ui/src/components` and `ui/src/views` are scanned for
  literal `class: "..."` attributes; each class token must appear as a selector.
- Classes chosen at runtime (locale switcher state) are listed explicitly.
*/

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

/// Classes assigned through expressions rather than `class: "..."` literals.
const DYNAMIC_CLASSES: &[&str] = &["locale-switch__link", "locale-switch__link--active"];

fn component_sources() -> Vec<(PathBuf, String)> {
    let ui_src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../ui/src");
    let mut sources = Vec::new();
    for dir in ["components", "views"] {
        let entries = fs::read_dir(ui_src.join(dir)).expect("ui source directory readable");
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("rs") {
                let content = fs::read_to_string(&path).expect("component source readable");
                sources.push((path, content));
            }
        }
    }
    sources
}

fn literal_classes(source: &str) -> BTreeSet<String> {
    let needle = "class: \"";
    let mut classes = BTreeSet::new();
    let mut rest = source;
    while let Some(pos) = rest.find(needle) {
        rest = &rest[pos + needle.len()..];
        let Some(end) = rest.find('"') else { break };
        classes.extend(rest[..end].split_whitespace().map(str::to_string));
        rest = &rest[end + 1..];
    }
    classes
}

fn has_selector(class: &str) -> bool {
    let selector = format!(".{class}");
    THEME_CSS.match_indices(&selector).any(|(pos, _)| {
        THEME_CSS[pos + selector.len()..]
            .chars()
            .next()
            .is_some_and(|c| !(c.is_alphanumeric() || c == '-' || c == '_'))
    })
}

#[test]
fn theme_is_not_empty() {
    assert!(
        !THEME_CSS.trim().is_empty(),
        "Theme stylesheet appears to be empty."
    );
    assert!(THEME_CSS.contains(":root"), "Theme lost its custom properties");
}

#[test]
fn component_classes_have_selectors() {
    let sources = component_sources();
    assert!(!sources.is_empty(), "no component sources found");

    let mut missing = Vec::new();
    for (path, source) in &sources {
        for class in literal_classes(source) {
            if !has_selector(&class) {
                missing.push(format!("{class}  ({})", path.display()));
            }
        }
    }
    for class in DYNAMIC_CLASSES {
        if !has_selector(class) {
            missing.push(format!("{class}  (dynamic)"));
        }
    }

    assert!(
        missing.is_empty(),
        "Classes without a selector in web/assets/main.css:\n  {}",
        missing.join("\n  ")
    );
}

#[test]
fn dynamic_classes_are_still_emitted() {
    let header = component_sources()
        .into_iter()
        .find(|(path, _)| path.ends_with("site_header.rs"))
        .map(|(_, source)| source)
        .expect("site_header.rs present");
    for class in DYNAMIC_CLASSES {
        assert!(
            header.contains(class),
            "`{class}` no longer used by the header; update DYNAMIC_CLASSES"
        );
    }
}
