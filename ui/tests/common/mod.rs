//! Rendering helpers shared by the integration tests.
//!
//! Pages are rendered to an HTML string with `dioxus-ssr` and inspected with
//! a deliberately small tag scanner: the renderer emits flat, predictable
//! markup, so full HTML parsing is not needed.
#![allow(dead_code)]

use dioxus::prelude::*;
use ui::copy::PageCopy;
use ui::views::SitePage;

pub struct Markup {
    pub html: String,
}

/// An opening tag and the byte offset just past it.
pub struct Tag<'a> {
    pub source: &'a str,
    pub end: usize,
}

impl Markup {
    pub fn render(copy: &PageCopy) -> Self {
        let copy = copy.clone();
        Self {
            html: dioxus_ssr::render_element(rsx! {
                SitePage { copy: copy }
            }),
        }
    }

    /// Opening tags whose class list contains `class`, in document order.
    pub fn tags(&self, class: &str) -> Vec<Tag<'_>> {
        let mut found = Vec::new();
        let mut offset = 0;
        while let Some(start) = self.html[offset..].find('<') {
            let start = offset + start;
            let Some(len) = self.html[start..].find('>') else {
                break;
            };
            let end = start + len + 1;
            let source = &self.html[start..end];
            if !source.starts_with("</")
                && attr(source, "class")
                    .is_some_and(|value| value.split_whitespace().any(|token| token == class))
            {
                found.push(Tag { source, end });
            }
            offset = end;
        }
        found
    }

    /// Text directly inside each element carrying `class`.
    pub fn texts(&self, class: &str) -> Vec<String> {
        self.tags(class)
            .iter()
            .map(|tag| {
                let rest = &self.html[tag.end..];
                let text = rest.find('<').map_or(rest, |close| &rest[..close]);
                unescape(text)
            })
            .collect()
    }

    /// Offset of the first element carrying `class`.
    pub fn position(&self, class: &str) -> usize {
        self.tags(class)
            .first()
            .map(|tag| tag.end)
            .unwrap_or_else(|| panic!("no element with class `{class}`"))
    }

    /// The anchor whose text is exactly `text`.
    pub fn link_with_text(&self, text: &str) -> &str {
        let needle = format!(">{text}</a>");
        let close = self
            .html
            .find(&needle)
            .unwrap_or_else(|| panic!("no link with text `{text}`"));
        let open = self.html[..close]
            .rfind("<a")
            .unwrap_or_else(|| panic!("link `{text}` has no opening tag"));
        &self.html[open..=close]
    }
}

pub fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {name}=\"");
    let start = tag.find(&needle)? + needle.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}
