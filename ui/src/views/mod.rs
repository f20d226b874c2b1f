mod site_page;
pub use site_page::SitePage;

mod locale_page;
pub use locale_page::LocalePage;
