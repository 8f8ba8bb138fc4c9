//! Links into the embedded web app and the buttons that open them.

use dbot_core::WebAppButton;

/// Pages of the web app a command can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebAppPage {
    Home,
    Generate,
    Profile,
}

impl WebAppPage {
    /// Path suffix appended to the base URL; `None` opens the base URL itself.
    pub fn path(self) -> Option<&'static str> {
        match self {
            WebAppPage::Home => None,
            WebAppPage::Generate => Some("generate"),
            WebAppPage::Profile => Some("profile"),
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            WebAppPage::Home => "🎨 Open Sacred Wallpaper Pack",
            WebAppPage::Generate => "🎨 Generate New Wallpaper",
            WebAppPage::Profile => "👤 View Profile",
        }
    }
}

/// Builds page URLs from the configured WEBAPP_URL.
#[derive(Debug, Clone)]
pub struct WebAppLinks {
    base: String,
}

impl WebAppLinks {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Base URL joined with the page path by exactly one `/`.
    pub fn url(&self, page: WebAppPage) -> String {
        match page.path() {
            None => self.base.clone(),
            Some(path) => format!("{}/{}", self.base.trim_end_matches('/'), path),
        }
    }

    pub fn button(&self, page: WebAppPage) -> WebAppButton {
        WebAppButton::new(page.button_label(), self.url(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_with_single_slash() {
        let links = WebAppLinks::new("https://app.example.com");
        assert_eq!(links.url(WebAppPage::Home), "https://app.example.com");
        assert_eq!(links.url(WebAppPage::Generate), "https://app.example.com/generate");

        let trailing = WebAppLinks::new("https://app.example.com/mini/");
        assert_eq!(trailing.url(WebAppPage::Profile), "https://app.example.com/mini/profile");
    }

    #[test]
    fn test_button_uses_page_label() {
        let button = WebAppLinks::new("https://app.example.com").button(WebAppPage::Profile);
        assert_eq!(button.label, "👤 View Profile");
        assert_eq!(button.url, "https://app.example.com/profile");
    }
}
