//! Navigation capability
//!
//! Full-page navigation on verify success goes through this trait so the
//! controller never touches `window.location` directly and can be exercised
//! without a browser.

pub trait Navigator {
    fn navigate(&self, url: &str);
}

/// Used during server rendering, where navigation is meaningless
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _url: &str) {}
}

#[cfg(feature = "web")]
pub struct BrowserNavigator;

#[cfg(feature = "web")]
impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if window.location().set_href(url).is_err() {
            tracing::error!(%url, "navigation failed");
        }
    }
}
