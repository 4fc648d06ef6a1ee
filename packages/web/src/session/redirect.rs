//! Redirect-link and ticket extraction
//!
//! The page is entered through `?redirectLink=<url-encoded URL>` whose own
//! query string carries the opaque `ticket` the backend expects.

use url::Url;

/// Parsed once from the page URL on mount, never mutated afterwards
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RedirectContext {
    pub redirect_link: Option<String>,
    pub ticket: Option<String>,
    pub is_valid: bool,
}

impl RedirectContext {
    pub fn from_href(href: &str) -> Self {
        let page = match Url::parse(href) {
            Ok(page) => page,
            Err(err) => {
                tracing::warn!(%href, %err, "unparseable page URL");
                return Self::default();
            }
        };

        // query_pairs percent-decodes the value for us
        let Some(link) = page
            .query_pairs()
            .find(|(key, _)| key == "redirectLink")
            .map(|(_, value)| value.into_owned())
        else {
            tracing::warn!("redirectLink query parameter missing");
            return Self::default();
        };

        let ticket = match Url::parse(&link) {
            Ok(inner) => inner
                .query_pairs()
                .find(|(key, _)| key == "ticket")
                .map(|(_, value)| value.into_owned()),
            Err(err) => {
                tracing::warn!(%err, "redirectLink is not a valid URL");
                None
            }
        };

        Self {
            redirect_link: Some(link),
            is_valid: ticket.is_some(),
            ticket,
        }
    }

    /// Ticket to put on the wire; empty when none was extracted, since the
    /// backend is still allowed to see (and reject) the attempt.
    pub fn wire_ticket(&self) -> String {
        self.ticket.clone().unwrap_or_default()
    }
}
