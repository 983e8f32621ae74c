//! Navigator port: leaving the page.

/// The browser refused to open a new browsing context.
#[derive(Debug, thiserror::Error)]
#[error("could not open {url}: {reason}")]
pub struct NavigationError {
    pub url: String,
    pub reason: String,
}

/// Opens URLs outside the current page.
pub trait Navigator {
    /// Open `url` in a new browsing context (`_blank`).
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError`] when the browser blocks or fails the call.
    fn open_in_new_context(&self, url: &str) -> Result<(), NavigationError>;
}
