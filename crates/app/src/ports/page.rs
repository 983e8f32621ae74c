//! Page port: querying and painting elements of the host page.
//!
//! Element handles are cheap clones of a reference to the same node, which is
//! what both the DOM and the test fakes provide.

/// A single element of the page.
pub trait Element: Clone {
    /// The element's `id` attribute, empty when unset.
    fn id(&self) -> String;

    /// Replace the element's text content.
    fn set_text(&self, text: &str);

    /// Set an inline style property (CSS name, e.g. `box-shadow`).
    ///
    /// An empty `value` removes the inline override.
    fn set_style(&self, property: &str, value: &str);

    fn set_attribute(&self, name: &str, value: &str);

    fn add_class(&self, class: &str);
}

/// The document the widget is mounted on.
pub trait Page {
    type Element: Element;

    /// First element matching a CSS selector.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// Every element matching a CSS selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Element with the given `id`.
    fn by_id(&self, id: &str) -> Option<Self::Element>;
}
