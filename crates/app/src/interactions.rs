//! Box interactions: press feedback and the designated link box.
//!
//! These handlers hold no state between events. The browser adapter decides
//! which DOM events call them; everything observable happens here.

use std::time::Duration;

use crate::config::LinkConfig;
use crate::ports::{Element, NavigationError, Navigator, Page, Scheduler};

/// Selector of the repeatable content boxes.
pub const INFO_BOX_SELECTOR: &str = ".info-box";

/// Key that toggles the indicator blink.
pub const CANCEL_KEY: &str = "Escape";

pub const PRESSED_TRANSFORM: &str = "scale(0.98)";
pub const PRESSED_BACKGROUND: &str = "rgba(255, 255, 255, 0.05)";

/// Class marking the link box as clickable for the stylesheet.
pub const CLICKABLE_CLASS: &str = "clickable";

/// Whether `key` (a `KeyboardEvent.key` value) activates a focused button.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[must_use]
pub fn is_cancel_key(key: &str) -> bool {
    key == CANCEL_KEY
}

/// Shrink `element` slightly and restore it after `delay`.
pub fn press_feedback<E, S>(element: &E, scheduler: &S, delay: Duration)
where
    E: Element + 'static,
    S: Scheduler,
{
    element.set_style("transform", PRESSED_TRANSFORM);
    let element = element.clone();
    scheduler.after(delay, move || element.set_style("transform", ""));
}

/// Content boxes that get generic press feedback: every `.info-box` except
/// the designated link box, which has its own.
pub fn feedback_boxes<P: Page>(page: &P, link: &LinkConfig) -> Vec<P::Element> {
    page.query_all(INFO_BOX_SELECTOR)
        .into_iter()
        .filter(|el| el.id() != link.element_id)
        .collect()
}

/// The single box that opens an external URL.
#[derive(Debug, Clone)]
pub struct LinkBox<E> {
    element: E,
    url: String,
    aria_label: String,
}

impl<E: Element + 'static> LinkBox<E> {
    /// Look the box up by id; `None` when the page has no such element.
    pub fn find<P: Page<Element = E>>(page: &P, config: &LinkConfig) -> Option<Self> {
        page.by_id(&config.element_id).map(|element| Self {
            element,
            url: config.url.clone(),
            aria_label: config.aria_label.clone(),
        })
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Make the box keyboard-focusable and announce it as a button.
    pub fn prepare(&self) {
        self.element.add_class(CLICKABLE_CLASS);
        self.element.set_attribute("tabindex", "0");
        self.element.set_attribute("role", "button");
        self.element.set_attribute("aria-label", &self.aria_label);
    }

    /// Open the URL in a new browsing context and flash press feedback.
    ///
    /// The feedback is shown even when the browser refuses to open the URL.
    ///
    /// # Errors
    ///
    /// Propagates the [`NavigationError`] from the navigator.
    pub fn activate<N, S>(
        &self,
        navigator: &N,
        scheduler: &S,
        delay: Duration,
    ) -> Result<(), NavigationError>
    where
        N: Navigator,
        S: Scheduler,
    {
        let opened = navigator.open_in_new_context(&self.url);

        self.element.set_style("transform", PRESSED_TRANSFORM);
        self.element.set_style("background-color", PRESSED_BACKGROUND);
        let element = self.element.clone();
        scheduler.after(delay, move || {
            element.set_style("transform", "");
            element.set_style("background-color", "");
        });

        opened
    }
}
