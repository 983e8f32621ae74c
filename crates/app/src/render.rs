//! Rendering a snapshot onto the page.
//!
//! Each write goes through an optional target ([`Slot`]): the slot names its
//! selector, and painting it is a no-op when the page lacks the element. One
//! missing element never prevents the other writes.

use sleepy_domain::liveness::{DEVICE_LABEL_COLOR, Liveness};
use sleepy_domain::snapshot::StatusSnapshot;

use crate::config::Labels;
use crate::ports::{Element, Page};

/// Page elements the status is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    PrimaryDevice,
    SecondaryDevice,
    StatusText,
    StatusDot,
}

impl Slot {
    pub const ALL: [Self; 4] = [
        Self::PrimaryDevice,
        Self::SecondaryDevice,
        Self::StatusText,
        Self::StatusDot,
    ];

    /// CSS selector of the element backing this slot.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::PrimaryDevice => ".pc-status",
            Self::SecondaryDevice => ".iphone-status",
            Self::StatusText => ".status-text",
            Self::StatusDot => ".status-dot",
        }
    }
}

/// Run `paint` on the slot's element if the page has one.
///
/// Returns whether the element was found.
pub fn with_slot<P: Page>(page: &P, slot: Slot, paint: impl FnOnce(&P::Element)) -> bool {
    match page.query(slot.selector()) {
        Some(element) => {
            paint(&element);
            true
        }
        None => false,
    }
}

/// Outcome of one [`render_status`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Liveness the indicator now shows.
    pub liveness: Liveness,
    /// Slots that were written, in render order.
    pub applied: Vec<Slot>,
}

impl Rendered {
    #[must_use]
    pub fn is_applied(&self, slot: Slot) -> bool {
        self.applied.contains(&slot)
    }

    /// Slots whose element is absent from the page.
    #[must_use]
    pub fn missing(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| !self.is_applied(*slot))
            .collect()
    }
}

/// Write a snapshot into the page.
///
/// Idempotent: every write sets an absolute value derived from `snapshot`.
pub fn render_status<P: Page>(page: &P, snapshot: &StatusSnapshot, labels: &Labels) -> Rendered {
    let liveness = snapshot.liveness();
    let label = match liveness {
        Liveness::Alive => labels.alive.as_str(),
        Liveness::Asleep => labels.asleep.as_str(),
    };

    let applied = Slot::ALL
        .into_iter()
        .filter(|&slot| with_slot(page, slot, |el| paint(el, slot, snapshot, label)))
        .collect();

    Rendered { liveness, applied }
}

fn paint<E: Element>(el: &E, slot: Slot, snapshot: &StatusSnapshot, label: &str) {
    let appearance = snapshot.liveness().appearance();
    match slot {
        Slot::PrimaryDevice => {
            el.set_text(&snapshot.primary_device);
            el.set_style("color", DEVICE_LABEL_COLOR);
        }
        Slot::SecondaryDevice => {
            el.set_text(&snapshot.secondary_device);
            el.set_style("color", DEVICE_LABEL_COLOR);
        }
        Slot::StatusText => {
            el.set_text(label);
            el.set_style("color", appearance.text_color);
        }
        Slot::StatusDot => {
            el.set_style("background-color", appearance.dot_color);
            el.set_style("box-shadow", appearance.dot_glow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::FakePage;

    fn full_page() -> FakePage {
        FakePage::default()
            .with(".pc-status", "")
            .with(".iphone-status", "")
            .with(".status-text", "")
            .with(".status-dot", "")
    }

    #[test]
    fn should_write_labels_and_alive_state_when_awake() {
        let page = full_page();
        let rendered = render_status(
            &page,
            &StatusSnapshot::new("Desk-01", "Phone-02", false),
            &Labels::default(),
        );

        assert_eq!(rendered.liveness, Liveness::Alive);
        assert_eq!(rendered.applied, Slot::ALL.to_vec());
        assert_eq!(page.first(".pc-status").text().as_deref(), Some("Desk-01"));
        assert_eq!(page.first(".iphone-status").text().as_deref(), Some("Phone-02"));
        assert_eq!(page.first(".pc-status").style("color").as_deref(), Some("#4ef34eff"));

        let text = page.first(".status-text");
        assert_eq!(text.text().as_deref(), Some("活着"));
        assert_eq!(text.style("color").as_deref(), Some("#78ff67d0"));

        let dot = page.first(".status-dot");
        assert_eq!(dot.style("background-color").as_deref(), Some("#2ecc71"));
        assert_eq!(
            dot.style("box-shadow").as_deref(),
            Some("0 0 10px rgba(46, 204, 113, 0.7)")
        );
    }

    #[test]
    fn should_switch_to_red_when_asleep() {
        let page = full_page();
        let rendered = render_status(
            &page,
            &StatusSnapshot::new("Desk-01", "Phone-02", true),
            &Labels::default(),
        );

        assert_eq!(rendered.liveness, Liveness::Asleep);
        let text = page.first(".status-text");
        assert_eq!(text.text().as_deref(), Some("似了"));
        assert_eq!(text.style("color").as_deref(), Some("#e74c3c"));

        let dot = page.first(".status-dot");
        assert_eq!(dot.style("background-color").as_deref(), Some("#e74c3c"));
        assert_eq!(
            dot.style("box-shadow").as_deref(),
            Some("0 0 10px rgba(231, 76, 60, 0.7)")
        );
    }

    #[test]
    fn should_use_configured_labels() {
        let page = full_page();
        let labels = Labels {
            alive: "up".to_string(),
            asleep: "down".to_string(),
        };
        render_status(&page, &StatusSnapshot::new("a", "b", true), &labels);
        assert_eq!(page.first(".status-text").text().as_deref(), Some("down"));
    }

    #[test]
    fn should_be_idempotent() {
        let snapshot = StatusSnapshot::new("Desk-01", "Phone-02", true);
        let once = full_page();
        render_status(&once, &snapshot, &Labels::default());
        let twice = full_page();
        render_status(&twice, &snapshot, &Labels::default());
        render_status(&twice, &snapshot, &Labels::default());

        for slot in Slot::ALL {
            assert_eq!(
                once.first(slot.selector()).state(),
                twice.first(slot.selector()).state()
            );
        }
    }

    #[test]
    fn should_overwrite_previous_state() {
        let page = full_page();
        render_status(&page, &StatusSnapshot::new("a", "b", true), &Labels::default());
        render_status(&page, &StatusSnapshot::new("c", "d", false), &Labels::default());
        assert_eq!(page.first(".pc-status").text().as_deref(), Some("c"));
        assert_eq!(
            page.first(".status-dot").style("background-color").as_deref(),
            Some("#2ecc71")
        );
    }

    #[test]
    fn should_skip_missing_elements_and_apply_the_rest() {
        let page = FakePage::default()
            .with(".iphone-status", "")
            .with(".status-dot", "");
        let rendered = render_status(
            &page,
            &StatusSnapshot::new("Desk-01", "Phone-02", true),
            &Labels::default(),
        );

        assert_eq!(rendered.applied, vec![Slot::SecondaryDevice, Slot::StatusDot]);
        assert_eq!(rendered.missing(), vec![Slot::PrimaryDevice, Slot::StatusText]);
        assert_eq!(page.first(".iphone-status").text().as_deref(), Some("Phone-02"));
        assert_eq!(
            page.first(".status-dot").style("background-color").as_deref(),
            Some("#e74c3c")
        );
    }

    #[test]
    fn should_render_nothing_on_empty_page() {
        let rendered = render_status(
            &FakePage::default(),
            &StatusSnapshot::default(),
            &Labels::default(),
        );
        assert!(rendered.applied.is_empty());
        assert_eq!(rendered.missing(), Slot::ALL.to_vec());
    }

    #[test]
    fn should_report_slot_presence_from_with_slot() {
        let page = FakePage::default().with(".status-dot", "");
        assert!(with_slot(&page, Slot::StatusDot, |_| {}));
        assert!(!with_slot(&page, Slot::StatusText, |_| {
            panic!("absent slot must not be painted")
        }));
    }
}
