//! In-memory port implementations shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use sleepy_domain::error::StatusError;
use sleepy_domain::snapshot::StatusSnapshot;

use crate::ports::{
    Element, NavigationError, Navigator, Page, Scheduler, StatusSource, decode_response,
};

/// Everything written to a [`FakeElement`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub text: Option<String>,
    pub styles: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    id: String,
    state: Rc<RefCell<ElementState>>,
}

impl FakeElement {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            state: Rc::default(),
        }
    }

    pub fn state(&self) -> ElementState {
        self.state.borrow().clone()
    }

    pub fn text(&self) -> Option<String> {
        self.state.borrow().text.clone()
    }

    /// Inline style value; `None` when unset or reset to empty.
    pub fn style(&self, property: &str) -> Option<String> {
        self.state.borrow().styles.get(property).cloned()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class)
    }
}

impl Element for FakeElement {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn set_text(&self, text: &str) {
        self.state.borrow_mut().text = Some(text.to_string());
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        if value.is_empty() {
            state.styles.remove(property);
        } else {
            state.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn add_class(&self, class: &str) {
        let mut state = self.state.borrow_mut();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_string());
        }
    }
}

/// Page made of `(selector, element)` pairs; selectors match verbatim.
#[derive(Debug, Clone, Default)]
pub struct FakePage {
    elements: Vec<(String, FakeElement)>,
}

impl FakePage {
    pub fn with(mut self, selector: &str, id: &str) -> Self {
        self.elements
            .push((selector.to_string(), FakeElement::new(id)));
        self
    }

    /// First element registered under `selector`; panics when absent.
    pub fn first(&self, selector: &str) -> FakeElement {
        self.query(selector)
            .unwrap_or_else(|| panic!("no element for {selector}"))
    }
}

impl Page for FakePage {
    type Element = FakeElement;

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        self.elements
            .iter()
            .filter(|(s, _)| s == selector)
            .map(|(_, el)| el.clone())
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<FakeElement> {
        self.elements
            .iter()
            .find(|(_, el)| el.id == id)
            .map(|(_, el)| el.clone())
    }
}

type Tick = Box<dyn FnMut()>;
type Task = Box<dyn FnOnce()>;

struct Interval {
    period: Duration,
    cancelled: Rc<Cell<bool>>,
    tick: Tick,
}

/// Scheduler whose timers only fire when the test says so.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    intervals: Rc<RefCell<Vec<Interval>>>,
    timeouts: Rc<RefCell<Vec<(Duration, Task)>>>,
}

/// Cancels its interval on drop.
pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    /// Fire every live interval once.
    pub fn tick(&self) {
        let mut intervals = self.intervals.borrow_mut();
        intervals.retain(|i| !i.cancelled.get());
        for interval in intervals.iter_mut() {
            (interval.tick)();
        }
    }

    pub fn active_intervals(&self) -> usize {
        self.intervals
            .borrow()
            .iter()
            .filter(|i| !i.cancelled.get())
            .count()
    }

    /// Periods of the live intervals.
    pub fn periods(&self) -> Vec<Duration> {
        self.intervals
            .borrow()
            .iter()
            .filter(|i| !i.cancelled.get())
            .map(|i| i.period)
            .collect()
    }

    /// Delays of the pending one-shot tasks.
    pub fn pending_delays(&self) -> Vec<Duration> {
        self.timeouts.borrow().iter().map(|(d, _)| *d).collect()
    }

    /// Run and discard every pending one-shot task.
    pub fn run_timeouts(&self) {
        let pending: Vec<(Duration, Task)> = self.timeouts.borrow_mut().drain(..).collect();
        for (_, task) in pending {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn every<F>(&self, period: Duration, tick: F) -> ManualHandle
    where
        F: FnMut() + 'static,
    {
        let cancelled = Rc::new(Cell::new(false));
        self.intervals.borrow_mut().push(Interval {
            period,
            cancelled: Rc::clone(&cancelled),
            tick: Box::new(tick),
        });
        ManualHandle { cancelled }
    }

    fn after<F>(&self, delay: Duration, task: F)
    where
        F: FnOnce() + 'static,
    {
        self.timeouts.borrow_mut().push((delay, Box::new(task)));
    }
}

/// Navigator that records every URL it is asked to open.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub opened: RefCell<Vec<String>>,
    pub blocked: bool,
}

impl Navigator for RecordingNavigator {
    fn open_in_new_context(&self, url: &str) -> Result<(), NavigationError> {
        if self.blocked {
            return Err(NavigationError {
                url: url.to_string(),
                reason: "popup blocked".to_string(),
            });
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Status source answering every fetch the same way.
pub enum CannedSource {
    /// Decode this body on each fetch.
    Body(String),
    /// Fail at the transport level.
    Unreachable,
    /// Answer with this HTTP status and body.
    Status(u16, String),
}

impl StatusSource for CannedSource {
    async fn fetch(&self) -> Result<StatusSnapshot, StatusError> {
        match self {
            Self::Body(body) => StatusSnapshot::from_json(body),
            Self::Unreachable => Err(StatusError::Network("connection refused".to_string())),
            Self::Status(status, body) => decode_response(*status, body),
        }
    }
}
