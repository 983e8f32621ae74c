//! The mounted status widget: wires DOM events to the application layer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::logging::{error, log, warn};
use leptos::task::spawn_local;
use sleepy_app::blinker::Blinker;
use sleepy_app::config::WidgetConfig;
use sleepy_app::interactions::{self, LinkBox};
use sleepy_app::ports::{Page, Scheduler};
use sleepy_app::render::Slot;
use sleepy_app::services::status_service::StatusService;
use sleepy_domain::blink::BlinkState;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, KeyboardEvent, Window};

use crate::api::HttpStatusSource;
use crate::dom::{DomElement, DomPage};
use crate::navigator::WindowNavigator;
use crate::timers::GlooScheduler;

type Listener = Closure<dyn FnMut(web_sys::Event)>;
type Status = Rc<StatusService<HttpStatusSource, DomPage>>;

/// Failure to attach an event listener.
#[derive(Debug, thiserror::Error)]
#[error("failed to listen for `{kind}` events: {reason}")]
pub struct ListenError {
    kind: &'static str,
    reason: String,
}

/// Keep an attached listener, or log why it could not be attached.
///
/// Returns whether the listener was kept. A refused listener only disables
/// its own affordance; the rest of the widget keeps wiring.
fn keep<T>(kept: &mut Vec<T>, attached: Result<T, ListenError>) -> bool {
    match attached {
        Ok(listener) => {
            kept.push(listener);
            true
        }
        Err(err) => {
            warn!("{err}");
            false
        }
    }
}

fn listen(
    target: &EventTarget,
    kind: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<Listener, ListenError> {
    let closure = Listener::new(handler);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|err| ListenError {
            kind,
            reason: format!("{err:?}"),
        })?;
    Ok(closure)
}

/// A status widget bound to the page.
///
/// Owns every listener closure and timer it created; dropping it detaches
/// the widget from JavaScript's reach, so the entry point keeps it alive for
/// the lifetime of the page.
pub struct StatusWidget {
    config: WidgetConfig,
    page: DomPage,
    status: Status,
    blinker: Rc<RefCell<Blinker<GlooScheduler, DomElement>>>,
    refresh: Option<Interval>,
    listeners: Vec<Listener>,
}

impl StatusWidget {
    /// Bind to `page` with `config`. Nothing runs until [`Self::start`].
    pub fn new(page: DomPage, config: WidgetConfig) -> Self {
        let status = Rc::new(StatusService::new(
            HttpStatusSource::new(config.endpoint.clone()),
            page.clone(),
            config.labels.clone(),
        ));
        let dot = page.query(Slot::StatusDot.selector());
        let blinker = Blinker::new(GlooScheduler, dot, config.blink_period());
        Self {
            config,
            page,
            status,
            blinker: Rc::new(RefCell::new(blinker)),
            refresh: None,
            listeners: Vec::new(),
        }
    }

    /// Load the status, attach the interactions and start the blink.
    ///
    /// A listener the browser refuses is logged and skipped.
    pub fn start(&mut self, window: &Window) {
        spawn_load(Rc::clone(&self.status));
        if let Some(period) = self.config.refresh_interval() {
            let status = Rc::clone(&self.status);
            self.refresh = Some(GlooScheduler.every(period, move || {
                spawn_load(Rc::clone(&status));
            }));
        }

        self.attach_interactions(window);
        self.start_blink();
    }

    /// Press feedback on the content boxes, navigation on the link box.
    fn attach_interactions(&mut self, window: &Window) {
        let delay = self.config.press_feedback();

        for info_box in interactions::feedback_boxes(&self.page, &self.config.link) {
            let target: EventTarget = info_box.html().clone().into();
            let listener = listen(&target, "click", move |_: web_sys::Event| {
                interactions::press_feedback(&info_box, &GlooScheduler, delay);
            });
            keep(&mut self.listeners, listener);
        }

        let Some(link) = LinkBox::find(&self.page, &self.config.link) else {
            return;
        };
        link.prepare();
        let target: EventTarget = link.element().html().clone().into();

        let navigator = WindowNavigator::new(window.clone());
        let on_click = {
            let link = link.clone();
            move |_: web_sys::Event| {
                if let Err(err) = link.activate(&navigator, &GlooScheduler, delay) {
                    warn!("{err}");
                }
            }
        };
        keep(&mut self.listeners, listen(&target, "click", on_click));

        let on_key = move |event: web_sys::Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            if interactions::is_activation_key(&key) {
                event.prevent_default();
                link.element().html().click();
            }
        };
        keep(&mut self.listeners, listen(&target, "keydown", on_key));
    }

    /// Start breathing the dot and let the cancel key toggle it.
    fn start_blink(&mut self) {
        self.blinker.borrow_mut().start();

        let blinker = Rc::clone(&self.blinker);
        let on_key = move |event: web_sys::Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            if !interactions::is_cancel_key(&key) {
                return;
            }
            match blinker.borrow_mut().toggle() {
                Some(BlinkState::Stopped) => log!("indicator blink stopped"),
                Some(BlinkState::Running) => log!("indicator blink started"),
                None => {}
            }
        };
        let target: EventTarget = self.page.document().clone().into();
        if !keep(&mut self.listeners, listen(&target, "keydown", on_key)) {
            warn!("cancel key unavailable, indicator keeps blinking");
        }
    }

    /// Keep the widget alive for the rest of the page's lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

fn spawn_load(status: Status) {
    spawn_local(async move {
        if let Err(err) = status.load_status().await {
            error!("failed to load status: {err}");
        }
    });
}
