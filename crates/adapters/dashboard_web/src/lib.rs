//! # sleepy-dashboard
//!
//! Browser adapter for the sleepy status widget.
//!
//! ## Responsibilities
//! - Implement the `sleepy-app` ports on top of `web-sys`, `gloo-net` and `gloo-timers`
//! - Read the widget configuration from the page
//! - Attach DOM listeners and keep them alive for the page's lifetime
//! - Forward the application layer's `tracing` events to the browser console
//!
//! The widget binds to markup the page already has; it renders nothing of
//! its own.

use leptos::logging::{error, log};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{DocumentReadyState, Window};

pub mod api;
pub mod config;
pub mod dom;
pub mod navigator;
pub mod timers;
pub mod widget;

use dom::DomPage;
use widget::StatusWidget;

/// Mount the widget once the document has been parsed.
///
/// Also routes the application layer's `tracing` events to the console.
pub fn mount() {
    if tracing_wasm::try_set_as_global_default().is_err() {
        log!("tracing subscriber already installed");
    }

    let Some(window) = web_sys::window() else {
        error!("status widget needs a browser window");
        return;
    };
    let Some(document) = window.document() else {
        error!("status widget needs a document");
        return;
    };

    if document.ready_state() != DocumentReadyState::Loading {
        boot(&window);
        return;
    }

    let on_ready = Closure::<dyn FnMut(web_sys::Event)>::once({
        let window = window.clone();
        move |_: web_sys::Event| boot(&window)
    });
    if let Err(err) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        error!("failed to wait for DOMContentLoaded: {err:?}");
        return;
    }
    on_ready.forget();
}

/// Same as [`mount`], callable from a JavaScript host page.
#[wasm_bindgen(js_name = mountStatusWidget)]
pub fn mount_status_widget() {
    mount();
}

fn boot(window: &Window) {
    let Some(document) = window.document() else {
        return;
    };
    log!("status widget loaded");

    let config = config::load(&document);
    let mut widget = StatusWidget::new(DomPage::new(document), config);
    widget.start(window);
    widget.forget();
}
