//! `window.open` implementation of the navigator port.

use sleepy_app::ports::{NavigationError, Navigator};
use web_sys::Window;

pub struct WindowNavigator {
    window: Window,
}

impl WindowNavigator {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for WindowNavigator {
    fn open_in_new_context(&self, url: &str) -> Result<(), NavigationError> {
        match self.window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(NavigationError {
                url: url.to_string(),
                reason: "blocked by the browser".to_string(),
            }),
            Err(err) => Err(NavigationError {
                url: url.to_string(),
                reason: format!("{err:?}"),
            }),
        }
    }
}
