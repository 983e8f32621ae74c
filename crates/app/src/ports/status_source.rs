//! Status source port: where snapshots come from.

use std::future::Future;
use std::rc::Rc;

use sleepy_domain::error::StatusError;
use sleepy_domain::snapshot::StatusSnapshot;

/// Fetches one [`StatusSnapshot`] per call.
///
/// The futures are not `Send`: the only production implementation runs on
/// the browser's single thread.
pub trait StatusSource {
    /// Issue one request and decode its body.
    fn fetch(&self) -> impl Future<Output = Result<StatusSnapshot, StatusError>>;
}

/// Decode a response body whatever its HTTP status.
///
/// A non-2xx status is logged and otherwise ignored: an error page that
/// still carries a status object renders like a normal answer.
///
/// # Errors
///
/// Returns [`StatusError::Parse`] when `body` is not JSON.
pub fn decode_response(status: u16, body: &str) -> Result<StatusSnapshot, StatusError> {
    if !(200..300).contains(&status) {
        tracing::warn!(status, "status endpoint answered with an error status");
    }
    StatusSnapshot::from_json(body)
}

impl<T: StatusSource> StatusSource for Rc<T> {
    fn fetch(&self) -> impl Future<Output = Result<StatusSnapshot, StatusError>> {
        (**self).fetch()
    }
}
