//! Status service: load the current status and render it.

use sleepy_domain::error::StatusError;

use crate::config::Labels;
use crate::ports::{Page, StatusSource};
use crate::render::{Rendered, render_status};

/// Application service behind the widget's status refresh.
pub struct StatusService<Src, P> {
    source: Src,
    page: P,
    labels: Labels,
}

impl<Src: StatusSource, P: Page> StatusService<Src, P> {
    /// Create a new service fetching from `source` and rendering into `page`.
    pub fn new(source: Src, page: P, labels: Labels) -> Self {
        Self {
            source,
            page,
            labels,
        }
    }

    /// Fetch one snapshot and render it.
    ///
    /// On failure nothing is written: the page keeps whatever it showed
    /// before. There is no retry; the caller logs and moves on.
    ///
    /// # Errors
    ///
    /// Returns the [`StatusError`] from the source (network or parse).
    #[tracing::instrument(skip(self))]
    pub async fn load_status(&self) -> Result<Rendered, StatusError> {
        let snapshot = self
            .source
            .fetch()
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "status load failed"))?;
        tracing::debug!(
            asleep = snapshot.asleep,
            primary_process = ?snapshot.primary_process,
            reported_at = ?snapshot.reported_at,
            "status snapshot received"
        );

        let rendered = render_status(&self.page, &snapshot, &self.labels);
        if !rendered.missing().is_empty() {
            tracing::debug!(missing = ?rendered.missing(), "status rendered partially");
        }
        Ok(rendered)
    }

    pub fn page(&self) -> &P {
        &self.page
    }
}
