use anyhow::Result;
use tracing::{debug, info};

use crate::configuration::AwsConfiguration;
use crate::store::{ConfigStore, KeyValueStore};

/// Mediates between the stored configuration and the editing surface.
///
/// The controller owns the ephemeral editing-visibility flag and is the only
/// writer of the stored configuration; consumers read through
/// [`get_configuration`](Self::get_configuration) and may ask for an edit via
/// [`request_edit`](Self::request_edit), nothing else. Construct one at the
/// top of the call graph and pass it down to whatever needs it.
///
/// The edit session is a two-state machine: `Idle` and `Editing`.
/// `request_edit` enters `Editing`; `cancel_edit` and `confirm_edit` return
/// to `Idle`, the latter committing the draft first.
#[derive(Debug)]
pub struct SessionController<S> {
    store: ConfigStore<S>,
    editing_visible: bool,
}

impl<S: KeyValueStore> SessionController<S> {
    pub fn new(store: ConfigStore<S>) -> Self {
        Self {
            store,
            editing_visible: false,
        }
    }

    /// Current configuration, reflecting the latest committed value.
    pub async fn get_configuration(&self) -> AwsConfiguration {
        self.store.load().await
    }

    /// Make the editing surface visible. Idempotent if already editing.
    pub fn request_edit(&mut self) {
        if !self.editing_visible {
            debug!("Opening configuration editor");
        }
        self.editing_visible = true;
    }

    /// Hide the editing surface without touching the stored configuration.
    pub fn cancel_edit(&mut self) {
        debug!("Configuration edit cancelled");
        self.editing_visible = false;
    }

    /// Commit `draft` as the new configuration, replacing the stored value
    /// wholesale, then hide the editing surface.
    ///
    /// The draft is committed as-is; no field is validated.
    pub async fn confirm_edit(&mut self, draft: AwsConfiguration) -> Result<()> {
        self.store.save(&draft).await?;
        self.editing_visible = false;
        info!("Configuration saved");
        Ok(())
    }

    /// Whether the editing surface is currently visible.
    pub fn is_editing(&self) -> bool {
        self.editing_visible
    }
}
