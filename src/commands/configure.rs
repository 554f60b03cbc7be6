use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use crate::session::SessionController;
use crate::store::{ConfigStore, FileStore};
use crate::surface::{EditOutcome, EditingSurface, PromptSurface};

#[derive(Debug, Clone, Args)]
pub struct ConfigureCommand {}

impl ConfigureCommand {
    pub async fn execute(self) -> Result<()> {
        let store = ConfigStore::new(FileStore::open_default()?);
        let mut controller = SessionController::new(store);

        controller.request_edit();
        let current = controller.get_configuration().await;

        if !current.is_empty() {
            println!("Press Enter to keep current values, or type new values.");
            println!();
        }

        let surface = PromptSurface::new();
        let outcome = surface
            .edit(&current)
            .context("Failed to complete configuration editing")?;

        match outcome {
            EditOutcome::Confirmed(draft) => {
                controller.confirm_edit(draft).await?;
                println!("\nConfiguration saved successfully.");
            }
            EditOutcome::Cancelled => {
                controller.cancel_edit();
                info!("Configuration left unchanged");
                println!("\nConfiguration left unchanged.");
            }
        }

        Ok(())
    }
}
