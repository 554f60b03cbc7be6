use anyhow::{Context, Result};
use clap::Args;

use crate::configuration::AwsConfiguration;
use crate::session::SessionController;
use crate::store::{ConfigStore, FileStore};
use crate::surface::masked_hint;

#[derive(Debug, Clone, Args)]
pub struct ShowCommand {
    #[arg(long, help = "Print the stored configuration as JSON (secrets unmasked)")]
    pub json: bool,
}

impl ShowCommand {
    pub async fn execute(self) -> Result<()> {
        let store = ConfigStore::new(FileStore::open_default()?);
        let controller = SessionController::new(store);
        let config = controller.get_configuration().await;

        if self.json {
            let raw = serde_json::to_string_pretty(&config)
                .context("Failed to serialize configuration")?;
            println!("{raw}");
            return Ok(());
        }

        if config.is_empty() {
            println!("No AWS configuration stored. Run `awscreds configure` to set one up.");
            return Ok(());
        }

        print_summary(&config);
        Ok(())
    }
}

fn print_summary(config: &AwsConfiguration) {
    println!("Region:            {}", field(config.region.as_deref()));

    let creds = config.credentials.clone().unwrap_or_default();
    println!(
        "Access Key ID:     {}",
        field(creds.access_key_id.as_deref())
    );
    println!(
        "Secret Access Key: {}",
        masked_field(creds.secret_access_key.as_deref())
    );
    println!(
        "Session Token:     {}",
        masked_field(creds.session_token.as_deref())
    );
}

fn field(value: Option<&str>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "(not set)".to_string(),
    }
}

fn masked_field(value: Option<&str>) -> String {
    match value {
        Some(v) => masked_hint(v),
        None => "(not set)".to_string(),
    }
}
