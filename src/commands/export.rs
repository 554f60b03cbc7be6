use anyhow::Result;
use clap::Args;

use crate::aws_files;
use crate::session::SessionController;
use crate::store::{ConfigStore, FileStore};

#[derive(Debug, Clone, Args)]
pub struct ExportCommand {
    #[arg(
        short = 'p',
        long,
        default_value = "default",
        help = "AWS profile name to write"
    )]
    pub profile: String,
}

impl ExportCommand {
    pub async fn execute(self) -> Result<()> {
        let store = ConfigStore::new(FileStore::open_default()?);
        let controller = SessionController::new(store);
        let config = controller.get_configuration().await;

        aws_files::write_profile(&self.profile, &config).await?;

        println!("AWS credentials written to {} profile.", self.profile);
        Ok(())
    }
}
