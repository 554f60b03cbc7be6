use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::configuration::AwsConfiguration;
use crate::constants::{self, CONFIGURATION_KEY};

/// Durable key-value persistence collaborator.
///
/// Values are opaque strings; callers decide the serialization. A single
/// active session is assumed, so implementations do not need to lock.
#[async_trait]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed key-value store holding a single JSON object.
///
/// An unreadable or corrupt backing file is treated as empty rather than
/// surfaced as an error, so a damaged file never blocks reconfiguration.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Open the store at the default location
    /// (`~/.config/awscreds/storage.json`, or `AWSCREDS_STORAGE_FILE` if set).
    pub fn open_default() -> Result<Self> {
        let path = constants::get_storage_path().context("Failed to determine storage path")?;
        Ok(Self::new(path))
    }

    async fn read_entries(&self) -> BTreeMap<String, String> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                debug!("Ignoring corrupt storage file {}: {e}", self.path.display());
                BTreeMap::new()
            }),
            Err(e) => {
                debug!("Storage file {} not readable: {e}", self.path.display());
                BTreeMap::new()
            }
        }
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries().await.remove(key))
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries().await;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let raw = serde_json::to_string_pretty(&entries).context("Failed to serialize storage")?;
        fs::write(&self.path, raw)
            .await
            .with_context(|| format!("Failed to write storage file: {}", self.path.display()))?;

        // Stored values include secrets in clear text, so restrict access
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = fs::metadata(&self.path).await?;
            let mut permissions = metadata.permissions();
            permissions.set_mode(0o600);
            fs::set_permissions(&self.path, permissions).await?;
        }

        Ok(())
    }
}

/// In-process key-value store for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Persists one [`AwsConfiguration`] under the fixed `aws.configuration` key.
#[derive(Debug, Clone)]
pub struct ConfigStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ConfigStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Load the persisted configuration.
    ///
    /// An absent, unreadable, or unparseable value yields the empty
    /// configuration. Failures are logged but never surfaced; the fallback
    /// to defaults is deliberate policy, not an omission.
    pub async fn load(&self) -> AwsConfiguration {
        let raw = match self.backend.get(CONFIGURATION_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return AwsConfiguration::default(),
            Err(e) => {
                debug!("Failed to read stored configuration: {e}");
                return AwsConfiguration::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            debug!("Ignoring unparseable stored configuration: {e}");
            AwsConfiguration::default()
        })
    }

    /// Persist `config`, replacing any prior value wholesale.
    pub async fn save(&mut self, config: &AwsConfiguration) -> Result<()> {
        let raw = serde_json::to_string(config).context("Failed to serialize configuration")?;
        self.backend
            .set(CONFIGURATION_KEY, &raw)
            .await
            .context("Failed to persist configuration")
    }
}
