use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use ini::Ini;
use tokio::fs;
use tracing::info;

use crate::configuration::AwsConfiguration;
use crate::constants;

/// Write the stored configuration into the AWS shared credentials and config
/// files so standard AWS tooling can pick it up.
///
/// Requires at least an access key id and secret access key; the session
/// token is written only when present, and the region only updates the
/// config file when set.
pub async fn write_profile(profile: &str, config: &AwsConfiguration) -> Result<()> {
    let creds = config
        .credentials
        .as_ref()
        .filter(|c| c.access_key_id.is_some() && c.secret_access_key.is_some());

    let Some(creds) = creds else {
        bail!("No credentials stored. Run `awscreds configure` first.");
    };

    let path = get_aws_credentials_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut ini = path
        .exists()
        .then(|| Ini::load_from_file(&path).ok())
        .flatten()
        .unwrap_or_else(Ini::new);

    let access_key_id = creds.access_key_id.as_deref().unwrap_or_default();
    let secret_access_key = creds.secret_access_key.as_deref().unwrap_or_default();

    match &creds.session_token {
        Some(token) => {
            ini.with_section(Some(profile))
                .set("aws_access_key_id", access_key_id)
                .set("aws_secret_access_key", secret_access_key)
                .set("aws_session_token", token);
        }
        None => {
            // Drop any stale token left by a previous export
            ini.with_section(Some(profile))
                .set("aws_access_key_id", access_key_id)
                .set("aws_secret_access_key", secret_access_key)
                .delete(&"aws_session_token");
        }
    }

    ini.write_to_file(&path)
        .context("Failed to write credentials file")?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = fs::metadata(&path).await?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(0o600);
        fs::set_permissions(&path, permissions).await?;
    }

    if let Some(region) = &config.region {
        write_region(profile, region).await?;
    }

    info!("Credentials exported to profile: {}", profile);
    Ok(())
}

/// Update the region for `profile` in the AWS config file.
async fn write_region(profile: &str, region: &str) -> Result<()> {
    let path = get_aws_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut ini = path
        .exists()
        .then(|| Ini::load_from_file(&path).ok())
        .flatten()
        .unwrap_or_else(Ini::new);

    // The AWS config file prefixes non-default profile sections
    let section_name = if profile == "default" {
        profile.to_string()
    } else {
        format!("profile {profile}")
    };

    ini.with_section(Some(section_name)).set("region", region);

    ini.write_to_file(&path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

fn get_aws_credentials_path() -> Result<PathBuf> {
    constants::get_aws_credentials_path().context("Failed to determine AWS credentials path")
}

fn get_aws_config_path() -> Result<PathBuf> {
    constants::get_aws_config_path().context("Failed to determine AWS config path")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::AwsCredentials;
    use serial_test::serial;
    use std::env;

    struct EnvGuard {
        saved: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn set(vars: &[(&'static str, &str)]) -> Self {
            let saved = vars
                .iter()
                .map(|(name, value)| {
                    let original = env::var(name).ok();
                    unsafe {
                        env::set_var(name, value);
                    }
                    (*name, original)
                })
                .collect();
            Self { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (name, original) in &self.saved {
                unsafe {
                    match original {
                        Some(val) => env::set_var(name, val),
                        None => env::remove_var(name),
                    }
                }
            }
        }
    }

    fn configured(region: Option<&str>, token: Option<&str>) -> AwsConfiguration {
        AwsConfiguration {
            region: region.map(String::from),
            credentials: Some(AwsCredentials {
                access_key_id: Some("AKIAEXAMPLE".to_string()),
                secret_access_key: Some("wJalrXUtnFEMI".to_string()),
                session_token: token.map(String::from),
            }),
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_export_writes_credentials_and_region() {
        let dir = tempfile::tempdir().unwrap();
        let creds_path = dir.path().join("credentials");
        let config_path = dir.path().join("config");
        let _guard = EnvGuard::set(&[
            ("AWS_SHARED_CREDENTIALS_FILE", creds_path.to_str().unwrap()),
            ("AWS_CONFIG_FILE", config_path.to_str().unwrap()),
        ]);

        write_profile("default", &configured(Some("ap-northeast-1"), Some("token")))
            .await
            .unwrap();

        let creds = Ini::load_from_file(&creds_path).unwrap();
        let section = creds.section(Some("default")).unwrap();
        assert_eq!(section.get("aws_access_key_id"), Some("AKIAEXAMPLE"));
        assert_eq!(section.get("aws_secret_access_key"), Some("wJalrXUtnFEMI"));
        assert_eq!(section.get("aws_session_token"), Some("token"));

        let config = Ini::load_from_file(&config_path).unwrap();
        let section = config.section(Some("default")).unwrap();
        assert_eq!(section.get("region"), Some("ap-northeast-1"));
    }

    #[tokio::test]
    #[serial]
    async fn test_export_named_profile_prefixes_config_section() {
        let dir = tempfile::tempdir().unwrap();
        let creds_path = dir.path().join("credentials");
        let config_path = dir.path().join("config");
        let _guard = EnvGuard::set(&[
            ("AWS_SHARED_CREDENTIALS_FILE", creds_path.to_str().unwrap()),
            ("AWS_CONFIG_FILE", config_path.to_str().unwrap()),
        ]);

        write_profile("staging", &configured(Some("eu-central-1"), None))
            .await
            .unwrap();

        let creds = Ini::load_from_file(&creds_path).unwrap();
        assert!(creds.section(Some("staging")).is_some());

        let config = Ini::load_from_file(&config_path).unwrap();
        assert!(config.section(Some("profile staging")).is_some());
        assert!(config.section(Some("staging")).is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_export_removes_stale_session_token() {
        let dir = tempfile::tempdir().unwrap();
        let creds_path = dir.path().join("credentials");
        let config_path = dir.path().join("config");
        let _guard = EnvGuard::set(&[
            ("AWS_SHARED_CREDENTIALS_FILE", creds_path.to_str().unwrap()),
            ("AWS_CONFIG_FILE", config_path.to_str().unwrap()),
        ]);

        write_profile("default", &configured(None, Some("token")))
            .await
            .unwrap();
        write_profile("default", &configured(None, None)).await.unwrap();

        let creds = Ini::load_from_file(&creds_path).unwrap();
        let section = creds.section(Some("default")).unwrap();
        assert_eq!(section.get("aws_session_token"), None);
    }

    #[tokio::test]
    #[serial]
    async fn test_export_without_credentials_fails() {
        let dir = tempfile::tempdir().unwrap();
        let creds_path = dir.path().join("credentials");
        let _guard = EnvGuard::set(&[
            ("AWS_SHARED_CREDENTIALS_FILE", creds_path.to_str().unwrap()),
        ]);

        let result = write_profile("default", &AwsConfiguration::default()).await;
        assert!(result.is_err());
        assert!(!creds_path.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    #[serial]
    async fn test_export_sets_restrictive_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let creds_path = dir.path().join("credentials");
        let config_path = dir.path().join("config");
        let _guard = EnvGuard::set(&[
            ("AWS_SHARED_CREDENTIALS_FILE", creds_path.to_str().unwrap()),
            ("AWS_CONFIG_FILE", config_path.to_str().unwrap()),
        ]);

        write_profile("default", &configured(None, None)).await.unwrap();

        let mode = std::fs::metadata(&creds_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
