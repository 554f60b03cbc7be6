use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};

use crate::configuration::{AwsConfiguration, AwsCredentials};

/// Result of one pass through the editing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The user confirmed; commit this draft wholesale.
    Confirmed(AwsConfiguration),
    /// The user backed out; the stored configuration must not change.
    Cancelled,
}

/// Collects the four configuration fields and either a complete draft or a
/// cancellation. Field buffering is local to the surface; nothing reaches
/// storage until the caller commits the confirmed draft.
pub trait EditingSurface {
    fn edit(&self, current: &AwsConfiguration) -> Result<EditOutcome>;
}

/// Interactive terminal editing surface.
///
/// Region and access key id are shown in the clear, prefilled with the
/// current value. Secret access key and session token are masked; entering
/// nothing keeps the current value.
#[derive(Debug, Default)]
pub struct PromptSurface {}

impl PromptSurface {
    pub fn new() -> Self {
        Self {}
    }
}

impl EditingSurface for PromptSurface {
    fn edit(&self, current: &AwsConfiguration) -> Result<EditOutcome> {
        let theme = ColorfulTheme::default();
        let current_creds = current.credentials.clone().unwrap_or_default();

        let region = Input::<String>::with_theme(&theme)
            .with_prompt("AWS Region")
            .default(current.region.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()
            .context("Failed to read AWS region")?;

        let access_key_id = Input::<String>::with_theme(&theme)
            .with_prompt("AWS Access Key ID")
            .default(current_creds.access_key_id.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()
            .context("Failed to read AWS access key ID")?;

        let secret_access_key = prompt_secret(
            &theme,
            "AWS Secret Access Key",
            current_creds.secret_access_key.as_deref(),
        )
        .context("Failed to read AWS secret access key")?;

        let session_token = prompt_secret(
            &theme,
            "AWS Session Token",
            current_creds.session_token.as_deref(),
        )
        .context("Failed to read AWS session token")?;

        let draft = AwsConfiguration {
            region: normalize(region),
            credentials: Some(AwsCredentials {
                access_key_id: normalize(access_key_id),
                secret_access_key,
                session_token,
            }),
        };

        let confirmed = Confirm::with_theme(&theme)
            .with_prompt("Save configuration?")
            .default(true)
            .interact()
            .context("Failed to read confirmation")?;

        if confirmed {
            Ok(EditOutcome::Confirmed(draft))
        } else {
            Ok(EditOutcome::Cancelled)
        }
    }
}

/// Prompt for a masked field. Empty input keeps the current value.
fn prompt_secret(
    theme: &ColorfulTheme,
    label: &str,
    current: Option<&str>,
) -> Result<Option<String>> {
    let prompt = match current {
        Some(value) if !value.is_empty() => format!("{label} [{}]", masked_hint(value)),
        _ => label.to_string(),
    };

    let entered = Password::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;

    if entered.is_empty() {
        Ok(current.map(String::from))
    } else {
        Ok(Some(entered))
    }
}

/// Map an empty input field to "unset" rather than an empty string.
fn normalize(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Mask a secret for display, keeping only the last four characters.
pub fn masked_hint(value: &str) -> String {
    let visible: String = value
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{visible}")
}
