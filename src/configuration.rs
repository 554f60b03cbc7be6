use serde::{Deserialize, Serialize};

/// The region + credential tuple persisted by this tool.
///
/// All fields are free-form strings; nothing is validated before commit.
/// Absent fields are omitted from the serialized form so that "never
/// configured" stays distinguishable from "configured with an empty string".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<AwsCredentials>,
}

/// Static AWS credentials. The session token is only present for temporary
/// (STS-issued) credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

impl AwsConfiguration {
    /// True when neither a region nor any credential field has been set.
    pub fn is_empty(&self) -> bool {
        self.region.is_none()
            && self
                .credentials
                .as_ref()
                .is_none_or(|c| c.access_key_id.is_none() && c.secret_access_key.is_none() && c.session_token.is_none())
    }
}
