use std::{env, path::PathBuf};

use dirs;

/// Default configuration directory name under user's config directory
pub const CONFIG_DIR_NAME: &str = "awscreds";

/// Storage file name holding the persisted key-value entries
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Environment variable overriding the storage file location
pub const STORAGE_FILE_ENV: &str = "AWSCREDS_STORAGE_FILE";

/// Key under which the AWS configuration is persisted
pub const CONFIGURATION_KEY: &str = "aws.configuration";

/// AWS configuration directory name
pub const AWS_CONFIG_DIR_NAME: &str = ".aws";

/// AWS configuration file name
pub const AWS_CONFIG_FILE_NAME: &str = "config";

/// AWS shared credentials file name
pub const AWS_CREDENTIALS_FILE_NAME: &str = "credentials";

/// Get the storage file path
/// Respects AWSCREDS_STORAGE_FILE environment variable if set
/// Default: ~/.config/awscreds/storage.json (on all platforms)
pub fn get_storage_path() -> Option<PathBuf> {
    // Check environment variable first
    if let Ok(path) = env::var(STORAGE_FILE_ENV) {
        return Some(PathBuf::from(path));
    }

    // Always use home directory with .config, regardless of platform
    // This ensures consistent behavior across all OSes
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join(CONFIG_DIR_NAME)
            .join(STORAGE_FILE_NAME)
    })
}

/// Get the AWS config file path
/// Respects AWS_CONFIG_FILE environment variable if set
pub fn get_aws_config_path() -> Option<PathBuf> {
    // Check environment variable first
    if let Ok(path) = env::var("AWS_CONFIG_FILE") {
        return Some(PathBuf::from(path));
    }

    // Use default AWS config location
    dirs::home_dir().map(|home| home.join(AWS_CONFIG_DIR_NAME).join(AWS_CONFIG_FILE_NAME))
}

/// Get the AWS credentials file path
/// Respects AWS_SHARED_CREDENTIALS_FILE environment variable if set
pub fn get_aws_credentials_path() -> Option<PathBuf> {
    // Check environment variable first
    if let Ok(path) = env::var("AWS_SHARED_CREDENTIALS_FILE") {
        return Some(PathBuf::from(path));
    }

    // Use default AWS credentials location
    dirs::home_dir().map(|home| {
        home.join(AWS_CONFIG_DIR_NAME)
            .join(AWS_CREDENTIALS_FILE_NAME)
    })
}
