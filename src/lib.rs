//! Manage one durable AWS configuration (region plus static credentials)
//! from the terminal.
//!
//! The pieces compose through plain dependency injection: a
//! [`store::KeyValueStore`] backend persists the serialized configuration, a
//! [`store::ConfigStore`] owns its serialization, and a
//! [`session::SessionController`] mediates reads and edit commits for
//! everything above it. The interactive editor lives behind the
//! [`surface::EditingSurface`] trait so embedders can supply their own.

pub mod aws_files;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod constants;
pub mod session;
pub mod store;
pub mod surface;

pub use configuration::{AwsConfiguration, AwsCredentials};
pub use session::SessionController;
pub use store::{ConfigStore, FileStore, KeyValueStore, MemoryStore};
