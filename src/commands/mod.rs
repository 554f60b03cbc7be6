pub mod completions;
pub mod configure;
pub mod export;
pub mod show;

pub use completions::CompletionsCommand;
pub use configure::ConfigureCommand;
pub use export::ExportCommand;
pub use show::ShowCommand;
