pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Commands};

pub use adapters::{ScriptedConsole, StdConsole};
pub use config::toml_config::TomlConfig;
pub use crate::core::runner::DrillRunner;
pub use domain::ports::{Console, Drill};
pub use utils::error::{DrillError, Result};
