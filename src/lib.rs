pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use app::shell::{MenuChoice, Shell};
pub use core::{GradeSummary, HistogramBin, Roster, SearchPolicy, Student, StudentId};
pub use utils::error::{Result, SimsError};
