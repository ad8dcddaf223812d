pub mod search;
pub mod sort;
pub mod stats;

pub use crate::domain::model::{GradeSummary, HistogramBin, SearchPolicy, Student, StudentId};
pub use crate::domain::ports::ConfigProvider;
pub use crate::domain::roster::Roster;
pub use crate::utils::error::Result;
