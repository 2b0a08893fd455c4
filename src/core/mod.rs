pub mod installer;
pub mod selection;

pub use crate::domain::model::{CopyAction, CopyPlan, InstallSummary, PlanEntry, SourceFile};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
