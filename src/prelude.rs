//! Convenient re-exports of the most frequently used types.
//!
//! ```ignore
//! use lexis::prelude::*;
//! ```

pub use crate::app::App;
pub use crate::config::DashboardConfig;
pub use crate::coordinator::Coordinator;
pub use crate::data::loader::{load_dataset, parse_dataset};
pub use crate::data::model::{Dataset, Gender, Leader, LeaderId, Region, RegionFlags};
pub use crate::error::{ConfigError, DataError};
pub use crate::events::{DashboardEvent, EventBus, EventKind, ViewId};
pub use crate::selection::SelectionState;
pub use crate::ui::{render, ClickAction, HitAreaRegistry, HoverTarget, LinkedView};
