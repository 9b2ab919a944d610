pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{HttpGateway, LocalStorage};
pub use config::{toml_config::WorksheetJob, CliConfig};
pub use core::form::FormFields;
pub use core::selection::SelectionState;
pub use core::session::{SubmitOutcome, WorksheetSession};
pub use utils::error::{Result, WorksheetError};
