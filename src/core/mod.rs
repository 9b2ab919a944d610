pub mod form;
pub mod notices;
pub mod selection;
pub mod session;

pub use crate::domain::model::{DocumentRequest, Group, Professor, ProfessorRank, Student};
pub use crate::domain::ports::{ConfigProvider, Storage, WorksheetGateway};
pub use crate::utils::error::Result;
