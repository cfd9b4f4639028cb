pub mod common;
pub mod plan;
pub mod template;

pub use crate::domain::DomainError;
pub use common::TemplatePath;
pub use plan::{DirectoryReason, GenerationPlan, PlannedAction};
pub use template::{Template, TemplateBuilder, TemplateFile};
