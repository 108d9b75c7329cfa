mod step_dto;
mod wizard_dto;

pub use step_dto::*;
pub use wizard_dto::*;
