pub mod form;
pub mod session;
pub mod step;
pub mod wizard;

pub use form::*;
pub use session::{SessionStatus, WizardSession};
pub use step::{WizardStep, TOTAL_STEPS};
