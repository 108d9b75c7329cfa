mod wizard_service;

pub use wizard_service::WizardService;
