//! Submission of a completed onboarding form.
//!
//! Files are pushed to object storage, the form is stored as one
//! `onboarding_submissions` row plus its complete `email_accounts`, and a
//! notification is fired without waiting for it. There are no routes here;
//! the wizard's submit endpoint drives [`SubmissionService`].

pub mod dtos;
pub mod models;
pub mod repository;
pub mod services;

pub use repository::PgRecordStore;
pub use services::SubmissionService;
