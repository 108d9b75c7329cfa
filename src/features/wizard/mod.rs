//! Multi-step client onboarding wizard.
//!
//! A session walks through eight fixed steps (firm details, email IDs,
//! do-not-contact list, leadership, company profile, LinkedIn access,
//! website access, additional notes). Navigation is free in both directions
//! and never checks field contents. Files are staged in memory and only
//! uploaded when the form is submitted.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/onboarding/sessions` | Start a session |
//! | GET | `/api/onboarding/sessions/{id}` | Wizard state |
//! | DELETE | `/api/onboarding/sessions/{id}` | Discard a session |
//! | PUT | `/api/onboarding/sessions/{id}/form` | Save one step's fields |
//! | POST | `/api/onboarding/sessions/{id}/advance` | Next step |
//! | POST | `/api/onboarding/sessions/{id}/retreat` | Previous step |
//! | POST | `/api/onboarding/sessions/{id}/files/{slot}` | Stage a file |
//! | DELETE | `/api/onboarding/sessions/{id}/files/{slot}` | Remove a staged file |
//! | POST | `/api/onboarding/sessions/{id}/submit` | Submit the form |
//! | POST | `/api/onboarding/sessions/{id}/reset` | Start over |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::WizardService;
