//! "New client onboarded" notifications.
//!
//! The email is rendered from `templates/notifications/` and sent through
//! Resend. Submissions reach it through [`NotificationDispatcher`]: either
//! in-process via [`NotificationService`], or over HTTP via
//! [`clients::NotificationFunctionClient`] when the function is deployed
//! separately.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/notifications/onboarding` | Email the onboarding summary |

pub mod clients;
pub mod dispatcher;
pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use dispatcher::NotificationDispatcher;
pub use services::NotificationService;
