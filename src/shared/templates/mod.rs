//! Email template rendering.
//!
//! Templates are embedded at compile time from `templates/` and rendered with
//! Jinja2 syntax. Names ending in `.html` are HTML auto-escaped, so user input
//! interpolated into notification emails cannot inject markup.

pub mod engine;

pub use engine::{render_template, ONBOARDING_NOTIFICATION_TEMPLATE};
