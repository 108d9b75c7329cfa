mod function_client;
mod resend_client;

pub use function_client::NotificationFunctionClient;
pub use resend_client::{ResendClient, ResendEmail, ResendError};
