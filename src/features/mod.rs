pub mod notifications;
pub mod submissions;
pub mod wizard;
