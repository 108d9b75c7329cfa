mod email_account;
mod submission;

pub use email_account::NewEmailAccount;
pub use submission::{NewSubmission, SubmissionRecord, UploadedFiles};
