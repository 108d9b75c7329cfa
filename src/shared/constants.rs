/// Number of outreach mailboxes collected on the "Email IDs" step
pub const EMAIL_ACCOUNT_SLOTS: usize = 3;

/// Upper bound for single-line form fields
pub const MAX_FIELD_LENGTH: u64 = 512;

/// Upper bound for the free-text notes step
pub const MAX_NOTES_LENGTH: u64 = 10_000;

/// The only message a client sees when a submission attempt fails
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "There was an error submitting the form. Please try again.";

/// Shown once the submission has been stored
pub const SUBMISSION_SUCCEEDED_MESSAGE: &str =
    "Thank you for providing the necessary information. We will be in touch shortly and start the campaigns.";

// =============================================================================
// STORAGE TABLES
// =============================================================================

pub const SUBMISSIONS_TABLE: &str = "onboarding_submissions";

pub const EMAIL_ACCOUNTS_TABLE: &str = "email_accounts";
