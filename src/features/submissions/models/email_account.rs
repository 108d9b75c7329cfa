use uuid::Uuid;

use crate::features::wizard::models::EmailEntry;

/// One row for `email_accounts`, bound to an already stored submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmailAccount {
    pub submission_id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewEmailAccount {
    pub fn from_entry(submission_id: Uuid, entry: &EmailEntry) -> Self {
        Self {
            submission_id,
            name: entry.name.clone(),
            email: entry.email.clone(),
            password: entry.password.clone(),
        }
    }
}
