use axum::body::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::EMAIL_ACCOUNT_SLOTS;

/// A file the user attached, held in memory until the form is submitted
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StagedFile {
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
    #[serde(skip)]
    pub data: Bytes,
}

impl StagedFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            size: data.len(),
            data,
        }
    }
}

/// The three places a file can be attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FileSlot {
    Logo,
    DoNotContact,
    CompanyProfile,
}

impl FileSlot {
    pub const ALL: [FileSlot; 3] = [
        FileSlot::Logo,
        FileSlot::DoNotContact,
        FileSlot::CompanyProfile,
    ];

    /// Object-store folder the slot's uploads land in
    pub fn storage_category(self) -> &'static str {
        match self {
            FileSlot::Logo => "logos",
            FileSlot::DoNotContact => "do-not-contact",
            FileSlot::CompanyProfile => "company-profiles",
        }
    }

    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            FileSlot::Logo => &["png", "jpg", "jpeg", "gif", "webp", "svg"],
            FileSlot::DoNotContact => &["csv", "xlsx", "xls", "txt"],
            FileSlot::CompanyProfile => &["ppt", "pptx", "pdf", "doc", "docx"],
        }
    }
}

// =============================================================================
// STEP 1: FIRM DETAILS
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct FirmDetails {
    pub firm_name: String,
    pub website: String,
    pub country: String,
    pub logo: Option<StagedFile>,
}

// =============================================================================
// STEP 2: EMAIL IDS
// =============================================================================

/// One outreach mailbox the client hands over
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmailEntry {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl EmailEntry {
    /// Only complete entries become email account rows
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.password.is_empty()
    }

    /// Entries with a name and address are listed in the notification
    pub fn is_named(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

// =============================================================================
// STEP 3: DO NOT CONTACT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DoNotContactChoice {
    /// Upload a spreadsheet of excluded companies
    Upload,
    /// Share a link to the list
    Link,
    /// Review the prospect list manually before outreach
    Review,
}

impl DoNotContactChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            DoNotContactChoice::Upload => "upload",
            DoNotContactChoice::Link => "link",
            DoNotContactChoice::Review => "review",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct DoNotContact {
    pub option: Option<DoNotContactChoice>,
    pub file: Option<StagedFile>,
    pub link: String,
}

// =============================================================================
// STEP 4: LEADERSHIP
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeadershipContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Add this person to the campaign WhatsApp group
    pub whatsapp_group: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Leadership {
    pub managing_partner: LeadershipContact,
    /// Single point of contact
    pub spoc: LeadershipContact,
}

// =============================================================================
// STEP 5: COMPANY PROFILE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CompanyProfileChoice {
    Upload,
    Link,
}

impl CompanyProfileChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            CompanyProfileChoice::Upload => "upload",
            CompanyProfileChoice::Link => "link",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct CompanyProfile {
    pub option: Option<CompanyProfileChoice>,
    pub file: Option<StagedFile>,
    pub link: String,
}

// =============================================================================
// STEP 6: LINKEDIN ACCESS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LinkedinChoice {
    /// The firm grants page access directly
    Access,
    /// A named point of contact arranges access
    Poc,
}

impl LinkedinChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkedinChoice::Access => "access",
            LinkedinChoice::Poc => "poc",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LinkedinAccess {
    pub option: Option<LinkedinChoice>,
    pub poc_name: String,
    pub poc_email: String,
}

// =============================================================================
// STEP 7: WEBSITE ACCESS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WebsiteChoice {
    /// Admin credentials are shared
    Access,
    /// An internal technical contact makes the changes
    Internal,
}

impl WebsiteChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            WebsiteChoice::Access => "access",
            WebsiteChoice::Internal => "internal",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WebsiteAccess {
    pub option: Option<WebsiteChoice>,
    pub admin_url: String,
    pub username: String,
    pub password: String,
    pub technical_contact_name: String,
    pub technical_contact_email: String,
}

// =============================================================================
// THE WHOLE FORM
// =============================================================================

/// Everything the wizard collects, grouped by step
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct OnboardingForm {
    pub firm: FirmDetails,
    #[schema(value_type = Vec<EmailEntry>)]
    pub emails: [EmailEntry; EMAIL_ACCOUNT_SLOTS],
    pub do_not_contact: DoNotContact,
    pub leadership: Leadership,
    pub company_profile: CompanyProfile,
    pub linkedin: LinkedinAccess,
    pub website_access: WebsiteAccess,
    pub additional_notes: String,
}

impl OnboardingForm {
    pub fn staged_file(&self, slot: FileSlot) -> Option<&StagedFile> {
        self.file_slot(slot).as_ref()
    }

    /// Attach a file to a slot, returning whatever it replaced
    pub fn stage_file(&mut self, slot: FileSlot, file: StagedFile) -> Option<StagedFile> {
        self.file_slot_mut(slot).replace(file)
    }

    pub fn clear_file(&mut self, slot: FileSlot) -> Option<StagedFile> {
        self.file_slot_mut(slot).take()
    }

    /// Entries that will be persisted as email account rows
    pub fn complete_email_entries(&self) -> impl Iterator<Item = &EmailEntry> {
        self.emails.iter().filter(|entry| entry.is_complete())
    }

    fn file_slot(&self, slot: FileSlot) -> &Option<StagedFile> {
        match slot {
            FileSlot::Logo => &self.firm.logo,
            FileSlot::DoNotContact => &self.do_not_contact.file,
            FileSlot::CompanyProfile => &self.company_profile.file,
        }
    }

    fn file_slot_mut(&mut self, slot: FileSlot) -> &mut Option<StagedFile> {
        match slot {
            FileSlot::Logo => &mut self.firm.logo,
            FileSlot::DoNotContact => &mut self.do_not_contact.file,
            FileSlot::CompanyProfile => &mut self.company_profile.file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, email: &str, password: &str) -> EmailEntry {
        EmailEntry {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_email_entry_completeness() {
        assert!(entry("Outreach", "out@acme.ae", "pw").is_complete());
        assert!(!entry("", "out@acme.ae", "pw").is_complete());
        assert!(!entry("Outreach", "", "pw").is_complete());
        assert!(!entry("Outreach", "out@acme.ae", "").is_complete());
    }

    #[test]
    fn test_named_entries_do_not_need_a_password() {
        assert!(entry("Outreach", "out@acme.ae", "").is_named());
        assert!(!entry("Outreach", "", "pw").is_named());
    }

    #[test]
    fn test_complete_email_entries_filters_partial_rows() {
        let mut form = OnboardingForm::default();
        form.emails[0] = entry("One", "one@acme.ae", "pw1");
        form.emails[1] = entry("Two", "", "pw2");
        form.emails[2] = entry("Three", "three@acme.ae", "pw3");

        let names: Vec<&str> = form
            .complete_email_entries()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["One", "Three"]);
    }

    #[test]
    fn test_stage_and_clear_files_per_slot() {
        let mut form = OnboardingForm::default();
        let logo = StagedFile::new("logo.png", "image/png", Bytes::from_static(b"png"));

        assert!(form.stage_file(FileSlot::Logo, logo).is_none());
        assert_eq!(form.staged_file(FileSlot::Logo).unwrap().size, 3);
        assert!(form.staged_file(FileSlot::DoNotContact).is_none());

        let replacement = StagedFile::new("logo2.png", "image/png", Bytes::from_static(b"png2"));
        let previous = form.stage_file(FileSlot::Logo, replacement).unwrap();
        assert_eq!(previous.file_name, "logo.png");

        let cleared = form.clear_file(FileSlot::Logo).unwrap();
        assert_eq!(cleared.file_name, "logo2.png");
        assert!(form.firm.logo.is_none());
    }

    #[test]
    fn test_staged_file_bytes_are_not_serialized() {
        let file = StagedFile::new("list.csv", "text/csv", Bytes::from_static(b"a,b\n"));
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["file_name"], "list.csv");
        assert_eq!(json["size"], 4);
        assert!(json.get("data").is_none());
    }
}
