use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::features::wizard::models::{
    CompanyProfileChoice, DoNotContactChoice, EmailEntry, LeadershipContact, LinkedinChoice,
    OnboardingForm, WebsiteChoice, WizardStep,
};
use crate::shared::constants::{EMAIL_ACCOUNT_SLOTS, MAX_FIELD_LENGTH, MAX_NOTES_LENGTH};

/// Fields of one step, replacing whatever that step held before.
///
/// Every field is optional and free-form; only lengths are bounded.
/// Staged files are not part of this payload and survive an update.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(tag = "step", content = "data", rename_all = "snake_case")]
pub enum StepDataDto {
    FirmDetails(FirmDetailsDto),
    EmailIds(EmailIdsDto),
    DoNotContact(DoNotContactDto),
    Leadership(LeadershipDto),
    CompanyProfile(CompanyProfileDto),
    LinkedinAccess(LinkedinAccessDto),
    WebsiteAccess(WebsiteAccessDto),
    AdditionalNotes(AdditionalNotesDto),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(default)]
pub struct FirmDetailsDto {
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub firm_name: String,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub website: String,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub country: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(default)]
pub struct EmailEntryDto {
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub name: String,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub email: String,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(default)]
pub struct EmailIdsDto {
    /// Up to three mailboxes; missing positions are left blank
    #[validate(length(max = 3, message = "At most 3 email accounts"), nested)]
    pub emails: Vec<EmailEntryDto>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(default)]
pub struct DoNotContactDto {
    pub option: Option<DoNotContactChoice>,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub link: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(default)]
pub struct LeadershipContactDto {
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub name: String,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub phone: String,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub email: String,
    pub whatsapp_group: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(default)]
pub struct LeadershipDto {
    #[validate(nested)]
    pub managing_partner: LeadershipContactDto,
    #[validate(nested)]
    pub spoc: LeadershipContactDto,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(default)]
pub struct CompanyProfileDto {
    pub option: Option<CompanyProfileChoice>,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub link: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(default)]
pub struct LinkedinAccessDto {
    pub option: Option<LinkedinChoice>,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub poc_name: String,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub poc_email: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(default)]
pub struct WebsiteAccessDto {
    pub option: Option<WebsiteChoice>,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub admin_url: String,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub username: String,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub password: String,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub technical_contact_name: String,
    #[validate(length(max = MAX_FIELD_LENGTH))]
    pub technical_contact_email: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(default)]
pub struct AdditionalNotesDto {
    #[validate(length(max = MAX_NOTES_LENGTH))]
    pub additional_notes: String,
}

impl StepDataDto {
    pub fn step(&self) -> WizardStep {
        match self {
            StepDataDto::FirmDetails(_) => WizardStep::FirmDetails,
            StepDataDto::EmailIds(_) => WizardStep::EmailIds,
            StepDataDto::DoNotContact(_) => WizardStep::DoNotContact,
            StepDataDto::Leadership(_) => WizardStep::Leadership,
            StepDataDto::CompanyProfile(_) => WizardStep::CompanyProfile,
            StepDataDto::LinkedinAccess(_) => WizardStep::LinkedinAccess,
            StepDataDto::WebsiteAccess(_) => WizardStep::WebsiteAccess,
            StepDataDto::AdditionalNotes(_) => WizardStep::AdditionalNotes,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            StepDataDto::FirmDetails(dto) => dto.validate(),
            StepDataDto::EmailIds(dto) => dto.validate(),
            StepDataDto::DoNotContact(dto) => dto.validate(),
            StepDataDto::Leadership(dto) => dto.validate(),
            StepDataDto::CompanyProfile(dto) => dto.validate(),
            StepDataDto::LinkedinAccess(dto) => dto.validate(),
            StepDataDto::WebsiteAccess(dto) => dto.validate(),
            StepDataDto::AdditionalNotes(dto) => dto.validate(),
        }
    }

    /// Overwrite the matching part of the form. Other steps are untouched.
    pub fn apply_to(self, form: &mut OnboardingForm) {
        match self {
            StepDataDto::FirmDetails(dto) => {
                form.firm.firm_name = dto.firm_name;
                form.firm.website = dto.website;
                form.firm.country = dto.country;
            }
            StepDataDto::EmailIds(dto) => {
                let mut supplied = dto.emails.into_iter();
                for slot in form.emails.iter_mut().take(EMAIL_ACCOUNT_SLOTS) {
                    *slot = supplied.next().map(EmailEntry::from).unwrap_or_default();
                }
            }
            StepDataDto::DoNotContact(dto) => {
                form.do_not_contact.option = dto.option;
                form.do_not_contact.link = dto.link;
            }
            StepDataDto::Leadership(dto) => {
                form.leadership.managing_partner = dto.managing_partner.into();
                form.leadership.spoc = dto.spoc.into();
            }
            StepDataDto::CompanyProfile(dto) => {
                form.company_profile.option = dto.option;
                form.company_profile.link = dto.link;
            }
            StepDataDto::LinkedinAccess(dto) => {
                form.linkedin.option = dto.option;
                form.linkedin.poc_name = dto.poc_name;
                form.linkedin.poc_email = dto.poc_email;
            }
            StepDataDto::WebsiteAccess(dto) => {
                let site = &mut form.website_access;
                site.option = dto.option;
                site.admin_url = dto.admin_url;
                site.username = dto.username;
                site.password = dto.password;
                site.technical_contact_name = dto.technical_contact_name;
                site.technical_contact_email = dto.technical_contact_email;
            }
            StepDataDto::AdditionalNotes(dto) => {
                form.additional_notes = dto.additional_notes;
            }
        }
    }
}

impl From<EmailEntryDto> for EmailEntry {
    fn from(dto: EmailEntryDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
        }
    }
}

impl From<LeadershipContactDto> for LeadershipContact {
    fn from(dto: LeadershipContactDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
            whatsapp_group: dto.whatsapp_group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::wizard::models::{FileSlot, StagedFile};
    use axum::body::Bytes;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> StepDataDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parses_tagged_payload_with_missing_fields() {
        let dto = parse(json!({"step": "firm_details", "data": {"firm_name": "Acme LLP"}}));
        assert_eq!(dto.step(), WizardStep::FirmDetails);

        let mut form = OnboardingForm::default();
        dto.apply_to(&mut form);
        assert_eq!(form.firm.firm_name, "Acme LLP");
        assert_eq!(form.firm.country, "");
    }

    #[test]
    fn test_unknown_step_is_rejected() {
        let result: Result<StepDataDto, _> =
            serde_json::from_value(json!({"step": "billing", "data": {}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_email_ids_fill_slots_in_order_and_blank_the_rest() {
        let mut form = OnboardingForm::default();
        form.emails[2].name = "stale".to_string();

        parse(json!({
            "step": "email_ids",
            "data": {"emails": [{"name": "One", "email": "one@acme.ae", "password": "pw"}]}
        }))
        .apply_to(&mut form);

        assert!(form.emails[0].is_complete());
        assert_eq!(form.emails[1], EmailEntry::default());
        assert_eq!(form.emails[2], EmailEntry::default());
    }

    #[test]
    fn test_more_than_three_emails_fails_validation() {
        let dto = parse(json!({
            "step": "email_ids",
            "data": {"emails": [{}, {}, {}, {}]}
        }));
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_overlong_field_fails_validation() {
        let dto = parse(json!({
            "step": "leadership",
            "data": {"spoc": {"name": "x".repeat(MAX_FIELD_LENGTH as usize + 1)}}
        }));
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_empty_and_malformed_values_pass_validation() {
        let dto = parse(json!({
            "step": "website_access",
            "data": {"option": "access", "admin_url": "not a url", "technical_contact_email": "nope"}
        }));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_keeps_staged_file() {
        let mut form = OnboardingForm::default();
        form.stage_file(
            FileSlot::DoNotContact,
            StagedFile::new("dnc.csv", "text/csv", Bytes::from_static(b"a")),
        );

        parse(json!({"step": "do_not_contact", "data": {"option": "link", "link": "https://x"}}))
            .apply_to(&mut form);

        assert_eq!(form.do_not_contact.option, Some(DoNotContactChoice::Link));
        assert!(form.staged_file(FileSlot::DoNotContact).is_some());
    }
}
