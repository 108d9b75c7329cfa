use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::wizard::models::OnboardingForm;

/// Public URLs of whatever files were uploaded; `''` when a slot was empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedFiles {
    pub logo_url: String,
    pub do_not_contact_file_url: String,
    pub company_profile_file_url: String,
}

/// One row for `onboarding_submissions`, minus the store-assigned columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub firm_name: String,
    pub website: String,
    pub country: String,
    pub logo_url: String,
    pub do_not_contact_option: Option<String>,
    pub do_not_contact_file_url: String,
    pub do_not_contact_link: String,
    pub managing_partner_name: String,
    pub managing_partner_phone: String,
    pub managing_partner_email: String,
    pub managing_partner_whatsapp: bool,
    pub spoc_name: String,
    pub spoc_phone: String,
    pub spoc_email: String,
    pub spoc_whatsapp: bool,
    pub company_profile_option: Option<String>,
    pub company_profile_file_url: String,
    pub company_profile_link: String,
    pub linkedin_option: Option<String>,
    pub linkedin_poc_name: String,
    pub linkedin_poc_email: String,
    pub website_option: Option<String>,
    pub website_admin_url: String,
    pub website_username: String,
    pub website_password: String,
    pub technical_contact_name: String,
    pub technical_contact_email: String,
    pub additional_notes: String,
}

impl NewSubmission {
    pub fn from_form(form: &OnboardingForm, files: UploadedFiles) -> Self {
        let partner = &form.leadership.managing_partner;
        let spoc = &form.leadership.spoc;
        let site = &form.website_access;

        Self {
            firm_name: form.firm.firm_name.clone(),
            website: form.firm.website.clone(),
            country: form.firm.country.clone(),
            logo_url: files.logo_url,
            do_not_contact_option: form.do_not_contact.option.map(|o| o.as_str().to_string()),
            do_not_contact_file_url: files.do_not_contact_file_url,
            do_not_contact_link: form.do_not_contact.link.clone(),
            managing_partner_name: partner.name.clone(),
            managing_partner_phone: partner.phone.clone(),
            managing_partner_email: partner.email.clone(),
            managing_partner_whatsapp: partner.whatsapp_group,
            spoc_name: spoc.name.clone(),
            spoc_phone: spoc.phone.clone(),
            spoc_email: spoc.email.clone(),
            spoc_whatsapp: spoc.whatsapp_group,
            company_profile_option: form.company_profile.option.map(|o| o.as_str().to_string()),
            company_profile_file_url: files.company_profile_file_url,
            company_profile_link: form.company_profile.link.clone(),
            linkedin_option: form.linkedin.option.map(|o| o.as_str().to_string()),
            linkedin_poc_name: form.linkedin.poc_name.clone(),
            linkedin_poc_email: form.linkedin.poc_email.clone(),
            website_option: site.option.map(|o| o.as_str().to_string()),
            website_admin_url: site.admin_url.clone(),
            website_username: site.username.clone(),
            website_password: site.password.clone(),
            technical_contact_name: site.technical_contact_name.clone(),
            technical_contact_email: site.technical_contact_email.clone(),
            additional_notes: form.additional_notes.clone(),
        }
    }
}

/// Row as read back from `onboarding_submissions`
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub firm_name: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
}
