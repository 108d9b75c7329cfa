use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The fixed, ordered steps of the onboarding wizard
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    FirmDetails,
    EmailIds,
    DoNotContact,
    Leadership,
    CompanyProfile,
    LinkedinAccess,
    WebsiteAccess,
    AdditionalNotes,
}

impl WizardStep {
    pub const ALL: [WizardStep; 8] = [
        WizardStep::FirmDetails,
        WizardStep::EmailIds,
        WizardStep::DoNotContact,
        WizardStep::Leadership,
        WizardStep::CompanyProfile,
        WizardStep::LinkedinAccess,
        WizardStep::WebsiteAccess,
        WizardStep::AdditionalNotes,
    ];

    pub const FIRST: WizardStep = WizardStep::FirmDetails;
    pub const LAST: WizardStep = WizardStep::AdditionalNotes;

    /// 1-based position, as shown to the user
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::FirmDetails => "Firm Details",
            WizardStep::EmailIds => "Email IDs",
            WizardStep::DoNotContact => "Do Not Contact",
            WizardStep::Leadership => "Leadership",
            WizardStep::CompanyProfile => "Company Profile",
            WizardStep::LinkedinAccess => "LinkedIn Access",
            WizardStep::WebsiteAccess => "Website Access",
            WizardStep::AdditionalNotes => "Additional Notes",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }
}

pub const TOTAL_STEPS: u8 = WizardStep::ALL.len() as u8;
