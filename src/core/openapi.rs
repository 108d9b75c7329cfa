use utoipa::{Modify, OpenApi};

use crate::features::notifications::{dtos as notifications_dtos, handlers as notifications_handlers};
use crate::features::submissions::dtos as submissions_dtos;
use crate::features::wizard::{dtos as wizard_dtos, handlers as wizard_handlers, models as wizard_models};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Onboarding wizard
        wizard_handlers::create_session,
        wizard_handlers::get_session,
        wizard_handlers::delete_session,
        wizard_handlers::update_step,
        wizard_handlers::advance,
        wizard_handlers::retreat,
        wizard_handlers::stage_file,
        wizard_handlers::remove_file,
        wizard_handlers::submit,
        wizard_handlers::reset,
        // Notifications
        notifications_handlers::send_onboarding_notification,
    ),
    components(
        schemas(
            ApiResponse<wizard_dtos::WizardStateDto>,
            ApiResponse<wizard_dtos::SubmitResponseDto>,
            ApiResponse<wizard_dtos::DeleteSessionResponseDto>,
            Meta,
            // Wizard
            wizard_dtos::WizardStateDto,
            wizard_dtos::StepInfoDto,
            wizard_dtos::StageFileDto,
            wizard_dtos::SubmitResponseDto,
            wizard_dtos::DeleteSessionResponseDto,
            wizard_dtos::StepDataDto,
            wizard_dtos::FirmDetailsDto,
            wizard_dtos::EmailIdsDto,
            wizard_dtos::EmailEntryDto,
            wizard_dtos::DoNotContactDto,
            wizard_dtos::LeadershipDto,
            wizard_dtos::LeadershipContactDto,
            wizard_dtos::CompanyProfileDto,
            wizard_dtos::LinkedinAccessDto,
            wizard_dtos::WebsiteAccessDto,
            wizard_dtos::AdditionalNotesDto,
            wizard_models::WizardStep,
            wizard_models::SessionStatus,
            wizard_models::FileSlot,
            wizard_models::OnboardingForm,
            wizard_models::DoNotContactChoice,
            wizard_models::CompanyProfileChoice,
            wizard_models::LinkedinChoice,
            wizard_models::WebsiteChoice,
            // Submissions
            submissions_dtos::SubmissionResultDto,
            // Notifications
            notifications_dtos::NotificationRequestDto,
            notifications_dtos::NotificationResponse,
            notifications_dtos::OnboardingNotification,
            notifications_dtos::ContactSummary,
            notifications_dtos::EmailSummary,
        )
    ),
    tags(
        (name = "onboarding", description = "Client onboarding wizard"),
        (name = "notifications", description = "New client notification emails")
    ),
    info(
        title = "Client Onboarding API",
        version = "0.1.0",
        description = "Multi-step client onboarding intake"
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
