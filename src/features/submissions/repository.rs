use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::Result;
use crate::features::submissions::models::{NewEmailAccount, NewSubmission, SubmissionRecord};
use crate::shared::constants::{EMAIL_ACCOUNTS_TABLE, SUBMISSIONS_TABLE};

/// Persistence for submissions and their email accounts.
///
/// Both tables are append-only from this service's point of view.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert_submission(&self, submission: &NewSubmission) -> Result<SubmissionRecord>;

    /// Insert all accounts in one statement; an empty slice is a no-op
    async fn insert_email_accounts(&self, accounts: &[NewEmailAccount]) -> Result<u64>;
}

pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert_submission(&self, s: &NewSubmission) -> Result<SubmissionRecord> {
        let sql = format!(
            r#"
            INSERT INTO {SUBMISSIONS_TABLE} (
                firm_name, website, country, logo_url,
                do_not_contact_option, do_not_contact_file_url, do_not_contact_link,
                managing_partner_name, managing_partner_phone, managing_partner_email,
                managing_partner_whatsapp,
                spoc_name, spoc_phone, spoc_email, spoc_whatsapp,
                company_profile_option, company_profile_file_url, company_profile_link,
                linkedin_option, linkedin_poc_name, linkedin_poc_email,
                website_option, website_admin_url, website_username, website_password,
                technical_contact_name, technical_contact_email, additional_notes
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28
            )
            RETURNING id, firm_name, country, created_at
            "#
        );

        let record = sqlx::query_as::<_, SubmissionRecord>(&sql)
            .bind(&s.firm_name)
            .bind(&s.website)
            .bind(&s.country)
            .bind(&s.logo_url)
            .bind(&s.do_not_contact_option)
            .bind(&s.do_not_contact_file_url)
            .bind(&s.do_not_contact_link)
            .bind(&s.managing_partner_name)
            .bind(&s.managing_partner_phone)
            .bind(&s.managing_partner_email)
            .bind(s.managing_partner_whatsapp)
            .bind(&s.spoc_name)
            .bind(&s.spoc_phone)
            .bind(&s.spoc_email)
            .bind(s.spoc_whatsapp)
            .bind(&s.company_profile_option)
            .bind(&s.company_profile_file_url)
            .bind(&s.company_profile_link)
            .bind(&s.linkedin_option)
            .bind(&s.linkedin_poc_name)
            .bind(&s.linkedin_poc_email)
            .bind(&s.website_option)
            .bind(&s.website_admin_url)
            .bind(&s.website_username)
            .bind(&s.website_password)
            .bind(&s.technical_contact_name)
            .bind(&s.technical_contact_email)
            .bind(&s.additional_notes)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert onboarding submission: {:?}", e);
                e
            })?;

        Ok(record)
    }

    async fn insert_email_accounts(&self, accounts: &[NewEmailAccount]) -> Result<u64> {
        if accounts.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "INSERT INTO {EMAIL_ACCOUNTS_TABLE} (submission_id, name, email, password) "
        ));
        builder.push_values(accounts, |mut row, account| {
            row.push_bind(account.submission_id)
                .push_bind(&account.name)
                .push_bind(&account.email)
                .push_bind(&account.password);
        });

        let result = builder.build().execute(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to insert email accounts: {:?}", e);
            e
        })?;

        Ok(result.rows_affected())
    }
}
