use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
    pub minio: MinIOConfig,
    pub notification: NotificationConfig,
    pub wizard: WizardConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// MinIO/S3 storage configuration for onboarding attachments
#[derive(Debug, Clone)]
pub struct MinIOConfig {
    /// MinIO/S3 endpoint URL
    pub endpoint: String,
    /// Endpoint used when building URLs handed back to clients
    pub public_endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    /// Bucket holding every onboarding upload
    pub bucket: String,
    /// AWS region (for S3 compatibility)
    pub region: String,
    /// Apply an anonymous read policy to the bucket at startup
    pub public_read: bool,
}

/// Where and how the onboarding notification is delivered
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// Resend API key; delivery is skipped when absent
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    pub from: String,
    pub to: Vec<String>,
    /// Remote notification function. When set, submissions invoke it over
    /// HTTP instead of sending the email in-process.
    pub function_url: Option<String>,
    pub function_key: Option<String>,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct WizardConfig {
    pub session_idle_timeout: Duration,
    pub max_upload_file_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // A missing .env is fine; production sets real variables.
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            minio: MinIOConfig::from_env()?,
            notification: NotificationConfig::from_env()?,
            wizard: WizardConfig::from_env()?,
        })
    }
}

/// Read a variable and parse it, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, String> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{} must be a valid value", name)),
        Err(_) => Ok(default),
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 32 * 1024 * 1024; // 32MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_var("PORT", 3000u16)?;
        let cors_allowed_origins =
            split_list(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()));
        let max_request_body_size =
            parse_var("MAX_REQUEST_BODY_SIZE", Self::DEFAULT_MAX_REQUEST_BODY_SIZE)?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        Ok(Self {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?,
            min_connections: parse_var("DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?,
            acquire_timeout_secs: parse_var(
                "DB_ACQUIRE_TIMEOUT_SECS",
                Self::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
            idle_timeout_secs: parse_var("DB_IDLE_TIMEOUT_SECS", Self::DEFAULT_IDLE_TIMEOUT_SECS)?,
            max_lifetime_secs: parse_var("DB_MAX_LIFETIME_SECS", Self::DEFAULT_MAX_LIFETIME_SECS)?,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            username: optional_var("SWAGGER_USERNAME"),
            password: optional_var("SWAGGER_PASSWORD"),
            title: env::var("SWAGGER_TITLE")
                .unwrap_or_else(|_| "Client Onboarding API".to_string()),
            version: env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string()),
            description: env::var("SWAGGER_DESCRIPTION")
                .unwrap_or_else(|_| "Multi-step client onboarding intake".to_string()),
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl MinIOConfig {
    pub fn from_env() -> Result<Self, String> {
        let endpoint =
            env::var("MINIO_ENDPOINT").unwrap_or_else(|_| "http://localhost:9000".to_string());
        let public_endpoint =
            env::var("MINIO_PUBLIC_ENDPOINT").unwrap_or_else(|_| endpoint.clone());

        Ok(Self {
            public_endpoint: public_endpoint.trim_end_matches('/').to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            access_key: env::var("MINIO_ACCESS_KEY").unwrap_or_else(|_| "minioadmin".to_string()),
            secret_key: env::var("MINIO_SECRET_KEY").unwrap_or_else(|_| "minioadmin".to_string()),
            bucket: env::var("MINIO_BUCKET").unwrap_or_else(|_| "onboarding-files".to_string()),
            region: env::var("MINIO_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            public_read: parse_var("MINIO_PUBLIC_READ", true)?,
        })
    }
}

impl NotificationConfig {
    const DEFAULT_RESEND_API_URL: &'static str = "https://api.resend.com/emails";
    const DEFAULT_FROM: &'static str = "RSM MENA System <noreply@nexuses.agency>";
    const DEFAULT_TO: &'static str = "neeraj@nexuses.in";
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

    pub fn from_env() -> Result<Self, String> {
        let to = split_list(&env::var("NOTIFICATION_TO").unwrap_or_else(|_| Self::DEFAULT_TO.into()));
        if to.is_empty() {
            return Err("NOTIFICATION_TO must list at least one recipient".to_string());
        }

        Ok(Self {
            resend_api_key: optional_var("RESEND_API_KEY"),
            resend_api_url: env::var("RESEND_API_URL")
                .unwrap_or_else(|_| Self::DEFAULT_RESEND_API_URL.to_string()),
            from: env::var("NOTIFICATION_FROM").unwrap_or_else(|_| Self::DEFAULT_FROM.to_string()),
            to,
            function_url: optional_var("NOTIFICATION_FUNCTION_URL"),
            function_key: optional_var("NOTIFICATION_FUNCTION_KEY"),
            request_timeout: Duration::from_secs(parse_var(
                "NOTIFICATION_TIMEOUT_SECS",
                Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
        })
    }
}

impl WizardConfig {
    const DEFAULT_SESSION_IDLE_TIMEOUT_SECS: u64 = 6 * 60 * 60; // 6 hours
    pub const DEFAULT_MAX_UPLOAD_FILE_SIZE: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            session_idle_timeout: Duration::from_secs(parse_var(
                "WIZARD_SESSION_IDLE_TIMEOUT_SECS",
                Self::DEFAULT_SESSION_IDLE_TIMEOUT_SECS,
            )?),
            max_upload_file_size: parse_var(
                "MAX_UPLOAD_FILE_SIZE",
                Self::DEFAULT_MAX_UPLOAD_FILE_SIZE,
            )?,
        })
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            session_idle_timeout: Duration::from_secs(Self::DEFAULT_SESSION_IDLE_TIMEOUT_SECS),
            max_upload_file_size: Self::DEFAULT_MAX_UPLOAD_FILE_SIZE,
        }
    }
}
