use async_trait::async_trait;
use axum::body::Bytes;

use crate::core::error::AppError;
use crate::shared::validation::sanitize_file_name;

/// Where submitted files end up.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `data` under `key` and return a URL the object can be fetched from
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> Result<String, AppError>;
}

/// Object key for an upload: `<category>/<unix-millis>-<filename>`
pub fn object_key(category: &str, timestamp_millis: i64, file_name: &str) -> String {
    format!(
        "{}/{}-{}",
        category,
        timestamp_millis,
        sanitize_file_name(file_name)
    )
}

/// Percent-encode each segment of a key for use in a URL path
pub fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_layout() {
        assert_eq!(
            object_key("logos", 1_700_000_000_000, "logo.png"),
            "logos/1700000000000-logo.png"
        );
        assert_eq!(
            object_key("company-profiles", 42, "Acme Profile.pdf"),
            "company-profiles/42-Acme_Profile.pdf"
        );
    }

    #[test]
    fn test_object_key_cannot_escape_category() {
        let key = object_key("do-not-contact", 1, "../../secrets.csv");
        assert_eq!(key, "do-not-contact/1-secrets.csv");
    }

    #[test]
    fn test_encode_key_keeps_separators() {
        assert_eq!(encode_key("logos/1-a b.png"), "logos/1-a%20b.png");
        assert_eq!(encode_key("logos/1-logo.png"), "logos/1-logo.png");
    }
}
