use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Runs of characters that are unsafe inside an object key segment
    /// - Kept: ASCII letters, digits, '.', '_' and '-'
    /// - Replaced: spaces, slashes, unicode, shell metacharacters
    pub static ref UNSAFE_FILE_NAME_CHARS: Regex = Regex::new(r"[^A-Za-z0-9._-]+").unwrap();
}

const MAX_FILE_NAME_LENGTH: usize = 120;

/// Reduce a client-supplied filename to a single safe object key segment.
///
/// Directory components are dropped, unsafe runs collapse to `_`, leading dots
/// are stripped so the name can never be hidden or relative.
pub fn sanitize_file_name(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let cleaned = UNSAFE_FILE_NAME_CHARS.replace_all(base, "_");
    let cleaned = cleaned.trim_start_matches('.');

    let mut name: String = cleaned.chars().take(MAX_FILE_NAME_LENGTH).collect();
    if name.is_empty() || name.chars().all(|c| c == '_') {
        name = "file".to_string();
    }
    name
}

/// Lowercased extension of a filename, if it has one
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_simple_names() {
        assert_eq!(sanitize_file_name("logo.png"), "logo.png");
        assert_eq!(sanitize_file_name("dnc_list-2024.csv"), "dnc_list-2024.csv");
    }

    #[test]
    fn test_sanitize_strips_directories_and_unsafe_chars() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\Firm Profile.pdf"), "Firm_Profile.pdf");
        assert_eq!(sanitize_file_name("  Acme LLP (final).pptx "), "Acme_LLP_final_.pptx");
        assert_eq!(sanitize_file_name(".hidden"), "hidden");
    }

    #[test]
    fn test_sanitize_falls_back_for_empty_names() {
        assert_eq!(sanitize_file_name(""), "file");
        assert_eq!(sanitize_file_name("///"), "file");
        assert_eq!(sanitize_file_name("ملف"), "file");
    }

    #[test]
    fn test_sanitize_truncates_long_names() {
        let long = format!("{}.csv", "a".repeat(300));
        assert_eq!(sanitize_file_name(&long).len(), MAX_FILE_NAME_LENGTH);
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("Profile.PDF").as_deref(), Some("pdf"));
        assert_eq!(file_extension("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension(".env"), None);
        assert_eq!(file_extension("trailing."), None);
    }
}
