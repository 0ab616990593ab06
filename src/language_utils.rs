use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module validates the ISO 639-1 (2-letter) and ISO 639-2 (3-letter)
/// codes accepted on the command line, and backs the `--list-langs` table.
/// Languages commonly accepted by the translation endpoint, shown by
/// `--list-langs`. The endpoint takes ISO 639-1 codes.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ar", "Arabic"),
    ("bn", "Bengali"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ms", "Malay"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sv", "Swedish"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
];

/// Validate that a language code is a recognized ISO 639-1 or ISO 639-2 code
pub fn validate_language_code(code: &str) -> Result<()> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(());
        }
    } else if normalized_code.len() == 3 && Language::from_639_3(&normalized_code).is_some() {
        return Ok(());
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    let lang = if normalized_code.len() == 2 {
        Language::from_639_1(&normalized_code)
    } else {
        Language::from_639_3(&normalized_code)
    };

    lang.map(|l| l.to_name().to_string())
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_code_should_accept_part1_codes() {
        assert!(validate_language_code("id").is_ok());
        assert!(validate_language_code("ja").is_ok());
        assert!(validate_language_code("EN").is_ok());
    }

    #[test]
    fn test_validate_language_code_should_accept_part2_codes() {
        assert!(validate_language_code("jpn").is_ok());
        assert!(validate_language_code("ind").is_ok());
    }

    #[test]
    fn test_validate_language_code_should_reject_garbage() {
        assert!(validate_language_code("xx").is_err());
        assert!(validate_language_code("").is_err());
        assert!(validate_language_code("english").is_err());
    }

    #[test]
    fn test_get_language_name_should_resolve_common_codes() {
        assert_eq!(get_language_name("ja").unwrap(), "Japanese");
        assert_eq!(get_language_name("id").unwrap(), "Indonesian");
    }

    #[test]
    fn test_supported_languages_should_all_validate() {
        for (code, _) in SUPPORTED_LANGUAGES {
            assert!(
                validate_language_code(code).is_ok(),
                "table entry {} does not validate",
                code
            );
        }
    }
}
