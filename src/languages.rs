/// Supported language codes mapped to their native display names.
///
/// The mapping exists only to phrase the provider instruction; codes are
/// never validated against it. An unknown code falls through to `None`
/// and the caller decides how to phrase it.
pub fn display_name(code: &str) -> Option<&'static str> {
    match code {
        "tr" => Some("Türkçe"),
        "en" => Some("English"),
        "de" => Some("Deutsch"),
        "fr" => Some("Français"),
        "es" => Some("Español"),
        "it" => Some("Italiano"),
        "pt" => Some("Português"),
        "ru" => Some("Русский"),
        "zh" => Some("中文"),
        "ja" => Some("日本語"),
        "ar" => Some("العربية"),
        "ko" => Some("한국어"),
        _ => None,
    }
}

/// Display name with the raw code as fallback for unsupported codes.
pub fn display_name_or_code(code: &str) -> &str {
    display_name(code).unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(display_name("tr"), Some("Türkçe"));
        assert_eq!(display_name("en"), Some("English"));
        assert_eq!(display_name("ko"), Some("한국어"));
    }

    #[test]
    fn test_unknown_code_falls_back_to_code() {
        assert_eq!(display_name("xx"), None);
        assert_eq!(display_name_or_code("xx"), "xx");
    }

    #[test]
    fn test_all_twelve_codes_present() {
        let codes = [
            "tr", "en", "de", "fr", "es", "it", "pt", "ru", "zh", "ja", "ar", "ko",
        ];
        for code in codes {
            assert!(display_name(code).is_some(), "missing name for {}", code);
        }
    }
}
