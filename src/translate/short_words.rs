/// Static short-word translation table.
///
/// Covers the handful of 2-3 character fragments users actually type
/// while composing, so those never pay for a provider round trip. Keys
/// are lowercased source words projected onto a target language code.
pub fn lookup(word: &str, target_language: &str) -> Option<&'static str> {
    let entry: &[(&str, &str)] = match word {
        "me" => &[("en", "me"), ("de", "mich"), ("fr", "moi"), ("es", "mí")],
        "sen" => &[("en", "you"), ("de", "du"), ("fr", "tu"), ("es", "tú")],
        "ben" => &[("en", "I"), ("de", "ich"), ("fr", "je"), ("es", "yo")],
        "hi" => &[("tr", "merhaba"), ("de", "hallo"), ("fr", "salut"), ("es", "hola")],
        "hello" => &[("tr", "merhaba"), ("de", "hallo"), ("fr", "salut"), ("es", "hola")],
        "ok" => &[("tr", "tamam"), ("de", "ok"), ("fr", "d'accord"), ("es", "ok")],
        "evet" => &[("en", "yes"), ("de", "ja"), ("fr", "oui"), ("es", "sí")],
        "hayır" => &[("en", "no"), ("de", "nein"), ("fr", "non"), ("es", "no")],
        "teşekkür" => &[("en", "thanks"), ("de", "danke"), ("fr", "merci"), ("es", "gracias")],
        _ => return None,
    };

    entry
        .iter()
        .find(|(code, _)| *code == target_language)
        .map(|(_, translation)| *translation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_word_and_target() {
        assert_eq!(lookup("hi", "tr"), Some("merhaba"));
        assert_eq!(lookup("sen", "en"), Some("you"));
        assert_eq!(lookup("teşekkür", "fr"), Some("merci"));
    }

    #[test]
    fn test_known_word_missing_target() {
        // "evet" has no Italian entry
        assert_eq!(lookup("evet", "it"), None);
    }

    #[test]
    fn test_unknown_word() {
        assert_eq!(lookup("ab", "en"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive_by_contract() {
        // Callers lowercase before lookup; the table itself does not.
        assert_eq!(lookup("Hi", "tr"), None);
    }
}
