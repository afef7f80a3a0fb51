use crate::languages::display_name_or_code;

/// Versioned instruction template for the completion provider.
///
/// The rules live as data rather than inline string concatenation so the
/// instruction contract can be asserted in tests without a provider.
pub struct InstructionTemplate {
    pub version: &'static str,
    base_rules: &'static [&'static str],
    english_rules: &'static [&'static str],
}

pub const CURRENT_TEMPLATE: InstructionTemplate = InstructionTemplate {
    version: "v1",
    base_rules: &[
        "Preserve the meaning exactly",
        "Use natural, fluent phrasing in the target language",
        "Localize cultural expressions and idioms appropriately for the target language",
        "Translate technical terms correctly",
        "Reorder sentence structure to follow the target language's grammar",
        "Return only the translation, with no explanation or extra text",
        "Even for short or incomplete input, give your best-effort translation; never answer that the text is insufficient",
    ],
    english_rules: &[
        "Write distinct questions as separate sentences: \"Who are you?\" and \"How are you?\" -> \"Who are you? How are you?\"",
        "In negative sentences, instead of \"also\" put \"either\" at the end of the sentence: \"I also don't know you\" -> \"I don't know you, either.\"",
        "Start greetings with \"Hello,\" or \"Hi,\" and use \"I'm\" or \"my name is\"",
        "For the Turkish \"ama\" emphasis, add \"though\" at the end of the sentence in English: \"..., though.\"",
        "In everyday speech \"How are you doing?\" is more natural",
        "Translate short pronouns directly: \"me\" -> \"me\", \"sen\" -> \"you\"",
    ],
};

impl InstructionTemplate {
    /// Render the system instruction for a source/target language pair.
    /// The English-specific style rules are appended only when the target
    /// is English.
    pub fn render_system(&self, source_language: &str, target_language: &str) -> String {
        let source_name = display_name_or_code(source_language);
        let target_name = display_name_or_code(target_language);

        let mut instruction = format!(
            "You are a professional translator. Translate the given text from {} to {}.\n\
             Follow these rules when translating:\n",
            source_name, target_name
        );
        for (i, rule) in self.base_rules.iter().enumerate() {
            instruction.push_str(&format!("{}. {}\n", i + 1, rule));
        }

        if target_language == "en" {
            instruction.push_str("\nSPECIAL ENGLISH TRANSLATION RULES:\n");
            for rule in self.english_rules {
                instruction.push_str(&format!("- {}\n", rule));
            }
        }

        instruction
    }

    /// Render the user payload: the text, with source/target restated.
    pub fn render_user(&self, text: &str, source_language: &str, target_language: &str) -> String {
        format!(
            "Please translate the following text from {} to {}:\n\n{}",
            display_name_or_code(source_language),
            display_name_or_code(target_language),
            text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_instruction_uses_display_names() {
        let system = CURRENT_TEMPLATE.render_system("tr", "de");
        assert!(system.contains("Türkçe"));
        assert!(system.contains("Deutsch"));
    }

    #[test]
    fn test_english_rules_only_for_english_target() {
        let to_english = CURRENT_TEMPLATE.render_system("tr", "en");
        assert!(to_english.contains("SPECIAL ENGLISH TRANSLATION RULES"));
        assert!(to_english.contains("either"));
        assert!(to_english.contains("though"));
        assert!(to_english.contains("How are you doing?"));

        let to_german = CURRENT_TEMPLATE.render_system("tr", "de");
        assert!(!to_german.contains("SPECIAL ENGLISH TRANSLATION RULES"));
    }

    #[test]
    fn test_unknown_code_passes_through() {
        let system = CURRENT_TEMPLATE.render_system("xx", "en");
        assert!(system.contains("from xx to English"));
    }

    #[test]
    fn test_user_payload_contains_text() {
        let user = CURRENT_TEMPLATE.render_user("merhaba dünya", "tr", "en");
        assert!(user.ends_with("merhaba dünya"));
        assert!(user.contains("Türkçe"));
        assert!(user.contains("English"));
    }

    #[test]
    fn test_template_is_versioned() {
        assert_eq!(CURRENT_TEMPLATE.version, "v1");
    }
}
