use serde::{Deserialize, Serialize};

/// Heuristic 1..10 quality score with ordered feedback notes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityAssessment {
    pub score: u8,
    pub feedback: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub translation: String,
}

/// Scores a translation against an original. Implementations must be
/// pure and deterministic; whether a given language pair is worth
/// scoring is the caller's decision.
pub trait QualityScorer: Send + Sync {
    fn assess(&self, original: &str, translation: &str) -> QualityAssessment;
}

/// Substring-matching scorer tuned for Turkish→English output.
///
/// Five fixed rules, evaluated in order, each a −2 penalty or a
/// commendation. Intentionally narrow: it validates one illustrative
/// sentence pattern for UI feedback, not translation quality in general.
pub struct HeuristicScorer;

impl QualityScorer for HeuristicScorer {
    fn assess(&self, _original: &str, translation: &str) -> QualityAssessment {
        let mut score: i32 = 10;
        let mut feedback = Vec::new();

        // Rule 1: distinct questions belong in separate sentences
        if translation.contains("who are you and how are you") {
            score -= 2;
            feedback.push("questions should be in separate sentences".to_string());
        } else if translation.contains("Who are you?") && translation.contains("How are you?") {
            feedback.push("questions correctly separated".to_string());
        }

        // Rule 2: negatives should end in ", either" rather than use "also"
        if translation.contains("I also don't know") || translation.contains("I also don't") {
            score -= 2;
            feedback.push("negative sentence should use 'either'".to_string());
        } else if translation.contains("don't know you, either") {
            feedback.push("negative sentence correct".to_string());
        }

        // Rule 3: trailing "though" for the Turkish "ama" emphasis
        if translation.contains("though") {
            feedback.push("contrastive emphasis correctly used".to_string());
        }

        // Rule 4: natural greeting opener
        if translation.starts_with("Hello,") || translation.starts_with("Hi,") {
            feedback.push("natural greeting".to_string());
        }

        // Rule 5: colloquial "How are you doing?"
        if translation.contains("How are you doing?") {
            feedback.push("colloquial register".to_string());
        }

        QualityAssessment {
            score: score.max(1) as u8,
            feedback,
        }
    }
}
