//! Emergency classifier.
//!
//! Flags text that reads like a live distress call. Matching is plain
//! case-insensitive substring search, so it over-triggers ("call" matches
//! "recall"): blocking a benign question is acceptable, answering a real
//! emergency is not.

/// Distress keywords, matched as lowercase substrings.
pub const EMERGENCY_KEYWORDS: [&str; 10] = [
    "help",
    "urgent",
    "rescue",
    "trapped",
    "emergency",
    "call",
    "save me",
    "danger",
    "stuck",
    "need help",
];

/// Whether `text` contains any distress keyword.
pub fn is_emergency(text: &str) -> bool {
    matched_keyword(text).is_some()
}

/// First distress keyword found in `text`, in keyword order.
pub fn matched_keyword(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    EMERGENCY_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lowered.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_triggers() {
        for keyword in EMERGENCY_KEYWORDS {
            assert!(is_emergency(keyword), "{keyword} should trigger");
            assert!(is_emergency(&format!("please {} now", keyword.to_uppercase())));
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_emergency("HELP ME"));
        assert!(is_emergency("help me"));
        assert!(is_emergency("I am Trapped under debris"));
    }

    #[test]
    fn test_informational_questions_pass() {
        assert!(!is_emergency("Explain evacuation procedures"));
        assert!(!is_emergency("How do relief camps operate?"));
        assert!(!is_emergency(""));
    }

    #[test]
    fn test_substring_over_match() {
        assert_eq!(matched_keyword("How do I recall the flood plan?"), Some("call"));
        assert_eq!(matched_keyword("What are dangerous zones?"), Some("danger"));
    }

    #[test]
    fn test_matched_keyword_order() {
        // "help" precedes "need help" in the keyword list
        assert_eq!(matched_keyword("I need help"), Some("help"));
        assert_eq!(matched_keyword("flood maps"), None);
    }
}
