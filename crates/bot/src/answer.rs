//! The single reply produced for every query.

use std::fmt;

/// Shown when a query looks like a live emergency.
pub const SAFETY_MESSAGE: &str = "I can only explain general disaster procedures.\n\n\
Please contact local emergency services immediately.";

/// Shown when no document mentions the query.
pub const NO_INFORMATION_MESSAGE: &str = "I do not have information on this topic.";

/// Shown when the text-generation call fails.
pub const FAILURE_MESSAGE: &str =
    "Sorry, I could not generate an explanation right now. Please try again later.";

/// Outcome of one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// The query was classified as an emergency
    SafetyRedirect,

    /// Retrieval found nothing
    NoInformation,

    /// Synthesized explanation, verbatim from the model
    Explanation(String),

    /// Synthesis failed
    Failure,
}

impl Answer {
    /// Text shown to the user.
    pub fn message(&self) -> &str {
        match self {
            Self::SafetyRedirect => SAFETY_MESSAGE,
            Self::NoInformation => NO_INFORMATION_MESSAGE,
            Self::Explanation(text) => text,
            Self::Failure => FAILURE_MESSAGE,
        }
    }

    /// Short machine-readable name of the outcome.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SafetyRedirect => "safety_redirect",
            Self::NoInformation => "no_information",
            Self::Explanation(_) => "explanation",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
