use serde::Serialize;

/// Returned when the user's input was empty or unintelligible.
pub const CLARIFICATION_MESSAGE: &str = "I didn't catch that. Could you please repeat?";

/// Substituted when the agent completed but produced no usable output.
pub const FALLBACK_MESSAGE: &str = "I couldn't process that request.";

/// Returned when the agent itself faulted while producing an answer.
pub const APOLOGY_MESSAGE: &str = "I encountered an error processing your request.";

/// The structured answer for one voice or text request.
///
/// `response` is never empty and `search_triggered` is always definite; the
/// transcript alone may legitimately be empty (silence or unintelligible
/// audio).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceResult {
    pub transcript: String,
    pub response: String,
    pub search_triggered: bool,
}

impl VoiceResult {
    /// Builds a result, enforcing the non-empty-response invariant by
    /// substituting the fallback message for blank responses.
    pub fn new(transcript: String, response: String, search_triggered: bool) -> Self {
        let response = if response.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            response
        };
        Self {
            transcript,
            response,
            search_triggered,
        }
    }

    /// The fixed "please repeat" result for empty input.
    pub fn clarification(transcript: String) -> Self {
        Self {
            transcript,
            response: CLARIFICATION_MESSAGE.to_string(),
            search_triggered: false,
        }
    }
}
