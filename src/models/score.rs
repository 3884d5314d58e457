use serde::Serialize;

/// Outcome of scoring one script: the three binary criteria plus the
/// discovered cast the criteria were derived from. The cast lists are
/// retained for auditability and are not persisted to the score file.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    /// Criterion 1: at least two named female characters speak.
    pub two_women: u8,
    /// Criterion 2: two female characters speak back-to-back.
    pub women_converse: u8,
    /// Criterion 3: a female-female turn free of male references.
    pub not_about_a_man: u8,
    /// Lowercased female speaker cues, first-appearance order.
    pub female_cast: Vec<String>,
    /// Lowercased male speaker cues, first-appearance order.
    pub male_cast: Vec<String>,
}

impl ScoreResult {
    /// Total score, 0-3.
    pub fn total(&self) -> u8 {
        self.two_women + self.women_converse + self.not_about_a_man
    }
}
