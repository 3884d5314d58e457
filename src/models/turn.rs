/// A contiguous run of dialogue words attributed to one speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueTurn {
    /// The speaker-change marker exactly as it appeared in the script,
    /// or `None` when words were seen before any marker.
    pub speaker: Option<String>,
    /// Lowercased words uttered before the next speaker change.
    pub words: Vec<String>,
}

impl DialogueTurn {
    pub fn new(speaker: Option<String>, words: Vec<String>) -> Self {
        Self { speaker, words }
    }
}
