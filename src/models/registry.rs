use std::path::Path;

use crate::error::BechdelError;

/// Honorific titles appended to each name list. A cue carrying one of
/// these is classified by the title's gender regardless of whether the
/// rest of the cue appears in a name list.
pub const FEMALE_HONORIFICS: [&str; 3] = ["Ms.", "Mrs.", "Miss"];
pub const MALE_HONORIFICS: [&str; 2] = ["Mr.", "Sir."];

/// Gendered given-name lists plus honorific titles.
///
/// Built once per run and shared read-only across every script. The
/// dialogue segmenter works on extended per-script copies; nothing
/// mutates the registry after load.
#[derive(Debug, Clone)]
pub struct NameRegistry {
    /// Female given names and honorifics, sorted.
    pub female: Vec<String>,
    /// Male given names and honorifics, sorted.
    pub male: Vec<String>,
}

impl NameRegistry {
    /// Load both name lists from newline-delimited files.
    pub fn load(female_path: &Path, male_path: &Path) -> Result<Self, BechdelError> {
        let female = read_name_list(female_path)?;
        let male = read_name_list(male_path)?;
        Ok(Self::from_lists(female, male))
    }

    /// Build a registry from in-memory name lists.
    ///
    /// Appends the honorific titles and sorts both lists. The sort has
    /// no semantic effect on scoring but keeps serialized output
    /// reproducible across runs.
    pub fn from_lists(mut female: Vec<String>, mut male: Vec<String>) -> Self {
        female.extend(FEMALE_HONORIFICS.iter().map(|t| t.to_string()));
        male.extend(MALE_HONORIFICS.iter().map(|t| t.to_string()));
        female.sort();
        male.sort();
        Self { female, male }
    }
}

/// One token per line, no trimming beyond the line split, no
/// deduplication.
fn read_name_list(path: &Path) -> Result<Vec<String>, BechdelError> {
    let content = std::fs::read_to_string(path).map_err(|source| BechdelError::Configuration {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(|line| line.to_string()).collect())
}
