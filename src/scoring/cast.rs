use crate::models::NameRegistry;

/// Cast discovered from a script's speaker cues, split by gender.
#[derive(Debug, Clone, Default)]
pub struct CastDiscovery {
    /// 1 when more than one named female character speaks.
    pub score: u8,
    /// Lowercased female cues, first-appearance order, deduplicated.
    pub female: Vec<String>,
    /// Lowercased male cues, first-appearance order, deduplicated.
    pub male: Vec<String>,
}

/// Criterion 1: are there at least two named female characters?
///
/// Two rules per cue and gender, applied additively: an exact
/// case-insensitive match against the registry, and a looser
/// honorific-prefix check that also admits minor variants ("Ms"
/// without the period). The two predicates are kept separate so the
/// looseness stays auditable and independently testable.
pub fn discover_cast(cues: &[String], registry: &NameRegistry) -> CastDiscovery {
    let mut female = Vec::new();
    let mut male = Vec::new();

    for cue in cues {
        let lower = cue.to_lowercase();
        if matches_registry(&lower, &registry.female) || has_female_honorific(&lower) {
            if !female.contains(&lower) {
                female.push(lower.clone());
            }
        }
        if matches_registry(&lower, &registry.male) || has_male_honorific(&lower) {
            if !male.contains(&lower) {
                male.push(lower);
            }
        }
    }

    let score = u8::from(female.len() > 1);
    CastDiscovery {
        score,
        female,
        male,
    }
}

fn matches_registry(cue_lower: &str, names: &[String]) -> bool {
    names.iter().any(|name| name.to_lowercase() == cue_lower)
}

fn has_female_honorific(cue_lower: &str) -> bool {
    cue_lower.starts_with("mrs.") || cue_lower.starts_with("ms") || cue_lower.starts_with("miss")
}

fn has_male_honorific(cue_lower: &str) -> bool {
    cue_lower.starts_with("mr.") || cue_lower.starts_with("sir.")
}
