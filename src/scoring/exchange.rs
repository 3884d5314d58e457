/// Criterion 2: do two discovered female characters speak
/// back-to-back?
///
/// Scans adjacent pairs of the full cue sequence, repeats included,
/// against the cast criterion 1 actually discovered rather than the
/// whole registry; a registry name that never speaks cannot satisfy
/// it. The first qualifying pair wins and scanning stops.
pub fn score_exchange(cues: &[String], female_cast: &[String]) -> u8 {
    for pair in cues.windows(2) {
        let first = pair[0].to_lowercase();
        let second = pair[1].to_lowercase();
        if first != second && female_cast.contains(&first) && female_cast.contains(&second) {
            return 1;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cues(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|c| c.to_string()).collect()
    }

    fn cast(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_adjacent_distinct_female_cues_score_one() {
        assert_eq!(
            score_exchange(&cues(&["ALICE", "BETH"]), &cast(&["alice", "beth"])),
            1
        );
    }

    #[test]
    fn test_interposed_male_cue_scores_zero() {
        assert_eq!(
            score_exchange(&cues(&["ALICE", "BOB", "BETH"]), &cast(&["alice", "beth"])),
            0
        );
    }

    #[test]
    fn test_same_name_adjacency_does_not_count() {
        assert_eq!(
            score_exchange(&cues(&["ALICE", "ALICE"]), &cast(&["alice", "beth"])),
            0
        );
    }

    #[test]
    fn test_only_discovered_cast_members_qualify() {
        // "carol" speaks but was never discovered as cast.
        assert_eq!(
            score_exchange(&cues(&["CAROL", "ALICE"]), &cast(&["alice"])),
            0
        );
    }

    #[test]
    fn test_fewer_than_two_cues_scores_zero() {
        assert_eq!(score_exchange(&cues(&["ALICE"]), &cast(&["alice"])), 0);
        assert_eq!(score_exchange(&[], &cast(&["alice"])), 0);
    }
}
