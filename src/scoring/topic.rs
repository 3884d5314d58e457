use super::segment::SegmentedDialogue;

/// Criterion 3: is there a conversation between two female characters
/// that never references a man?
///
/// Adjacent turn pairs only. Membership checks are case-insensitive
/// while the speaker-difference check compares the original marker
/// tokens case-sensitively; the asymmetry is part of the scoring
/// contract (see DESIGN.md) and is preserved as-is. The scan runs to
/// completion — a later qualifying pair can re-set the score to 1 but
/// nothing ever lowers it.
pub fn score_topic(dialogue: &SegmentedDialogue) -> u8 {
    let mut score = 0;
    for pair in dialogue.turns.windows(2) {
        let (Some(first), Some(second)) = (&pair[0].speaker, &pair[1].speaker) else {
            continue;
        };
        if first == second {
            continue;
        }
        if !dialogue.female_refs.contains(&first.to_lowercase())
            || !dialogue.female_refs.contains(&second.to_lowercase())
        {
            continue;
        }
        let mentions_a_man = pair[0]
            .words
            .iter()
            .any(|word| dialogue.male_refs.contains(word));
        if !mentions_a_man {
            score = 1;
        }
    }
    score
}
