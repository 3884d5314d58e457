use crate::models::DialogueTurn;

/// Generic references that count as mentioning a gender without naming
/// a character.
const FEMALE_MARKERS: [&str; 1] = ["girl"];
const MALE_MARKERS: [&str; 3] = ["his", "him", "he"];

/// Dialogue turns plus the reference sets used to produce them.
///
/// The female and male sets are per-script copies of the discovered
/// cast extended with the generic markers. Criterion 3 must check
/// against exactly these sets, and the extension must never leak back
/// into the shared registry or the criterion 1/2 cast lists.
#[derive(Debug, Clone, Default)]
pub struct SegmentedDialogue {
    pub turns: Vec<DialogueTurn>,
    pub female_refs: Vec<String>,
    pub male_refs: Vec<String>,
}

/// Segment a script's plain text into (speaker, words) turns.
///
/// Speaker changes are detected by the ALL-CAPS convention: a fully
/// uppercase word whose lowercase form names a discovered character or
/// a generic marker switches the current speaker. The heuristic is
/// lossy on purpose — a name shouted inside dialogue reads as a cue —
/// and the scoring semantics are defined by the heuristic, not by
/// ground truth.
pub fn segment(
    plain_text: &str,
    female_cast: &[String],
    male_cast: &[String],
) -> SegmentedDialogue {
    let mut female_refs = female_cast.to_vec();
    female_refs.extend(FEMALE_MARKERS.iter().map(|m| m.to_string()));
    let mut male_refs = male_cast.to_vec();
    male_refs.extend(MALE_MARKERS.iter().map(|m| m.to_string()));

    // Scripts pack several cues on one physical line separated by wide
    // gaps; split those apart before word-splitting.
    let fragments = plain_text
        .lines()
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty());

    let mut turns = Vec::new();
    // Last marker seen, and the speaker whose words are accumulating.
    let mut pending_speaker: Option<String> = None;
    let mut accumulating_speaker: Option<String> = None;
    let mut words: Vec<String> = Vec::new();

    for fragment in fragments {
        for word in fragment.split_whitespace() {
            let lower = word.to_lowercase();
            if is_all_caps(word) && (female_refs.contains(&lower) || male_refs.contains(&lower)) {
                pending_speaker = Some(word.to_string());
                if pending_speaker != accumulating_speaker {
                    turns.push(DialogueTurn::new(
                        accumulating_speaker.clone(),
                        std::mem::take(&mut words),
                    ));
                }
            } else if !is_all_caps(word) {
                accumulating_speaker = pending_speaker.clone();
                words.push(lower);
            }
            // A fully uppercase word naming no known character
            // (shouting, stage directions) is dropped outright.
        }
    }
    // The trailing in-progress turn is deliberately not flushed.

    SegmentedDialogue {
        turns,
        female_refs,
        male_refs,
    }
}

/// At least one uppercase letter and no lowercase letter, so "ALICE:"
/// and "O.S." qualify while "123" and "-" do not.
fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}
