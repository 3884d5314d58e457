//! The scoring engine: cue extraction, gendered cast discovery,
//! dialogue segmentation, and the three Bechdel criteria.

pub mod cast;
pub mod cues;
pub mod exchange;
pub mod segment;
pub mod topic;

pub use cast::{CastDiscovery, discover_cast};
pub use cues::extract_cues;
pub use exchange::score_exchange;
pub use segment::{SegmentedDialogue, segment};
pub use topic::score_topic;

use crate::markup::ScriptDocument;
use crate::models::{NameRegistry, ScoreResult};

/// Run the full three-criterion pipeline over one script.
///
/// Total over any well-formed document: an empty script yields
/// (0, 0, 0) with empty casts, never an error.
pub fn score_script(doc: &ScriptDocument, registry: &NameRegistry) -> ScoreResult {
    let cues = extract_cues(doc);
    let cast = discover_cast(&cues, registry);
    let women_converse = score_exchange(&cues, &cast.female);
    let dialogue = segment(doc.plain_text(), &cast.female, &cast.male);
    let not_about_a_man = score_topic(&dialogue);

    ScoreResult {
        two_women: cast.score,
        women_converse,
        not_about_a_man,
        female_cast: cast.female,
        male_cast: cast.male,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> NameRegistry {
        NameRegistry::from_lists(
            vec!["Alice".to_string(), "Beth".to_string()],
            vec!["Bob".to_string()],
        )
    }

    #[test]
    fn test_empty_script_scores_all_zero() {
        let doc = ScriptDocument::parse("");
        let result = score_script(&doc, &registry());

        assert_eq!(result.two_women, 0);
        assert_eq!(result.women_converse, 0);
        assert_eq!(result.not_about_a_man, 0);
        assert!(result.female_cast.is_empty());
        assert!(result.male_cast.is_empty());
    }

    #[test]
    fn test_full_pipeline_passes_all_three() {
        let markup = "<html><body>\n\
            <b>INT. KITCHEN - NIGHT</b>\n\
            <b>ALICE</b>\n\
            Did you finish the report\n\
            <b>BETH</b>\n\
            Almost there\n\
            <b>ALICE</b>\n\
            Good\n\
            <b>THE END</b>\n\
            </body></html>";
        let doc = ScriptDocument::parse(markup);
        let result = score_script(&doc, &registry());

        assert_eq!(result.female_cast, ["alice", "beth"]);
        assert_eq!(result.two_women, 1);
        assert_eq!(result.women_converse, 1);
        assert_eq!(result.not_about_a_man, 1);
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn test_talking_about_a_man_fails_criterion_three() {
        let markup = "<b>ALICE</b>\n\
            Has he called you back\n\
            <b>BETH</b>\n\
            Not yet\n\
            <b>ALICE</b>\n\
            Typical";
        let doc = ScriptDocument::parse(markup);
        let result = score_script(&doc, &registry());

        assert_eq!(result.two_women, 1);
        assert_eq!(result.women_converse, 1);
        // The only female-female exchange is about "he".
        assert_eq!(result.not_about_a_man, 0);
    }

    #[test]
    fn test_single_woman_fails_everything() {
        let markup = "<b>ALICE</b>\nHello\n<b>BOB</b>\nHi\n<b>ALICE</b>\nBye";
        let doc = ScriptDocument::parse(markup);
        let result = score_script(&doc, &registry());

        assert_eq!(result.female_cast, ["alice"]);
        assert_eq!(result.male_cast, ["bob"]);
        assert_eq!(result.total(), 0);
    }
}
