pub mod error;
pub mod io;
pub mod markup;
pub mod models;
pub mod scoring;

pub use error::BechdelError;
pub use io::{ScoreRow, append_row, read_rows, summarize};
pub use markup::{ScriptDocument, load_script};
pub use models::{DialogueTurn, NameRegistry, ScoreResult};
pub use scoring::{
    CastDiscovery, SegmentedDialogue, discover_cast, extract_cues, score_exchange, score_script,
    score_topic, segment,
};
