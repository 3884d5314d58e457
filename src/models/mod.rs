pub mod registry;
pub mod score;
pub mod turn;

pub use registry::NameRegistry;
pub use score::ScoreResult;
pub use turn::DialogueTurn;
