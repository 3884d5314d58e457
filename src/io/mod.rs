pub mod output;

pub use output::{ScoreRow, append_row, read_rows, summarize};
