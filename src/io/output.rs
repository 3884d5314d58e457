use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ScoreResult;

/// One persisted line of the tabular score file: an opaque script
/// identifier plus the three binary criterion scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub script: String,
    pub scores: [u8; 3],
}

impl ScoreRow {
    pub fn new(script: impl Into<String>, result: &ScoreResult) -> Self {
        Self {
            script: script.into(),
            scores: [
                result.two_women,
                result.women_converse,
                result.not_about_a_man,
            ],
        }
    }

    /// Total score, 0-3.
    pub fn total(&self) -> u8 {
        self.scores.iter().sum()
    }
}

/// Append one result row to the score file.
///
/// Comma-separated, no header, each score a literal "0" or "1". The
/// file accumulates incrementally: rows written before a failure
/// survive it, and a rerun appends rather than truncates.
pub fn append_row(path: &Path, row: &ScoreRow) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open score file: {:?}", path))?;
    writeln!(
        file,
        "{},{},{},{}",
        row.script, row.scores[0], row.scores[1], row.scores[2]
    )
    .with_context(|| format!("Failed to append to score file: {:?}", path))?;
    Ok(())
}

/// Read a score file back into rows.
///
/// Column 0 is opaque and may itself contain commas, so the three
/// score columns are split off from the right.
pub fn read_rows(path: &Path) -> Result<Vec<ScoreRow>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read score file: {:?}", path))?;

    let mut rows = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = parse_row(line)
            .with_context(|| format!("Malformed score row at {:?}:{}", path, line_no + 1))?;
        rows.push(row);
    }
    Ok(rows)
}

fn parse_row(line: &str) -> Result<ScoreRow> {
    let mut fields = line.rsplitn(4, ',');
    let third = parse_score(fields.next())?;
    let second = parse_score(fields.next())?;
    let first = parse_score(fields.next())?;
    let script = fields
        .next()
        .context("missing script identifier column")?
        .to_string();

    Ok(ScoreRow {
        script,
        scores: [first, second, third],
    })
}

fn parse_score(field: Option<&str>) -> Result<u8> {
    let field = field.context("missing score column")?;
    match field.trim() {
        "0" => Ok(0),
        "1" => Ok(1),
        other => anyhow::bail!("score column must be 0 or 1, got {:?}", other),
    }
}

/// Bucket rows by total score for the 0-3 histogram. This is the
/// whole downstream-consumer contract: column 0 opaque, columns 1-3
/// summed per row.
pub fn summarize(rows: &[ScoreRow]) -> [usize; 4] {
    let mut buckets = [0usize; 4];
    for row in rows {
        buckets[row.total() as usize] += 1;
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(script: &str, scores: [u8; 3]) -> ScoreRow {
        ScoreRow {
            script: script.to_string(),
            scores,
        }
    }

    #[test]
    fn test_append_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.csv");

        append_row(&path, &row("scripts/alien.html", [1, 1, 1])).unwrap();
        append_row(&path, &row("scripts/heat.html", [0, 0, 0])).unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].script, "scripts/alien.html");
        assert_eq!(rows[0].scores, [1, 1, 1]);
        assert_eq!(rows[1].total(), 0);
    }

    #[test]
    fn test_append_accumulates_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.csv");

        append_row(&path, &row("a.html", [1, 0, 0])).unwrap();
        // A second "run" must not truncate the first row.
        append_row(&path, &row("b.html", [0, 1, 0])).unwrap();

        assert_eq!(read_rows(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_identifier_may_contain_commas() {
        let line = "scripts/crouching tiger, hidden dragon.html,1,1,0";
        let parsed = parse_row(line).unwrap();

        assert_eq!(parsed.script, "scripts/crouching tiger, hidden dragon.html");
        assert_eq!(parsed.scores, [1, 1, 0]);
    }

    #[test]
    fn test_malformed_score_is_rejected() {
        assert!(parse_row("a.html,1,2,0").is_err());
        assert!(parse_row("a.html,1,1").is_err());
    }

    #[test]
    fn test_summarize_buckets_by_total() {
        let rows = vec![
            row("a", [0, 0, 0]),
            row("b", [1, 0, 0]),
            row("c", [1, 1, 0]),
            row("d", [1, 1, 1]),
            row("e", [1, 1, 1]),
        ];

        assert_eq!(summarize(&rows), [1, 1, 1, 2]);
    }
}
