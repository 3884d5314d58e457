//! Tolerant markup intake for script transcripts.
//!
//! Film-script HTML is noisy: unclosed tags, inconsistent nesting,
//! decorative markup packed around the dialogue. This is deliberately
//! not a conforming HTML parser. It exposes exactly the two views the
//! scorer needs, both in document order: the bold spans (speaker cues
//! live there by convention) and the tag-stripped plain text.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::BechdelError;

/// A parsed script transcript.
#[derive(Debug, Clone)]
pub struct ScriptDocument {
    bold_spans: Vec<String>,
    plain_text: String,
}

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `<b>` with optional attributes; the `\s` guard keeps `<body>`
    // and friends from matching. An unterminated span yields nothing.
    RE.get_or_init(|| Regex::new(r"(?is)<b(?:\s[^>]*)?>(.*?)</b\s*>").unwrap())
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[^>]*>").unwrap())
}

impl ScriptDocument {
    /// Parse raw markup. Never fails: whatever does not look like a
    /// bold span or a tag is treated as text.
    pub fn parse(markup: &str) -> Self {
        let bold_spans = bold_re()
            .captures_iter(markup)
            .map(|caps| decode_entities(&strip_tags(&caps[1])))
            .collect();
        let plain_text = decode_entities(&strip_tags(markup));

        Self {
            bold_spans,
            plain_text,
        }
    }

    /// Text of every bold span, document order, repeats retained.
    pub fn bold_spans(&self) -> &[String] {
        &self.bold_spans
    }

    /// Full document text with markup stripped, document order.
    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }
}

/// Read and parse one script file.
///
/// Read failures (missing file, undecodable bytes) map to
/// `MarkupParse` so the batch driver can skip the script and continue.
pub fn load_script(path: &Path) -> Result<ScriptDocument, BechdelError> {
    let markup = std::fs::read_to_string(path).map_err(|err| BechdelError::MarkupParse {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    Ok(ScriptDocument::parse(&markup))
}

fn strip_tags(markup: &str) -> String {
    tag_re().replace_all(markup, "").into_owned()
}

/// Decode the handful of entities that actually occur in script
/// transcripts. `&amp;` goes last so it cannot create new entities.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
