use crate::markup::ScriptDocument;

/// Markers that identify scene headers and transitions rather than
/// character names. Matched as case-sensitive substrings, the way they
/// appear in scripts.
const NON_CHARACTER_MARKERS: [&str; 3] = ["INT.", "EXT.", "END"];

/// Extract candidate speaker cues from a script's bold spans.
///
/// Speaker names conventionally appear in bold; so do scene headers
/// ("INT. KITCHEN - NIGHT") and the closing "THE END", which are
/// filtered out. Document order and repeats are preserved: a cue
/// recurs every time the character speaks, and the back-to-back
/// criterion depends on that adjacency.
pub fn extract_cues(doc: &ScriptDocument) -> Vec<String> {
    doc.bold_spans()
        .iter()
        .map(|span| span.trim())
        .filter(|text| !text.is_empty())
        .filter(|text| !NON_CHARACTER_MARKERS.iter().any(|marker| text.contains(marker)))
        .map(|text| text.to_string())
        .collect()
}
