//! Text cleanup rules applied to every CSV cell

const NBSP: char = '\u{00a0}';

/// Replace non-breaking spaces, collapse whitespace runs to one space and
/// trim both ends.
pub fn normalize_text(s: &str) -> String {
    let mut normalized = String::with_capacity(s.len());
    for segment in s.split(|c: char| c == NBSP || c.is_whitespace()) {
        if segment.is_empty() {
            continue;
        }
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// Normalized and lowercased, for past/participle/gerund cells
pub fn normalize_verb_form(s: &str) -> String {
    normalize_text(s).to_lowercase()
}

/// Like [`normalize_verb_form`], minus one leading "to" token.
///
/// A bare "to" has no following token and is left alone.
pub fn normalize_infinitive(s: &str) -> String {
    let form = normalize_verb_form(s);
    match form.strip_prefix("to ") {
        Some(rest) => rest.to_string(),
        None => form,
    }
}

/// Stable record id for an infinitive: `to_` plus the infinitive with
/// spaces turned into underscores.
pub fn verb_id(infinitive: &str) -> String {
    format!("to_{}", infinitive.replace(' ', "_"))
}
