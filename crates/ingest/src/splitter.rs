use once_cell::sync::Lazy;
use regex::Regex;

// Sentence-ending punctuation followed by the whitespace that separates sentences
static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence break pattern is valid"));

/// Split free-form text into sentences.
///
/// The text is trimmed, then cut on every run of whitespace that immediately
/// follows `.`, `!` or `?`. The punctuation stays with its sentence and
/// whitespace-only pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // The punctuation mark is a single ASCII byte
        let end = m.start() + 1;
        push_sentence(&mut sentences, &text[start..end]);
        start = m.end();
    }
    push_sentence(&mut sentences, &text[start..]);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, piece: &str) {
    if !piece.trim().is_empty() {
        sentences.push(piece.to_string());
    }
}

/// True when the text contains nothing but whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
