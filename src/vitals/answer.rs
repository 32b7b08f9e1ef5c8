use crate::numbers::{normalize, NumberParser};

const SKIP_WORDS: &[&str] = &["skip", "ruka"];
const YES_WORDS: &[&str] = &["yes", "yeah", "yep", "correct", "ndio", "ndiyo", "sawa"];
const NO_WORDS: &[&str] = &["no", "nope", "wrong", "hapana", "siyo"];

/// What a transcript means to the voice form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Skip,
    Yes,
    No,
    Number(u32),
    Unrecognized,
}

/// Classify a transcript. Skip wins over everything, and a number wins
/// over yes/no, so "no, seventy two" is read as a correction to 72. A
/// number below ten loses to yes/no: in "yes that one is right" the "one"
/// is not a reading.
pub fn classify(transcript: &str, parser: &NumberParser<'_>) -> Answer {
    let words = normalize(transcript);
    let has = |keywords: &[&str]| words.iter().any(|w| keywords.contains(&w.as_str()));

    if has(SKIP_WORDS) {
        return Answer::Skip;
    }

    let keyword = if has(YES_WORDS) {
        Some(Answer::Yes)
    } else if has(NO_WORDS) {
        Some(Answer::No)
    } else {
        None
    };

    match (parser.parse(transcript), keyword) {
        (Some(value), Some(keyword)) if value < 10 => keyword,
        (Some(value), _) => Answer::Number(value),
        (None, Some(keyword)) => keyword,
        (None, None) => Answer::Unrecognized,
    }
}
