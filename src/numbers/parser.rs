//! Spoken-number parsing for voice transcripts.
//!
//! Two readings are tried in order:
//!
//! - **Digit sequence**: every word is a single digit ("one two zero",
//!   "moja mbili sifuri"), concatenated positionally → 120.
//! - **Compositional**: number words add up left to right, with the
//!   hundred word acting as a multiplier ("three hundred and forty five"
//!   → 345, "mia mbili" → 200). Connectors and unknown words are skipped.
//!
//! Digit strings are read whole: "1,200" is 1200, while a decimal
//! ("98.6"), a pair ("120/80") or a numeral too large for `u32` makes the
//! whole transcript unusable.
//!
//! Parsing never fails loudly; an unusable transcript yields `None`.

use super::token::{builtin, Band, NumberWord, NumberWords};
use crate::engine::config::Language;
use unicode_segmentation::UnicodeSegmentation;

/// Parse with the built-in English + Swahili table
pub fn parse_number_words(input: &str) -> Option<u32> {
    NumberParser::default().parse(input)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Word<'t> {
    Number(&'t NumberWord),
    Numeral { value: u32, digits: usize },
    /// A digit string that is not a plain reading
    Malformed,
    Connector,
    Other,
}

impl Word<'_> {
    fn single_digit(&self) -> Option<u32> {
        match self {
            Word::Number(w) if w.band == Band::Unit => Some(w.value),
            Word::Numeral { value, digits: 1 } => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NumberParser<'t> {
    table: &'t NumberWords,
}

impl Default for NumberParser<'static> {
    fn default() -> Self {
        Self { table: builtin() }
    }
}

impl<'t> NumberParser<'t> {
    pub fn new(table: &'t NumberWords) -> Self {
        Self { table }
    }

    pub fn parse(&self, input: &str) -> Option<u32> {
        let words = self.classify(input);
        if words.is_empty() {
            return None;
        }

        if let Some(digits) = words
            .iter()
            .map(Word::single_digit)
            .collect::<Option<Vec<u32>>>()
        {
            tracing::trace!(mode = "digit_sequence", words = digits.len());
            return concat_digits(&digits);
        }

        tracing::trace!(mode = "compositional", words = words.len());
        compose(&words)
    }

    fn classify(&self, input: &str) -> Vec<Word<'t>> {
        normalize(input)
            .iter()
            .map(|w| self.classify_word(w))
            .collect()
    }

    fn classify_word(&self, word: &str) -> Word<'t> {
        if let Some(number) = self.table.lookup(word) {
            return Word::Number(number);
        }
        if self.table.is_connector(word) {
            return Word::Connector;
        }
        if is_numeric(word) {
            return classify_numeral(word);
        }
        Word::Other
    }
}

fn classify_numeral<'t>(word: &str) -> Word<'t> {
    let digits = match ungroup(word) {
        Some(digits) => digits,
        None => return Word::Malformed,
    };
    match digits.parse::<u32>() {
        Ok(value) => Word::Numeral {
            value,
            digits: digits.len(),
        },
        Err(_) => Word::Malformed,
    }
}

/// Strip thousands separators from "1,200"; None for anything else that
/// is not a bare digit run
fn ungroup(word: &str) -> Option<String> {
    if word.bytes().all(|b| b.is_ascii_digit()) {
        return Some(word.to_string());
    }
    if word.contains(['.', '/']) {
        return None;
    }

    let mut groups = word.split(',');
    let lead = groups.next()?;
    if lead.is_empty() || lead.len() > 3 {
        return None;
    }
    let mut digits = lead.to_string();
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

/// A run of digits, possibly with `,` `.` or `/` between them
fn is_numeric(segment: &str) -> bool {
    segment.starts_with(|c: char| c.is_ascii_digit())
        && segment
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '/'))
}

/// Lowercased words with every character that is not an ASCII letter or
/// digit treated as a separator. Digit runs keep their inner `,` `.` and
/// `/` so "1,200", "98.6" and "120/80" each stay one word.
pub fn normalize(input: &str) -> Vec<String> {
    let segments: Vec<&str> = input.split_word_bounds().collect();
    let mut words = Vec::new();
    let mut i = 0;

    while i < segments.len() {
        let segment = segments[i];
        i += 1;

        if is_numeric(segment) {
            let mut numeral = segment.to_string();
            // "120/80" and "120 / 80" arrive as separate segments
            while let Some(next) = numeral_after_slash(&segments, i) {
                numeral.push('/');
                numeral.push_str(segments[next]);
                i = next + 1;
            }
            words.push(numeral);
            continue;
        }

        words.extend(
            segment
                .split(|c: char| !c.is_ascii_alphanumeric())
                .filter(|w| !w.is_empty())
                .map(|w| w.to_lowercase()),
        );
    }

    words
}

/// Index of the numeral following a `/` at `from`, skipping whitespace
fn numeral_after_slash(segments: &[&str], from: usize) -> Option<usize> {
    let is_space = |i: &usize| segments[*i].trim().is_empty();
    let slash = (from..segments.len()).find(|i| !is_space(i))?;
    if segments[slash] != "/" {
        return None;
    }
    let next = (slash + 1..segments.len()).find(|i| !is_space(i))?;
    is_numeric(segments[next]).then_some(next)
}

fn concat_digits(digits: &[u32]) -> Option<u32> {
    digits
        .iter()
        .try_fold(0u32, |acc, &d| acc.checked_mul(10)?.checked_add(d))
}

fn compose(words: &[Word<'_>]) -> Option<u32> {
    let mut total: u32 = 0;
    let mut recognized = false;
    let mut iter = words.iter().peekable();

    while let Some(word) = iter.next() {
        match word {
            Word::Number(w) if w.band == Band::Hundred => {
                recognized = true;
                if total != 0 {
                    total = total.checked_mul(w.value)?;
                    continue;
                }
                // "mia mbili": Swahili puts the count after the hundred
                let count = match iter.peek() {
                    Some(Word::Number(next))
                        if w.language == Language::Swahili
                            && next.band == Band::Unit
                            && next.value > 0 =>
                    {
                        let value = next.value;
                        iter.next();
                        value
                    }
                    _ => 1,
                };
                total = w.value.checked_mul(count)?;
            }
            Word::Number(w) => {
                recognized = true;
                total = total.checked_add(w.value)?;
            }
            Word::Numeral { value, .. } => {
                recognized = true;
                total = total.checked_add(*value)?;
            }
            Word::Malformed => return None,
            Word::Connector | Word::Other => continue,
        }
    }

    recognized.then_some(total)
}
