use crate::engine::config::Language;
use lazy_static::lazy_static;
use std::collections::HashMap;
use thiserror::Error;

/// Which part of a spoken number a word plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// 0-9
    Unit,
    /// 10-19 and the round tens 20-90
    Tens,
    /// 100
    Hundred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberWord {
    pub value: u32,
    pub band: Band,
    pub language: Language,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("'{word}' maps to both {first} and {second}")]
    Conflict {
        word: String,
        first: u32,
        second: u32,
    },
}

const ENGLISH: &[(&str, u32)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
    ("hundred", 100),
];

// Includes the common alternate spellings transcribers produce
const SWAHILI: &[(&str, u32)] = &[
    ("sifuri", 0),
    ("sufuri", 0),
    ("moja", 1),
    ("mbili", 2),
    ("tatu", 3),
    ("nne", 4),
    ("tano", 5),
    ("sita", 6),
    ("saba", 7),
    ("nane", 8),
    ("tisa", 9),
    ("kumi", 10),
    ("ishirini", 20),
    ("thelathini", 30),
    ("thelatini", 30),
    ("arobaini", 40),
    ("arubaini", 40),
    ("hamsini", 50),
    ("sitini", 60),
    ("sabini", 70),
    ("themanini", 80),
    ("tisini", 90),
    ("mia", 100),
];

const CONNECTORS: &[&str] = &["and", "na"];

lazy_static! {
    static ref BUILTIN: NumberWords = NumberWords::builtin_table();
}

/// The English + Swahili table shared by every default parser
pub fn builtin() -> &'static NumberWords {
    &BUILTIN
}

/// Immutable word → value lookup used by the parser
#[derive(Debug, Clone)]
pub struct NumberWords {
    words: HashMap<&'static str, NumberWord>,
    connectors: Vec<&'static str>,
}

impl NumberWords {
    /// Build a table, rejecting any spelling that maps to two different values.
    pub fn try_from_entries(
        entries: &[(Language, &[(&'static str, u32)])],
        connectors: &[&'static str],
    ) -> Result<Self, TableError> {
        let (table, conflicts) = Self::build(entries, connectors);
        match conflicts.into_iter().next() {
            Some(conflict) => Err(conflict),
            None => Ok(table),
        }
    }

    fn builtin_table() -> Self {
        let (table, conflicts) = Self::build(
            &[(Language::English, ENGLISH), (Language::Swahili, SWAHILI)],
            CONNECTORS,
        );
        debug_assert!(conflicts.is_empty(), "builtin number table conflicts: {conflicts:?}");
        table
    }

    fn build(
        entries: &[(Language, &[(&'static str, u32)])],
        connectors: &[&'static str],
    ) -> (Self, Vec<TableError>) {
        let mut words: HashMap<&'static str, NumberWord> = HashMap::new();
        let mut conflicts = Vec::new();

        for (language, list) in entries {
            for &(word, value) in list.iter() {
                let entry = NumberWord {
                    value,
                    band: band_for(value),
                    language: *language,
                };
                match words.get(word) {
                    Some(existing) if existing.value != value => {
                        conflicts.push(TableError::Conflict {
                            word: word.to_string(),
                            first: existing.value,
                            second: value,
                        });
                    }
                    Some(_) => {}
                    None => {
                        words.insert(word, entry);
                    }
                }
            }
        }

        let table = Self {
            words,
            connectors: connectors.to_vec(),
        };
        (table, conflicts)
    }

    /// Look up an already-lowercased word
    pub fn lookup(&self, word: &str) -> Option<&NumberWord> {
        self.words.get(word)
    }

    pub fn is_connector(&self, word: &str) -> bool {
        self.connectors.contains(&word)
    }
}

fn band_for(value: u32) -> Band {
    match value {
        0..=9 => Band::Unit,
        100 => Band::Hundred,
        _ => Band::Tens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_has_no_conflicts() {
        let result = NumberWords::try_from_entries(
            &[(Language::English, ENGLISH), (Language::Swahili, SWAHILI)],
            CONNECTORS,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_conflicting_spelling_is_flagged() {
        const A: &[(&str, u32)] = &[("moja", 1)];
        const B: &[(&str, u32)] = &[("moja", 7)];
        let result =
            NumberWords::try_from_entries(&[(Language::Swahili, A), (Language::English, B)], &[]);
        assert_eq!(
            result.unwrap_err(),
            TableError::Conflict {
                word: "moja".to_string(),
                first: 1,
                second: 7,
            }
        );
    }

    #[test]
    fn test_shared_spelling_with_same_value_is_allowed() {
        const A: &[(&str, u32)] = &[("tano", 5)];
        let result =
            NumberWords::try_from_entries(&[(Language::Swahili, A), (Language::English, A)], &[]);
        let table = result.unwrap();
        assert_eq!(table.lookup("tano").unwrap().language, Language::Swahili);
    }

    #[test]
    fn test_bands() {
        let table = builtin();
        assert_eq!(table.lookup("nine").unwrap().band, Band::Unit);
        assert_eq!(table.lookup("kumi").unwrap().band, Band::Tens);
        assert_eq!(table.lookup("fifteen").unwrap().band, Band::Tens);
        assert_eq!(table.lookup("mia").unwrap().band, Band::Hundred);
        assert_eq!(table.lookup("hundred").unwrap().language, Language::English);
    }

    #[test]
    fn test_connectors() {
        let table = builtin();
        assert!(table.is_connector("and"));
        assert!(table.is_connector("na"));
        assert!(!table.is_connector("moja"));
    }
}
