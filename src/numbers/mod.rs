pub mod parser;
pub mod token;

pub use parser::{normalize, parse_number_words, NumberParser};
pub use token::{builtin, Band, NumberWord, NumberWords, TableError};
