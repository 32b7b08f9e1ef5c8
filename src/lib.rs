//! Voice entry of vitals readings.
//!
//! Transcripts from a speech-to-text provider (English or Kiswahili) are
//! turned into numbers by [`numbers`], checked against per-field ranges and
//! confirmed by the voice form in [`app`], and driven from the terminal by
//! [`ui`].

pub mod app;
pub mod engine;
pub mod input;
pub mod numbers;
pub mod ui;
pub mod vitals;

pub use numbers::parse_number_words;
