//! Vitals fields and the meaning of voice answers
//!
//! - **field.rs**: the four readings, their labels and spoken prompts
//! - **answer.rs**: classify a transcript as skip / yes / no / number
//! - **messages.rs**: localized feedback for the voice form

pub mod answer;
pub mod field;
pub mod messages;

pub use answer::{classify, Answer};
pub use field::VitalField;
