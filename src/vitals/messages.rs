// Localized feedback spoken/displayed by the voice form

use super::VitalField;
use crate::engine::config::Language;
use std::ops::RangeInclusive;

pub fn not_understood(language: Language) -> String {
    match language {
        Language::English => "I didn't understand the number. Please try again.".to_string(),
        Language::Swahili => "Sikuelewa nambari. Tafadhali jaribu tena.".to_string(),
    }
}

pub fn out_of_range(language: Language, value: u32, range: &RangeInclusive<u32>) -> String {
    let (min, max) = (range.start(), range.end());
    match language {
        Language::English => format!(
            "{} is out of range. Valid range is {} to {}. Please try again.",
            value, min, max
        ),
        Language::Swahili => format!(
            "{} ni nje ya kiwango sahihi. Kiwango sahihi ni {} hadi {}. Tafadhali jaribu tena.",
            value, min, max
        ),
    }
}

pub fn confirm(language: Language, value: u32, field: VitalField) -> String {
    match language {
        Language::English => format!("Is {} {} correct? Say yes or no.", value, field.unit()),
        Language::Swahili => format!("Je, {} {} ni sahihi? Sema ndiyo au hapana.", value, field.unit()),
    }
}

pub fn next_field(language: Language) -> String {
    match language {
        Language::English => "Good. Let's continue.".to_string(),
        Language::Swahili => "Vizuri. Tuendelee.".to_string(),
    }
}

pub fn skipped(language: Language) -> String {
    match language {
        Language::English => "Skipped.".to_string(),
        Language::Swahili => "Imerukwa.".to_string(),
    }
}

pub fn retry(language: Language) -> String {
    match language {
        Language::English => "Okay, let's try again.".to_string(),
        Language::Swahili => "Sawa, tujaribu tena.".to_string(),
    }
}

pub fn complete(language: Language) -> String {
    match language {
        Language::English => "Thank you! All measurements are complete.".to_string(),
        Language::Swahili => "Asante sana! Vipimo vyote vimekamilika.".to_string(),
    }
}

pub fn help(language: Language) -> String {
    match language {
        Language::English => {
            "Say or type a number. Commands: :lang en|sw  :skip  :back  :reset  @file  @@ (clipboard)  :q"
                .to_string()
        }
        Language::Swahili => {
            "Sema au andika nambari. Amri: :lang en|sw  :skip  :back  :reset  @faili  @@ (ubao)  :q"
                .to_string()
        }
    }
}
