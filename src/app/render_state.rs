use crate::app::mode::AppMode;
use crate::engine::config::Language;
use crate::vitals::VitalField;

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub language: Language,
    /// Label of the field being collected
    pub field_label: Option<&'static str>,
    /// Prompt or confirmation question to show
    pub prompt: String,
    /// Last transcript as heard, shown so the user can self-correct
    pub heard: Option<String>,
    pub status: Option<String>,
    /// (label, value with unit) per field
    pub readings: Vec<(&'static str, Option<String>)>,
    pub progress: (usize, usize),
}

impl RenderState {
    pub fn readings_for(
        language: Language,
        values: impl Iterator<Item = (VitalField, Option<u32>)>,
    ) -> Vec<(&'static str, Option<String>)> {
        values
            .map(|(field, value)| {
                (
                    field.label(language),
                    value.map(|v| format!("{} {}", v, field.unit())),
                )
            })
            .collect()
    }
}
