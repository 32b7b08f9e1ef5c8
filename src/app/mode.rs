use crate::vitals::VitalField;

/// Where the voice form is in its field-by-field walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Waiting for a reading for this field
    Prompting(VitalField),
    /// A reading was heard and is waiting for yes/no
    Confirming { field: VitalField, value: u32 },
    Complete,
    Quit,
}

impl AppMode {
    /// Field currently being collected, if any
    pub fn field(&self) -> Option<VitalField> {
        match self {
            AppMode::Prompting(field) | AppMode::Confirming { field, .. } => Some(*field),
            AppMode::Complete | AppMode::Quit => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AppMode::Prompting(_) => "prompting",
            AppMode::Confirming { .. } => "confirming",
            AppMode::Complete => "complete",
            AppMode::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_of_mode() {
        assert_eq!(
            AppMode::Prompting(VitalField::Systolic).field(),
            Some(VitalField::Systolic)
        );
        assert_eq!(
            AppMode::Confirming {
                field: VitalField::HeartRate,
                value: 72
            }
            .field(),
            Some(VitalField::HeartRate)
        );
        assert_eq!(AppMode::Complete.field(), None);
    }
}
