use crate::vitals::VitalField;

/// Readings collected so far, one slot per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VitalsForm {
    values: [Option<u32>; 4],
}

impl VitalsForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: VitalField) -> Option<u32> {
        self.values[field.index()]
    }

    pub fn set(&mut self, field: VitalField, value: u32) {
        self.values[field.index()] = Some(value);
    }

    pub fn clear(&mut self, field: VitalField) {
        self.values[field.index()] = None;
    }

    pub fn reset(&mut self) {
        self.values = [None; 4];
    }

    pub fn filled_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VitalField, Option<u32>)> + '_ {
        VitalField::ALL.iter().map(move |&field| (field, self.get(field)))
    }

    /// One-line summary, e.g. "glucose=110 mg/dL, systolic=-, ..."
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(field, value)| match value {
                Some(v) => format!("{}={} {}", field.key(), v, field.unit()),
                None => format!("{}=-", field.key()),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
