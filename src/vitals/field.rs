use crate::engine::config::Language;
use std::fmt;

/// A vitals reading the voice form collects, in prompting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VitalField {
    Glucose,
    Systolic,
    Diastolic,
    HeartRate,
}

impl VitalField {
    pub const ALL: [VitalField; 4] = [
        VitalField::Glucose,
        VitalField::Systolic,
        VitalField::Diastolic,
        VitalField::HeartRate,
    ];

    /// Key the form store uses for this field
    pub fn key(&self) -> &'static str {
        match self {
            VitalField::Glucose => "glucose",
            VitalField::Systolic => "systolic",
            VitalField::Diastolic => "diastolic",
            VitalField::HeartRate => "heartRate",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            VitalField::Glucose => "mg/dL",
            VitalField::Systolic | VitalField::Diastolic => "mmHg",
            VitalField::HeartRate => "bpm",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            VitalField::Glucose => 0,
            VitalField::Systolic => 1,
            VitalField::Diastolic => 2,
            VitalField::HeartRate => 3,
        }
    }

    pub fn next(&self) -> Option<VitalField> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<VitalField> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (VitalField::Glucose, Language::English) => "Blood Glucose (mg/dL)",
            (VitalField::Glucose, Language::Swahili) => "Sukari Damu (mg/dL)",
            (VitalField::Systolic, Language::English) => "Systolic Blood Pressure",
            (VitalField::Systolic, Language::Swahili) => "Shinikizo la Damu la Sistolic",
            (VitalField::Diastolic, Language::English) => "Diastolic Blood Pressure",
            (VitalField::Diastolic, Language::Swahili) => "Shinikizo la Damu la Diastolic",
            (VitalField::HeartRate, Language::English) => "Heart Rate (bpm)",
            (VitalField::HeartRate, Language::Swahili) => "Kiwango cha Mapigo ya Moyo (bpm)",
        }
    }

    /// Spoken instruction read out before listening for this field
    pub fn prompt(&self, language: Language) -> &'static str {
        match (self, language) {
            (VitalField::Glucose, Language::English) => {
                "Please say your blood glucose level in milligrams per deciliter. \
                 For example, say 'one two zero' for 120. Say 'skip' if you don't have this measurement."
            }
            (VitalField::Glucose, Language::Swahili) => {
                "Tafadhali sema kiwango chako cha sukari damu kwenye miligramu kwa desilita. \
                 Kwa mfano, sema 'mia moja ishirini' kwa 120. Sema 'ruka' kama huna kipimo hiki."
            }
            (VitalField::Systolic, Language::English) => {
                "Please say your systolic blood pressure. This is the top number. \
                 For example, say 'one hundred twenty' for 120. Say 'skip' if you don't have this measurement."
            }
            (VitalField::Systolic, Language::Swahili) => {
                "Tafadhali sema shinikizo lako la damu sistolic. Hii ni nambari ya juu. \
                 Kwa mfano, sema 'mia moja ishirini' kwa 120. Sema 'ruka' kama huna kipimo hiki."
            }
            (VitalField::Diastolic, Language::English) => {
                "Please say your diastolic blood pressure. This is the bottom number. \
                 For example, say 'eighty' for 80. Say 'skip' if you don't have this measurement."
            }
            (VitalField::Diastolic, Language::Swahili) => {
                "Tafadhali sema shinikizo lako la damu diastolic. Hii ni nambari ya chini. \
                 Kwa mfano, sema 'themanini' kwa 80. Sema 'ruka' kama huna kipimo hiki."
            }
            (VitalField::HeartRate, Language::English) => {
                "Please say your heart rate in beats per minute. \
                 For example, say 'seventy two' for 72. Say 'skip' if you don't have this measurement."
            }
            (VitalField::HeartRate, Language::Swahili) => {
                "Tafadhali sema mapigo ya moyo yako kwa dakika. \
                 Kwa mfano, sema 'sabini na mbili' kwa 72. Sema 'ruka' kama huna kipimo hiki."
            }
        }
    }
}

impl fmt::Display for VitalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
