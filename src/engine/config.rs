// Configuration for the vitals voice form and its terminal front end
// Ranges match the limits the voice form enforced on each reading

use crate::vitals::VitalField;
use std::ops::RangeInclusive;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable selecting the starting language ("en" or "sw")
pub const LANG_ENV: &str = "VITALS_VOICE_LANG";

/// Environment variable overriding the log directory
pub const LOG_DIR_ENV: &str = "VITALS_VOICE_LOG_DIR";

/// Language used for prompts and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Swahili,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Swahili => "sw",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Swahili => "Kiswahili",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "sw" | "swa" | "swahili" | "kiswahili" => Ok(Language::Swahili),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

/// Valid reading ranges per vital field (inclusive)
#[derive(Debug, Clone, PartialEq)]
pub struct VitalsConfig {
    /// Blood glucose in mg/dL (default 20-600)
    pub glucose: RangeInclusive<u32>,

    /// Systolic pressure in mmHg (default 70-250)
    pub systolic: RangeInclusive<u32>,

    /// Diastolic pressure in mmHg (default 40-150)
    pub diastolic: RangeInclusive<u32>,

    /// Heart rate in bpm (default 30-220)
    pub heart_rate: RangeInclusive<u32>,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            glucose: 20..=600,
            systolic: 70..=250,
            diastolic: 40..=150,
            heart_rate: 30..=220,
        }
    }
}

impl VitalsConfig {
    pub fn range(&self, field: VitalField) -> &RangeInclusive<u32> {
        match field {
            VitalField::Glucose => &self.glucose,
            VitalField::Systolic => &self.systolic,
            VitalField::Diastolic => &self.diastolic,
            VitalField::HeartRate => &self.heart_rate,
        }
    }
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Directory for rolling log files; None means ~/.vitals-voice/logs
    pub directory: Option<PathBuf>,

    /// File name prefix for the daily log files
    pub file_prefix: String,

    /// Filter used when RUST_LOG is unset
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_prefix: "vitals-voice.log".to_string(),
            default_filter: "info".to_string(),
        }
    }
}

/// Terminal front end configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Redraw interval in milliseconds
    pub tick_ms: u64,

    /// Maximum characters accepted on the input line
    pub max_input_len: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            max_input_len: 256,
        }
    }
}

/// An environment override that was ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    pub key: &'static str,
    pub reason: String,
}

impl fmt::Display for RejectedOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ignoring {}: {}", self.key, self.reason)
    }
}

/// Master configuration combining all settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub language: Language,
    pub vitals: VitalsConfig,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults, overridden by `VITALS_VOICE_LANG` and `VITALS_VOICE_LOG_DIR`.
    ///
    /// Runs before logging exists, so overrides that could not be applied
    /// are handed back for the caller to report.
    pub fn from_env() -> (Self, Vec<RejectedOverride>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> (Self, Vec<RejectedOverride>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut rejected = Vec::new();

        if let Some(lang) = lookup(LANG_ENV) {
            match lang.parse::<Language>() {
                Ok(language) => config.language = language,
                Err(reason) => rejected.push(RejectedOverride {
                    key: LANG_ENV,
                    reason,
                }),
            }
        }

        if let Some(dir) = lookup(LOG_DIR_ENV).filter(|d| !d.trim().is_empty()) {
            config.logging.directory = Some(PathBuf::from(dir));
        }

        (config, rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let vitals = VitalsConfig::default();
        assert_eq!(vitals.range(VitalField::Glucose), &(20..=600));
        assert_eq!(vitals.range(VitalField::Systolic), &(70..=250));
        assert_eq!(vitals.range(VitalField::Diastolic), &(40..=150));
        assert_eq!(vitals.range(VitalField::HeartRate), &(30..=220));
    }

    #[test]
    fn test_zero_is_never_a_valid_reading() {
        let vitals = VitalsConfig::default();
        for field in VitalField::ALL {
            assert!(!vitals.range(field).contains(&0));
        }
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("sw".parse::<Language>().unwrap(), Language::Swahili);
        assert_eq!("Kiswahili".parse::<Language>().unwrap(), Language::Swahili);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let (config, rejected) = Config::from_lookup(|key| match key {
            LANG_ENV => Some("sw".to_string()),
            LOG_DIR_ENV => Some("/tmp/vv-logs".to_string()),
            _ => None,
        });
        assert!(rejected.is_empty());
        assert_eq!(config.language, Language::Swahili);
        assert_eq!(config.logging.directory, Some(PathBuf::from("/tmp/vv-logs")));
    }

    #[test]
    fn test_from_lookup_ignores_bad_language() {
        let (config, rejected) = Config::from_lookup(|key| match key {
            LANG_ENV => Some("klingon".to_string()),
            _ => None,
        });
        assert_eq!(config, Config::default());
        assert_eq!(
            rejected,
            vec![RejectedOverride {
                key: LANG_ENV,
                reason: "Unknown language: klingon".to_string(),
            }]
        );
        assert_eq!(
            rejected[0].to_string(),
            "ignoring VITALS_VOICE_LANG: Unknown language: klingon"
        );
    }
}
