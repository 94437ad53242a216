use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("strength threshold must be <= 100, got {0}")]
    InvalidStrengthThreshold(u32),

    #[error("improvement threshold must be <= 100, got {0}")]
    InvalidImprovementThreshold(u32),

    #[error("improvement threshold ({improvement}) must not exceed strength threshold ({strength})")]
    InvertedThresholds { strength: u32, improvement: u32 },

    #[error("unknown learning efficiency mode: {0}")]
    UnknownEfficiencyMode(String),
}

/// How the secondary "learning efficiency" score is derived from accuracy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningEfficiencyMode {
    /// `accuracy * 0.9 + 5`, reproducible across runs.
    #[default]
    Deterministic,
    /// `accuracy * 0.9 + U[0, 10)`.
    Jittered,
}

impl std::str::FromStr for LearningEfficiencyMode {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deterministic" => Ok(Self::Deterministic),
            "jittered" => Ok(Self::Jittered),
            other => Err(SettingsError::UnknownEfficiencyMode(other.to_owned())),
        }
    }
}

/// Scoring configuration for an assessment run.
///
/// Deserialization goes through [`AssessmentSettings::new`], so stored settings
/// are held to the same threshold rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SettingsRecord")]
pub struct AssessmentSettings {
    strength_threshold: u32,
    improvement_threshold: u32,
    efficiency: LearningEfficiencyMode,
}

#[derive(Deserialize)]
struct SettingsRecord {
    strength_threshold: u32,
    improvement_threshold: u32,
    #[serde(default)]
    efficiency: LearningEfficiencyMode,
}

impl TryFrom<SettingsRecord> for AssessmentSettings {
    type Error = SettingsError;

    fn try_from(record: SettingsRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.strength_threshold,
            record.improvement_threshold,
            record.efficiency,
        )
    }
}

impl Default for AssessmentSettings {
    /// Categories at 75% or above are strengths, below 50% need improvement.
    fn default() -> Self {
        Self {
            strength_threshold: 75,
            improvement_threshold: 50,
            efficiency: LearningEfficiencyMode::Deterministic,
        }
    }
}

impl AssessmentSettings {
    /// # Errors
    ///
    /// Returns `SettingsError` if a threshold exceeds 100 or the improvement
    /// threshold is above the strength threshold.
    pub fn new(
        strength_threshold: u32,
        improvement_threshold: u32,
        efficiency: LearningEfficiencyMode,
    ) -> Result<Self, SettingsError> {
        if strength_threshold > 100 {
            return Err(SettingsError::InvalidStrengthThreshold(strength_threshold));
        }
        if improvement_threshold > 100 {
            return Err(SettingsError::InvalidImprovementThreshold(
                improvement_threshold,
            ));
        }
        if improvement_threshold > strength_threshold {
            return Err(SettingsError::InvertedThresholds {
                strength: strength_threshold,
                improvement: improvement_threshold,
            });
        }

        Ok(Self {
            strength_threshold,
            improvement_threshold,
            efficiency,
        })
    }

    #[must_use]
    pub fn with_efficiency(mut self, efficiency: LearningEfficiencyMode) -> Self {
        self.efficiency = efficiency;
        self
    }

    #[must_use]
    pub fn strength_threshold(&self) -> u32 {
        self.strength_threshold
    }

    #[must_use]
    pub fn improvement_threshold(&self) -> u32 {
        self.improvement_threshold
    }

    #[must_use]
    pub fn efficiency(&self) -> LearningEfficiencyMode {
        self.efficiency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_75_and_50() {
        let settings = AssessmentSettings::default();
        assert_eq!(settings.strength_threshold(), 75);
        assert_eq!(settings.improvement_threshold(), 50);
        assert_eq!(settings.efficiency(), LearningEfficiencyMode::Deterministic);
    }

    #[test]
    fn rejects_thresholds_above_100() {
        assert_eq!(
            AssessmentSettings::new(101, 50, LearningEfficiencyMode::Deterministic).unwrap_err(),
            SettingsError::InvalidStrengthThreshold(101)
        );
        assert_eq!(
            AssessmentSettings::new(100, 120, LearningEfficiencyMode::Deterministic).unwrap_err(),
            SettingsError::InvalidImprovementThreshold(120)
        );
    }

    #[test]
    fn rejects_inverted_thresholds() {
        assert!(matches!(
            AssessmentSettings::new(40, 60, LearningEfficiencyMode::Jittered),
            Err(SettingsError::InvertedThresholds { .. })
        ));
    }

    #[test]
    fn deserializing_validates_thresholds() {
        let settings: AssessmentSettings = serde_json::from_str(
            r#"{"strength_threshold": 80, "improvement_threshold": 40, "efficiency": "jittered"}"#,
        )
        .unwrap();
        assert_eq!(
            settings,
            AssessmentSettings::new(80, 40, LearningEfficiencyMode::Jittered).unwrap()
        );

        let inverted = serde_json::from_str::<AssessmentSettings>(
            r#"{"strength_threshold": 40, "improvement_threshold": 60}"#,
        );
        assert!(inverted.is_err());
    }

    #[test]
    fn serialized_settings_load_back() {
        let settings = AssessmentSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(serde_json::from_str::<AssessmentSettings>(&json).unwrap(), settings);
    }

    #[test]
    fn parses_efficiency_mode() {
        assert_eq!(
            " Jittered ".parse::<LearningEfficiencyMode>().unwrap(),
            LearningEfficiencyMode::Jittered
        );
        assert!("random".parse::<LearningEfficiencyMode>().is_err());
    }
}
