use crate::error::{Result, RiskError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const AGE_RANGE: RangeInclusive<i64> = 10..=100;
pub const BMI_RANGE: RangeInclusive<f64> = 10.0..=60.0;
pub const WAIST_RANGE_CM: RangeInclusive<i64> = 40..=150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum ActivityLevel {
    #[default]
    Active,
    Moderate,
    Sedentary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Diet {
    #[default]
    Balanced,
    HighSugar,
    HighCarbFat,
}

/// Lowercases and folds spaces, underscores and slashes into dashes so the
/// form labels ("High carbs/fat") parse the same as `high-carbs-fat`.
fn normalize_label(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if matches!(c, ' ' | '_' | '/') { '-' } else { c })
        .collect()
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("unknown gender '{s}' (expected male or female)")),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "active" => Ok(ActivityLevel::Active),
            "moderate" => Ok(ActivityLevel::Moderate),
            "sedentary" => Ok(ActivityLevel::Sedentary),
            _ => Err(format!(
                "unknown activity level '{s}' (expected active, moderate or sedentary)"
            )),
        }
    }
}

impl FromStr for Diet {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "balanced" => Ok(Diet::Balanced),
            "high-sugar" => Ok(Diet::HighSugar),
            "high-carb-fat" | "high-carbs-fat" => Ok(Diet::HighCarbFat),
            _ => Err(format!(
                "unknown diet '{s}' (expected balanced, high-sugar or high-carb-fat)"
            )),
        }
    }
}

macro_rules! string_conversions {
    ($ty:ty) => {
        impl TryFrom<String> for $ty {
            type Error = String;

            fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

string_conversions!(Gender);
string_conversions!(ActivityLevel);
string_conversions!(Diet);

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "male",
            Gender::Female => "female",
        })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActivityLevel::Active => "active",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Sedentary => "sedentary",
        })
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Diet::Balanced => "balanced",
            Diet::HighSugar => "high-sugar",
            Diet::HighCarbFat => "high-carb-fat",
        })
    }
}

/// What the collection boundary does with numbers outside their declared range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangePolicy {
    #[default]
    Reject,
    Clamp,
}

impl RangePolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "reject" => Some(RangePolicy::Reject),
            "clamp" => Some(RangePolicy::Clamp),
            _ => None,
        }
    }
}

/// Fields exactly as collected from flags or an input document, before any
/// range checks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAssessment {
    pub age: i64,
    pub gender: Gender,
    pub bmi: f64,
    #[serde(alias = "waist")]
    pub waist_circumference: i64,
    #[serde(default)]
    pub family_history: bool,
    #[serde(default, alias = "activity")]
    pub physical_activity: ActivityLevel,
    #[serde(default)]
    pub hypertension: bool,
    #[serde(default)]
    pub diet: Diet,
}

impl RawAssessment {
    pub fn validate(&self, policy: RangePolicy) -> Result<AssessmentInput> {
        if !self.bmi.is_finite() {
            return Err(RiskError::InvalidInput(format!(
                "bmi must be a finite number (got {})",
                self.bmi
            )));
        }

        let age = enforce_range("age", self.age, &AGE_RANGE, policy)?;
        let bmi = enforce_range("bmi", self.bmi, &BMI_RANGE, policy)?;
        let waist = enforce_range(
            "waist_circumference",
            self.waist_circumference,
            &WAIST_RANGE_CM,
            policy,
        )?;

        // Both ranges sit well inside u32.
        Ok(AssessmentInput {
            age: age as u32,
            gender: self.gender,
            bmi,
            waist_circumference: waist as u32,
            family_history: self.family_history,
            physical_activity: self.physical_activity,
            hypertension: self.hypertension,
            diet: self.diet,
        })
    }
}

fn enforce_range<T>(
    field: &'static str,
    value: T,
    range: &RangeInclusive<T>,
    policy: RangePolicy,
) -> Result<T>
where
    T: PartialOrd + Copy + fmt::Display,
{
    if range.contains(&value) {
        return Ok(value);
    }
    match policy {
        RangePolicy::Reject => Err(RiskError::OutOfRange {
            field,
            value: value.to_string(),
            min: range.start().to_string(),
            max: range.end().to_string(),
        }),
        RangePolicy::Clamp => {
            let clamped = if value < *range.start() {
                *range.start()
            } else {
                *range.end()
            };
            tracing::warn!(field, %value, %clamped, "input out of range, clamped");
            Ok(clamped)
        }
    }
}

/// A range-valid set of screening answers. Only obtainable through
/// [`RawAssessment::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssessmentInput {
    age: u32,
    gender: Gender,
    bmi: f64,
    waist_circumference: u32,
    family_history: bool,
    physical_activity: ActivityLevel,
    hypertension: bool,
    diet: Diet,
}

impl AssessmentInput {
    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn waist_circumference(&self) -> u32 {
        self.waist_circumference
    }

    pub fn family_history(&self) -> bool {
        self.family_history
    }

    pub fn physical_activity(&self) -> ActivityLevel {
        self.physical_activity
    }

    pub fn hypertension(&self) -> bool {
        self.hypertension
    }

    pub fn diet(&self) -> Diet {
        self.diet
    }
}
