use serde::Serialize;
use std::fmt;

pub const MAX_SCORE: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    /// Highest score still considered low risk.
    pub const LOW_MAX: u8 = 3;
    /// Highest score still considered moderate risk.
    pub const MODERATE_MAX: u8 = 7;

    pub fn from_score(score: u8) -> Self {
        if score <= Self::LOW_MAX {
            RiskBand::Low
        } else if score <= Self::MODERATE_MAX {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "Low Risk",
            RiskBand::Moderate => "Moderate Risk",
            RiskBand::High => "High Risk",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            RiskBand::Low => "Maintain a healthy lifestyle!",
            RiskBand::Moderate => "Consider a screening test (Fasting Blood Sugar).",
            RiskBand::High => "Visit a doctor for screening and counseling!",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            RiskBand::Low => "Continue regular physical activity and a balanced diet.",
            RiskBand::Moderate => {
                "Increase activity, reduce refined sugar intake, and monitor blood pressure."
            }
            RiskBand::High => {
                "Schedule a blood glucose test soon and adopt a low-carb, high-fiber diet."
            }
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Age,
    Gender,
    Bmi,
    Waist,
    FamilyHistory,
    PhysicalActivity,
    Hypertension,
    Diet,
}

impl Factor {
    pub fn name(self) -> &'static str {
        match self {
            Factor::Age => "age",
            Factor::Gender => "gender",
            Factor::Bmi => "bmi",
            Factor::Waist => "waist",
            Factor::FamilyHistory => "family_history",
            Factor::PhysicalActivity => "physical_activity",
            Factor::Hypertension => "hypertension",
            Factor::Diet => "diet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorContribution {
    pub factor: Factor,
    pub points: u8,
    pub reason: String,
}

impl FactorContribution {
    pub fn new(factor: Factor, points: u8, reason: impl Into<String>) -> Self {
        Self {
            factor,
            points,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskResult {
    pub score: u8,
    pub max_score: u8,
    pub band: RiskBand,
    pub advice: &'static str,
    pub breakdown: Vec<FactorContribution>,
}

impl RiskResult {
    /// Totals the contributions and derives band and advice from the sum.
    pub fn from_breakdown(breakdown: Vec<FactorContribution>) -> Self {
        let score = breakdown.iter().map(|contribution| contribution.points).sum();
        let band = RiskBand::from_score(score);
        Self {
            score,
            max_score: MAX_SCORE,
            band,
            advice: band.advice(),
            breakdown,
        }
    }
}
