use crate::types::input::AssessmentInput;
use crate::types::result::RiskResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AssessmentReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub input: &'a AssessmentInput,
    pub result: &'a RiskResult,
}

pub fn to_json(input: &AssessmentInput, result: &RiskResult) -> Result<String, serde_json::Error> {
    let report = AssessmentReport {
        generated_at: Utc::now(),
        input,
        result,
    };
    serde_json::to_string_pretty(&report)
}
