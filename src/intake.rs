use crate::cli::AssessCommand;
use crate::error::{Result, RiskError};
use crate::types::input::RawAssessment;
use std::path::Path;

/// Collects the raw answers for `assess`, either from an input document or
/// from the individual flags.
pub fn collect(cmd: &AssessCommand) -> Result<RawAssessment> {
    match &cmd.input {
        Some(path) => read_document(path),
        None => from_flags(cmd),
    }
}

/// Reads a JSON document when the extension is `.json`, TOML otherwise.
pub fn read_document(path: &Path) -> Result<RawAssessment> {
    if !path.exists() {
        return Err(RiskError::InvalidInput(format!(
            "input file does not exist: {}",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        toml::from_str(&content).map_err(|e| e.to_string())
    };
    let raw = parsed
        .map_err(|e| RiskError::InvalidInput(format!("{}: {}", path.display(), e)))?;
    tracing::info!(path = %path.display(), json = is_json, "read input document");
    Ok(raw)
}

fn from_flags(cmd: &AssessCommand) -> Result<RawAssessment> {
    Ok(RawAssessment {
        age: required(cmd.age, "--age")?,
        gender: required(cmd.gender, "--gender")?,
        bmi: required(cmd.bmi, "--bmi")?,
        waist_circumference: required(cmd.waist, "--waist")?,
        family_history: cmd.family_history,
        physical_activity: cmd.activity.unwrap_or_default(),
        hypertension: cmd.hypertension,
        diet: cmd.diet.unwrap_or_default(),
    })
}

fn required<T>(value: Option<T>, flag: &str) -> Result<T> {
    value.ok_or_else(|| RiskError::InvalidInput(format!("missing {flag}")))
}
