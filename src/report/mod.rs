pub mod json;
pub mod md;
pub mod text;

use crate::error::RiskError;
use crate::types::input::AssessmentInput;
use crate::types::result::RiskResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Md,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "md" => Some(OutputFormat::Md),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Renders a result. `breakdown` controls the per-factor section of the text
/// and Markdown formats; JSON always carries it.
pub fn render(
    input: &AssessmentInput,
    result: &RiskResult,
    format: OutputFormat,
    breakdown: bool,
) -> Result<String, RiskError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(result, breakdown)),
        OutputFormat::Md => Ok(md::to_markdown(input, result, breakdown)),
        OutputFormat::Json => json::to_json(input, result).map_err(RiskError::Json),
    }
}
