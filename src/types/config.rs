use crate::error::RiskError;
use crate::report::OutputFormat;
use crate::types::input::RangePolicy;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiskConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub out_of_range: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<String>,
    #[serde(default)]
    pub breakdown: bool,
}

impl RiskConfig {
    pub fn range_policy(&self) -> RangePolicy {
        self.input
            .as_ref()
            .and_then(|input| input.out_of_range.as_deref())
            .and_then(RangePolicy::from_name)
            .unwrap_or_default()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|output| output.format.as_deref())
            .and_then(OutputFormat::from_name)
            .unwrap_or_default()
    }

    pub fn breakdown(&self) -> bool {
        self.output
            .as_ref()
            .map(|output| output.breakdown)
            .unwrap_or(false)
    }

    pub fn validate(&self) -> Result<(), RiskError> {
        if let Some(policy) = self
            .input
            .as_ref()
            .and_then(|input| input.out_of_range.as_deref())
        {
            if RangePolicy::from_name(policy).is_none() {
                return Err(RiskError::ConfigParse(format!(
                    "unsupported input.out_of_range: {policy} (expected reject or clamp)"
                )));
            }
        }

        if let Some(format) = self
            .output
            .as_ref()
            .and_then(|output| output.format.as_deref())
        {
            if OutputFormat::from_name(format).is_none() {
                return Err(RiskError::ConfigParse(format!(
                    "unsupported output.format: {format} (expected text, md or json)"
                )));
            }
        }

        Ok(())
    }
}
