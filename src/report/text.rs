use crate::types::result::RiskResult;

pub fn to_text(result: &RiskResult, breakdown: bool) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}: {}\n", result.band.label(), result.band.headline()));
    output.push_str(&format!(
        "Your Risk Score: {}/{}\n",
        result.score, result.max_score
    ));
    output.push_str(&format!("Recommendation: {}", result.advice));

    if breakdown {
        output.push_str("\n\nBreakdown:");
        if result.breakdown.is_empty() {
            output.push_str("\n  none");
        }
        for contribution in &result.breakdown {
            output.push_str(&format!(
                "\n  +{} {}: {}",
                contribution.points,
                contribution.factor.name(),
                contribution.reason
            ));
        }
    }

    output
}
