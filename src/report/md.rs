use crate::types::input::AssessmentInput;
use crate::types::result::RiskResult;

pub fn to_markdown(input: &AssessmentInput, result: &RiskResult, breakdown: bool) -> String {
    let mut output = String::new();
    output.push_str("# Diabetes Risk Assessment\n\n");
    output.push_str(&format!(
        "**{}**: {}\n\n",
        result.band.label(),
        result.band.headline()
    ));
    output.push_str(&format!(
        "- Risk score: {}/{}\n- Recommendation: {}\n\n",
        result.score, result.max_score, result.advice
    ));

    output.push_str("## Inputs\n\n");
    output.push_str(&format!(
        "- age: {}\n- gender: {}\n- bmi: {:.1}\n- waist: {} cm\n- family history: {}\n- physical activity: {}\n- hypertension: {}\n- diet: {}\n",
        input.age(),
        input.gender(),
        input.bmi(),
        input.waist_circumference(),
        yes_no(input.family_history()),
        input.physical_activity(),
        yes_no(input.hypertension()),
        input.diet()
    ));

    if breakdown {
        output.push_str("\n## Breakdown\n\n");
        if result.breakdown.is_empty() {
            output.push_str("- none\n");
        } else {
            output.push_str("| Factor | Points | Reason |\n|---|---|---|\n");
            for contribution in &result.breakdown {
                output.push_str(&format!(
                    "| {} | +{} | {} |\n",
                    contribution.factor.name(),
                    contribution.points,
                    contribution.reason
                ));
            }
        }
    }

    output
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
