use crate::types::input::{ActivityLevel, AssessmentInput, Diet, Gender};
use crate::types::result::{Factor, FactorContribution, RiskBand, RiskResult, MAX_SCORE};

/// Age tiers, highest first. The first tier whose lower bound is met wins.
const AGE_TIERS: [(u32, u8); 2] = [(45, 2), (30, 1)];

/// BMI tiers using South Asian cutoffs, highest first.
const BMI_TIERS: [(f64, u8); 3] = [(30.0, 3), (27.0, 2), (23.0, 1)];

const MALE_WAIST_LIMIT_CM: u32 = 90;
const FEMALE_WAIST_LIMIT_CM: u32 = 80;
const WAIST_POINTS: u8 = 2;

const MALE_POINTS: u8 = 1;
const FAMILY_HISTORY_POINTS: u8 = 2;
const HYPERTENSION_POINTS: u8 = 2;
const SEDENTARY_POINTS: u8 = 2;
const MODERATE_ACTIVITY_POINTS: u8 = 1;
const UNBALANCED_DIET_POINTS: u8 = 1;

fn tier<T: PartialOrd + Copy>(value: T, tiers: &[(T, u8)]) -> Option<(T, u8)> {
    tiers.iter().copied().find(|(min, _)| value >= *min)
}

fn waist_limit_cm(gender: Gender) -> u32 {
    match gender {
        Gender::Male => MALE_WAIST_LIMIT_CM,
        Gender::Female => FEMALE_WAIST_LIMIT_CM,
    }
}

/// Scores a validated assessment. Every factor is independent and additive,
/// so the breakdown order only affects presentation.
pub fn compute_risk(input: &AssessmentInput) -> RiskResult {
    let mut breakdown = Vec::new();

    if let Some((min, points)) = tier(input.age(), &AGE_TIERS) {
        breakdown.push(FactorContribution::new(
            Factor::Age,
            points,
            format!("age {} is {min} or older", input.age()),
        ));
    }

    if input.gender() == Gender::Male {
        breakdown.push(FactorContribution::new(Factor::Gender, MALE_POINTS, "male"));
    }

    if let Some((min, points)) = tier(input.bmi(), &BMI_TIERS) {
        breakdown.push(FactorContribution::new(
            Factor::Bmi,
            points,
            format!("BMI {:.1} is {min:.0} or above", input.bmi()),
        ));
    }

    let waist_limit = waist_limit_cm(input.gender());
    if input.waist_circumference() > waist_limit {
        breakdown.push(FactorContribution::new(
            Factor::Waist,
            WAIST_POINTS,
            format!(
                "waist {} cm exceeds {waist_limit} cm for {}",
                input.waist_circumference(),
                input.gender()
            ),
        ));
    }

    if input.family_history() {
        breakdown.push(FactorContribution::new(
            Factor::FamilyHistory,
            FAMILY_HISTORY_POINTS,
            "family history of diabetes",
        ));
    }

    match input.physical_activity() {
        ActivityLevel::Sedentary => breakdown.push(FactorContribution::new(
            Factor::PhysicalActivity,
            SEDENTARY_POINTS,
            "sedentary lifestyle",
        )),
        ActivityLevel::Moderate => breakdown.push(FactorContribution::new(
            Factor::PhysicalActivity,
            MODERATE_ACTIVITY_POINTS,
            "moderate physical activity",
        )),
        ActivityLevel::Active => {}
    }

    if input.hypertension() {
        breakdown.push(FactorContribution::new(
            Factor::Hypertension,
            HYPERTENSION_POINTS,
            "high blood pressure",
        ));
    }

    if matches!(input.diet(), Diet::HighSugar | Diet::HighCarbFat) {
        breakdown.push(FactorContribution::new(
            Factor::Diet,
            UNBALANCED_DIET_POINTS,
            format!("{} diet", input.diet()),
        ));
    }

    let result = RiskResult::from_breakdown(breakdown);
    tracing::debug!(
        score = result.score,
        band = %result.band,
        factors = result.breakdown.len(),
        "risk computed"
    );
    result
}

/// One line of the published scoring table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLine {
    pub factor: Factor,
    pub condition: String,
    pub points: u8,
}

impl RuleLine {
    fn new(factor: Factor, condition: impl Into<String>, points: u8) -> Self {
        Self {
            factor,
            condition: condition.into(),
            points,
        }
    }
}

/// The scoring table, generated from the same constants [`compute_risk`] uses.
pub fn rule_table() -> Vec<RuleLine> {
    let mut rules = Vec::new();

    let mut upper: Option<u32> = None;
    for (min, points) in AGE_TIERS {
        let condition = match upper {
            None => format!(">= {min}"),
            Some(next) => format!("{min}-{}", next - 1),
        };
        rules.push(RuleLine::new(Factor::Age, condition, points));
        upper = Some(min);
    }

    rules.push(RuleLine::new(Factor::Gender, "male", MALE_POINTS));

    let mut upper: Option<f64> = None;
    for (min, points) in BMI_TIERS {
        let condition = match upper {
            None => format!(">= {min:.1}"),
            Some(next) => format!("{min:.1}-{:.1}", next - 0.1),
        };
        rules.push(RuleLine::new(Factor::Bmi, condition, points));
        upper = Some(min);
    }

    rules.push(RuleLine::new(
        Factor::Waist,
        format!("male > {MALE_WAIST_LIMIT_CM} cm or female > {FEMALE_WAIST_LIMIT_CM} cm"),
        WAIST_POINTS,
    ));
    rules.push(RuleLine::new(
        Factor::FamilyHistory,
        "yes",
        FAMILY_HISTORY_POINTS,
    ));
    rules.push(RuleLine::new(
        Factor::PhysicalActivity,
        "sedentary",
        SEDENTARY_POINTS,
    ));
    rules.push(RuleLine::new(
        Factor::PhysicalActivity,
        "moderate",
        MODERATE_ACTIVITY_POINTS,
    ));
    rules.push(RuleLine::new(
        Factor::Hypertension,
        "yes",
        HYPERTENSION_POINTS,
    ));
    rules.push(RuleLine::new(
        Factor::Diet,
        "high-sugar or high-carb-fat",
        UNBALANCED_DIET_POINTS,
    ));

    rules
}

/// Score ranges per band, for display alongside [`rule_table`].
pub fn band_table() -> [(RiskBand, u8, u8); 3] {
    [
        (RiskBand::Low, 0, RiskBand::LOW_MAX),
        (RiskBand::Moderate, RiskBand::LOW_MAX + 1, RiskBand::MODERATE_MAX),
        (RiskBand::High, RiskBand::MODERATE_MAX + 1, MAX_SCORE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::input::{RangePolicy, RawAssessment};

    #[allow(clippy::too_many_arguments)]
    fn assess(
        age: i64,
        gender: Gender,
        bmi: f64,
        waist: i64,
        family_history: bool,
        activity: ActivityLevel,
        hypertension: bool,
        diet: Diet,
    ) -> AssessmentInput {
        RawAssessment {
            age,
            gender,
            bmi,
            waist_circumference: waist,
            family_history,
            physical_activity: activity,
            hypertension,
            diet,
        }
        .validate(RangePolicy::Reject)
        .expect("test input should be in range")
    }

    fn baseline(gender: Gender) -> RawAssessment {
        RawAssessment {
            age: 25,
            gender,
            bmi: 21.0,
            waist_circumference: 70,
            family_history: false,
            physical_activity: ActivityLevel::Active,
            hypertension: false,
            diet: Diet::Balanced,
        }
    }

    fn score_of(raw: &RawAssessment) -> u8 {
        let input = raw
            .validate(RangePolicy::Reject)
            .expect("test input should be in range");
        compute_risk(&input).score
    }

    #[test]
    fn every_factor_present_scores_maximum() {
        let input = assess(
            50,
            Gender::Male,
            31.0,
            95,
            true,
            ActivityLevel::Sedentary,
            true,
            Diet::HighSugar,
        );
        let result = compute_risk(&input);
        assert_eq!(result.score, 15);
        assert_eq!(result.band, RiskBand::High);
        assert_eq!(result.advice, RiskBand::High.advice());
        assert_eq!(result.breakdown.len(), 8);
    }

    #[test]
    fn no_factors_present_scores_zero() {
        let input = assess(
            25,
            Gender::Female,
            21.0,
            70,
            false,
            ActivityLevel::Active,
            false,
            Diet::Balanced,
        );
        let result = compute_risk(&input);
        assert_eq!(result.score, 0);
        assert_eq!(result.band, RiskBand::Low);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn mixed_profile_lands_in_moderate_band() {
        let input = assess(
            35,
            Gender::Male,
            24.0,
            85,
            false,
            ActivityLevel::Moderate,
            false,
            Diet::Balanced,
        );
        let result = compute_risk(&input);
        assert_eq!(result.score, 4);
        assert_eq!(result.band, RiskBand::Moderate);

        let factors = result
            .breakdown
            .iter()
            .map(|contribution| (contribution.factor, contribution.points))
            .collect::<Vec<_>>();
        assert_eq!(
            factors,
            vec![
                (Factor::Age, 1),
                (Factor::Gender, 1),
                (Factor::Bmi, 1),
                (Factor::PhysicalActivity, 1),
            ]
        );
    }

    #[test]
    fn age_tiers_switch_at_thirty_and_forty_five() {
        let mut raw = baseline(Gender::Female);
        for (age, expected) in [(29, 0), (30, 1), (44, 1), (45, 2), (100, 2)] {
            raw.age = age;
            assert_eq!(score_of(&raw), expected, "age {age}");
        }
    }

    #[test]
    fn bmi_tiers_use_lower_bounds() {
        let mut raw = baseline(Gender::Female);
        for (bmi, expected) in [
            (22.9, 0),
            (23.0, 1),
            (26.95, 1),
            (27.0, 2),
            (29.9, 2),
            (29.99, 2),
            (30.0, 3),
            (60.0, 3),
        ] {
            raw.bmi = bmi;
            assert_eq!(score_of(&raw), expected, "bmi {bmi}");
        }
    }

    #[test]
    fn waist_limit_depends_on_gender() {
        let mut male = baseline(Gender::Male);
        male.waist_circumference = 90;
        assert_eq!(score_of(&male), 1);
        male.waist_circumference = 91;
        assert_eq!(score_of(&male), 3);

        let mut female = baseline(Gender::Female);
        female.waist_circumference = 80;
        assert_eq!(score_of(&female), 0);
        female.waist_circumference = 81;
        assert_eq!(score_of(&female), 2);
    }

    #[test]
    fn both_unbalanced_diets_score_one_point() {
        let mut raw = baseline(Gender::Female);
        for diet in [Diet::HighSugar, Diet::HighCarbFat] {
            raw.diet = diet;
            assert_eq!(score_of(&raw), 1, "{diet}");
        }
    }

    #[test]
    fn score_stays_within_bounds_and_matches_breakdown() {
        for gender in [Gender::Male, Gender::Female] {
            for activity in [
                ActivityLevel::Active,
                ActivityLevel::Moderate,
                ActivityLevel::Sedentary,
            ] {
                for diet in [Diet::Balanced, Diet::HighSugar, Diet::HighCarbFat] {
                    for flags in 0..4u8 {
                        for age in (10..=100).step_by(5) {
                            for bmi in [10.0, 22.9, 23.0, 26.9, 27.0, 29.9, 30.0, 60.0] {
                                for waist in [40, 80, 81, 90, 91, 150] {
                                    let input = assess(
                                        age,
                                        gender,
                                        bmi,
                                        waist,
                                        flags & 1 != 0,
                                        activity,
                                        flags & 2 != 0,
                                        diet,
                                    );
                                    let result = compute_risk(&input);
                                    assert!(result.score <= MAX_SCORE);
                                    let total: u8 =
                                        result.breakdown.iter().map(|c| c.points).sum();
                                    assert_eq!(total, result.score);
                                    assert_eq!(result.band, RiskBand::from_score(result.score));
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn score_is_monotonic_in_age_bmi_and_waist() {
        for gender in [Gender::Male, Gender::Female] {
            let mut raw = baseline(gender);
            let mut previous = 0;
            for age in 10..=100 {
                raw.age = age;
                let score = score_of(&raw);
                assert!(score >= previous, "age {age}");
                previous = score;
            }

            let mut raw = baseline(gender);
            let mut previous = 0;
            for step in 0..500 {
                raw.bmi = 10.0 + f64::from(step) * 0.1;
                let score = score_of(&raw);
                assert!(score >= previous, "bmi {}", raw.bmi);
                previous = score;
            }

            let mut raw = baseline(gender);
            let mut previous = 0;
            for waist in 40..=150 {
                raw.waist_circumference = waist;
                let score = score_of(&raw);
                assert!(score >= previous, "waist {waist}");
                previous = score;
            }
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let input = assess(
            61,
            Gender::Female,
            28.3,
            84,
            true,
            ActivityLevel::Moderate,
            false,
            Diet::HighCarbFat,
        );
        assert_eq!(compute_risk(&input), compute_risk(&input));
    }

    #[test]
    fn rule_table_lists_every_condition() {
        let rules = rule_table();
        assert_eq!(rules.len(), 12);
        let conditions = rules
            .iter()
            .map(|rule| (rule.factor, rule.condition.as_str(), rule.points))
            .collect::<Vec<_>>();
        assert!(conditions.contains(&(Factor::Age, ">= 45", 2)));
        assert!(conditions.contains(&(Factor::Age, "30-44", 1)));
        assert!(conditions.contains(&(Factor::Bmi, ">= 30.0", 3)));
        assert!(conditions.contains(&(Factor::Bmi, "27.0-29.9", 2)));
        assert!(conditions.contains(&(Factor::Bmi, "23.0-26.9", 1)));
    }

    #[test]
    fn band_table_covers_full_score_range() {
        let bands = band_table();
        assert_eq!(bands[0], (RiskBand::Low, 0, 3));
        assert_eq!(bands[1], (RiskBand::Moderate, 4, 7));
        assert_eq!(bands[2], (RiskBand::High, 8, 15));
    }
}
