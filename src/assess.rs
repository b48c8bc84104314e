use crate::models::{
    AlcoholFrequency, AnswerSet, CigarettesPerDay, RiskBand, ScoreResult, SocialSupport,
    StressLevel, YesNo,
};

/// Additive scoring rule over the six answers. The point values and the
/// band thresholds are product constants carried over from the original
/// questionnaire, not tunables.
pub fn score(answers: &AnswerSet) -> ScoreResult {
    let mut score = 0u32;

    score += match answers.alcohol_frequency {
        AlcoholFrequency::Daily => 3,
        AlcoholFrequency::Weekly => 2,
        AlcoholFrequency::Occasionally => 1,
        AlcoholFrequency::Other => 0,
    };

    score += match answers.withdrawal_symptoms {
        YesNo::Yes => 2,
        YesNo::Other => 0,
    };

    score += match answers.cigarettes_per_day {
        CigarettesPerDay::MoreThanTen => 3,
        CigarettesPerDay::SixToTen => 2,
        CigarettesPerDay::OneToFive => 1,
        CigarettesPerDay::Other => 0,
    };

    score += match answers.stress_level {
        StressLevel::High => 2,
        StressLevel::Moderate => 1,
        StressLevel::Other => 0,
    };

    score += match answers.sleep_trouble {
        YesNo::Yes => 1,
        YesNo::Other => 0,
    };

    score += match answers.social_support {
        SocialSupport::NoSupport => 2,
        SocialSupport::SomeSupport => 1,
        SocialSupport::Other => 0,
    };

    let band = classify(score);
    ScoreResult {
        score,
        band,
        message: band.message().to_string(),
    }
}

pub fn classify(score: u32) -> RiskBand {
    match score {
        0..=3 => RiskBand::Low,
        4..=7 => RiskBand::Moderate,
        _ => RiskBand::High,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(raw: [Option<&str>; 6]) -> AnswerSet {
        AnswerSet::from_raw(raw[0], raw[1], raw[2], raw[3], raw[4], raw[5])
    }

    #[test]
    fn lowest_answers_score_zero_and_low() {
        let result = score(&AnswerSet::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.band, RiskBand::Low);

        let unknowns = answers([Some("unknown"); 6]);
        let result = score(&unknowns);
        assert_eq!(result.score, 0);
        assert_eq!(result.band, RiskBand::Low);
    }

    #[test]
    fn worst_answers_score_thirteen_and_high() {
        let result = score(&answers([
            Some("Daily"),
            Some("Yes"),
            Some("More than 10"),
            Some("High"),
            Some("Yes"),
            Some("No Support"),
        ]));
        assert_eq!(result.score, 13);
        assert_eq!(result.band, RiskBand::High);
        assert_eq!(result.message, RiskBand::High.message());
    }

    #[test]
    fn mixed_answers_score_five_and_moderate() {
        let result = score(&answers([
            Some("Weekly"),
            Some("Sometimes"),
            Some("1-5"),
            Some("Moderate"),
            None,
            Some("Some Support"),
        ]));
        assert_eq!(result.score, 5);
        assert_eq!(result.band, RiskBand::Moderate);
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(classify(0), RiskBand::Low);
        assert_eq!(classify(3), RiskBand::Low);
        assert_eq!(classify(4), RiskBand::Moderate);
        assert_eq!(classify(7), RiskBand::Moderate);
        assert_eq!(classify(8), RiskBand::High);
        assert_eq!(classify(13), RiskBand::High);
    }

    #[test]
    fn boundary_answer_sets_land_in_the_right_band() {
        // exactly 3
        let low = score(&answers([Some("Daily"), None, None, None, None, None]));
        assert_eq!(low.score, 3);
        assert_eq!(low.band, RiskBand::Low);

        // exactly 4
        let moderate = score(&answers([
            Some("Daily"),
            None,
            None,
            None,
            Some("Yes"),
            None,
        ]));
        assert_eq!(moderate.score, 4);
        assert_eq!(moderate.band, RiskBand::Moderate);

        // exactly 7
        let upper_moderate = score(&answers([
            Some("Weekly"),
            Some("Yes"),
            Some("1-5"),
            Some("Moderate"),
            Some("Yes"),
            None,
        ]));
        assert_eq!(upper_moderate.score, 7);
        assert_eq!(upper_moderate.band, RiskBand::Moderate);

        // exactly 8
        let high = score(&answers([
            Some("Daily"),
            Some("Yes"),
            Some("1-5"),
            Some("Moderate"),
            Some("Yes"),
            None,
        ]));
        assert_eq!(high.score, 8);
        assert_eq!(high.band, RiskBand::High);
    }

    #[test]
    fn score_is_total_over_listed_and_unknown_values() {
        let alcohol = [Some("Daily"), Some("Weekly"), Some("Occasionally"), Some("unknown"), None];
        let yes_no = [Some("Yes"), Some("unknown"), None];
        let cigarettes = [Some("More than 10"), Some("6-10"), Some("1-5"), Some("unknown"), None];
        let stress = [Some("High"), Some("Moderate"), Some("unknown"), None];
        let support = [Some("No Support"), Some("Some Support"), Some("unknown"), None];

        for a in alcohol {
            for w in yes_no {
                for c in cigarettes {
                    for st in stress {
                        for sl in yes_no {
                            for su in support {
                                let result = score(&answers([a, w, c, st, sl, su]));
                                assert!(result.score <= 13);
                                assert_eq!(result.band, classify(result.score));
                                assert!(!result.message.is_empty());
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let set = answers([
            Some("Occasionally"),
            Some("Yes"),
            Some("6-10"),
            Some("High"),
            None,
            Some("Some Support"),
        ]);
        assert_eq!(score(&set), score(&set));
    }
}
