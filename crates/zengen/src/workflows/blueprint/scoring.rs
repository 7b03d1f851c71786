use super::domain::{Indicator, IndicatorPolarity, IntakeAnswers, Jdi8Score, Tier};
use super::tier::classify;
use serde::Serialize;

/// Single indicator's share of the score, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorContribution {
    pub indicator: Indicator,
    pub high_intake: bool,
    pub points: u8,
}

impl IndicatorContribution {
    pub fn detail(&self) -> String {
        let intake = if self.high_intake {
            "High Intake"
        } else {
            "Low Intake"
        };
        if self.points > 0 {
            format!("{}: +{} ({intake})", self.indicator.key(), self.points)
        } else {
            format!("{}: 0 ({intake})", self.indicator.key())
        }
    }
}

/// Score together with its tier and per-indicator breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub score: Jdi8Score,
    pub tier: Tier,
    pub components: Vec<IndicatorContribution>,
}

pub fn compute_score(answers: &IntakeAnswers) -> Jdi8Score {
    let points = Indicator::ordered()
        .into_iter()
        .map(|indicator| contribution(answers, indicator).points)
        .sum();
    Jdi8Score::from_points(points)
}

pub fn score_breakdown(answers: &IntakeAnswers) -> ScoreCard {
    let components: Vec<IndicatorContribution> = Indicator::ordered()
        .into_iter()
        .map(|indicator| contribution(answers, indicator))
        .collect();
    let score = Jdi8Score::from_points(components.iter().map(|component| component.points).sum());

    ScoreCard {
        score,
        tier: classify(score),
        components,
    }
}

fn contribution(answers: &IntakeAnswers, indicator: Indicator) -> IndicatorContribution {
    let high_intake = answers.is_high(indicator);
    let favourable = match indicator.polarity() {
        IndicatorPolarity::Positive => high_intake,
        IndicatorPolarity::Inverse => !high_intake,
    };

    IndicatorContribution {
        indicator,
        high_intake,
        points: u8::from(favourable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(high: &[Indicator]) -> IntakeAnswers {
        high.iter()
            .fold(IntakeAnswers::new(), |answers, indicator| {
                answers.with(*indicator, true)
            })
    }

    #[test]
    fn perfect_answers_score_eight() {
        let mut perfect = answers(&Indicator::ordered());
        perfect.set(Indicator::BeefPork, false);
        assert_eq!(compute_score(&perfect).value(), 8);
    }

    #[test]
    fn poorest_answers_score_zero() {
        let poorest = answers(&[Indicator::BeefPork]);
        assert_eq!(compute_score(&poorest).value(), 0);
    }

    #[test]
    fn empty_answers_still_credit_low_beef_pork() {
        assert_eq!(compute_score(&IntakeAnswers::default()).value(), 1);
    }

    #[test]
    fn every_answer_combination_stays_in_range() {
        for mask in 0u16..256 {
            let high: Vec<Indicator> = Indicator::ordered()
                .into_iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, indicator)| indicator)
                .collect();
            let score = compute_score(&answers(&high));
            assert!(score.value() <= Jdi8Score::MAX);

            let card = score_breakdown(&answers(&high));
            assert_eq!(card.score, score);
            assert!(card.components.iter().all(|component| component.points <= 1));
        }
    }

    #[test]
    fn breakdown_lists_all_indicators_with_details() {
        let card = score_breakdown(&answers(&[Indicator::Rice, Indicator::BeefPork]));
        assert_eq!(card.components.len(), 8);
        assert_eq!(card.score.value(), 1);
        assert_eq!(card.tier, Tier::Low);

        let details: Vec<String> = card.components.iter().map(|c| c.detail()).collect();
        assert_eq!(details[0], "rice: +1 (High Intake)");
        assert_eq!(details[1], "miso_soup: 0 (Low Intake)");
        assert_eq!(details[7], "beef_pork: 0 (High Intake)");

        let low_meat = score_breakdown(&IntakeAnswers::default());
        assert_eq!(low_meat.components[7].detail(), "beef_pork: +1 (Low Intake)");
    }
}
