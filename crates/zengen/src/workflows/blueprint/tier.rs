use super::domain::{Jdi8Score, Tier};

pub const HIGH_TIER_FLOOR: u8 = 6;
pub const MODERATE_TIER_FLOOR: u8 = 3;

pub fn classify(score: Jdi8Score) -> Tier {
    match score.value() {
        value if value >= HIGH_TIER_FLOOR => Tier::High,
        value if value >= MODERATE_TIER_FLOOR => Tier::Moderate,
        _ => Tier::Low,
    }
}
