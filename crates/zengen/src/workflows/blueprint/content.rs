use super::catalog::Catalog;
use super::domain::{Jdi8Score, Tier};
use serde::Serialize;

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub const FOCUS_AREAS: [&str; 7] = [
    "Autophagy",
    "Microbiome",
    "Enzyme",
    "Recovery",
    "Omega-3",
    "Metabolism",
    "Rest",
];

/// Which of the three weekly protocols a score receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolIntensity {
    Foundation,
    Balanced,
    Optimize,
}

impl ProtocolIntensity {
    pub const fn for_score(score: Jdi8Score) -> Self {
        match score.value() {
            0..=3 => Self::Foundation,
            4..=6 => Self::Balanced,
            _ => Self::Optimize,
        }
    }

    pub const fn actions(self) -> [&'static str; 7] {
        match self {
            Self::Foundation => [
                "12:12 eating window. Start the day with Miso soup.",
                "Add one Natto or Pickle side dish to dinner.",
                "Add Nori or Wakame to one meal. [See Shopping List]",
                "Swap coffee for Ippodo Matcha. [See Shopping List]",
                "Replace one red-meat meal with grilled fish.",
                "30-minute brisk walk after lunch.",
                "Warm bath before bed. Lights out by 23:00.",
            ],
            Self::Balanced => [
                "16:8 Fasting. Break fast with Miso.",
                "Natto/Okra dinner. Feed the mucosa.",
                "Seaweed Salad. Activate Porphyranase. [See Shopping List]",
                "Start morning with 2g of Ippodo Matcha. [See Shopping List]",
                "Sashimi/Fish intake. Cognitive boost.",
                "High Intensity Interval Training.",
                "Hot Spring / Bath (HSP activation).",
            ],
            Self::Optimize => [
                "18:6 Fasting. Break fast with Miso and Natto.",
                "Fermented trio: Natto, Pickles, Miso. Rotate strains.",
                "Seaweed twice today. Vary Kombu, Nori and Wakame.",
                "Matcha before training for EGCG. [See Shopping List]",
                "Oily fish (Saba/Sanma) plus a Sashimi lunch.",
                "HIIT plus 20 minutes of zone-2 cardio.",
                "Onsen or sauna cycle (HSP activation).",
            ],
        }
    }
}

/// Which analysis narrative a score receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisVariant {
    Critical,
    Standard,
}

impl AnalysisVariant {
    pub const LOW_SCORE_CEILING: u8 = 4;

    pub const fn for_score(score: Jdi8Score) -> Self {
        if score.value() < Self::LOW_SCORE_CEILING {
            Self::Critical
        } else {
            Self::Standard
        }
    }

    pub fn lines(self) -> Vec<AnalysisLine> {
        match self {
            Self::Standard => vec![
                AnalysisLine::standard(
                    "\u{2022} Rice & Miso: High Intake. Excellent. Base of the JDI8 pyramid.",
                ),
                AnalysisLine::standard(
                    "\u{2022} Seaweed: Optimal. Activating gut microbiota diversity.",
                ),
                AnalysisLine::standard(
                    "\u{2022} Animal Protein: Moderate. Good balance for IGF-1 regulation.",
                ),
                AnalysisLine::standard("\u{2022} Green Tea: Daily. High EGCG levels detected."),
            ],
            Self::Critical => vec![
                AnalysisLine::standard(
                    "\u{2022} Rice & Miso: Intake is sub-optimal. Review foundational carbs.",
                ),
                AnalysisLine::standard(
                    "\u{2022} Green Tea: Levels are Critical. Boost EGCG immediately.",
                ),
                AnalysisLine::standard(
                    "\u{2022} Fish: Low Omega-3 detected. Inflammation risk elevated.",
                ),
                AnalysisLine::critical(
                    "CRITICAL: Your EGCG levels are low. Ippodo Matcha is top priority.",
                ),
                AnalysisLine::critical(
                    "LONGEVITY GAP: Precision cooking key. Zojirushi IH Cooker recommended.",
                ),
                AnalysisLine::critical(
                    "ESSENTIAL: Low fish intake. Highly recommend EPA/DHA supplements.",
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEmphasis {
    Standard,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisLine {
    pub text: &'static str,
    pub emphasis: LineEmphasis,
}

impl AnalysisLine {
    const fn standard(text: &'static str) -> Self {
        Self {
            text,
            emphasis: LineEmphasis::Standard,
        }
    }

    const fn critical(text: &'static str) -> Self {
        Self {
            text,
            emphasis: LineEmphasis::Critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolDay {
    pub day: &'static str,
    pub focus: &'static str,
    pub action: &'static str,
}

/// Every piece of narrative a report needs, resolved for one score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBundle {
    pub tier: Tier,
    pub intensity: ProtocolIntensity,
    pub protocol: [ProtocolDay; 7],
    pub analysis_variant: AnalysisVariant,
    pub analysis: Vec<AnalysisLine>,
    pub catalog: Catalog,
}

pub fn select_content(score: Jdi8Score, tier: Tier, catalog: &Catalog) -> ContentBundle {
    let intensity = ProtocolIntensity::for_score(score);
    let actions = intensity.actions();
    let protocol = std::array::from_fn(|index| ProtocolDay {
        day: WEEKDAYS[index],
        focus: FOCUS_AREAS[index],
        action: actions[index],
    });
    let analysis_variant = AnalysisVariant::for_score(score);

    ContentBundle {
        tier,
        intensity,
        protocol,
        analysis_variant,
        analysis: analysis_variant.lines(),
        catalog: catalog.clone(),
    }
}
