use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::catalog::Catalog;
use super::content::select_content;
use super::domain::{Indicator, IntakeAnswers, Jdi8Score, Tier};
use super::layout::{layout, LayoutError, ReportStamp};
use super::render::{render, RenderError, RenderedReport};
use super::scoring::{score_breakdown, IndicatorContribution};
use super::store::ScoreStore;
use super::tier::classify;

/// Service composing scoring, content selection, layout, and rendering.
pub struct BlueprintService<S> {
    store: Arc<S>,
    catalog: Arc<Catalog>,
}

/// Options for a report download. An explicit score wins over the stored one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub score: Option<u64>,
}

impl ReportRequest {
    pub fn for_score(score: u64) -> Self {
        Self { score: Some(score) }
    }
}

/// Payload returned to scoring callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResponse {
    pub score: Jdi8Score,
    pub max_score: u8,
    pub tier: Tier,
    pub tier_label: &'static str,
    /// Same label as `tier_label`, under the key browser clients read.
    pub risk_reduction: &'static str,
    pub details: Vec<String>,
    pub components: Vec<ComponentView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentView {
    pub indicator: Indicator,
    pub high_intake: bool,
    pub points: u8,
    pub detail: String,
}

impl From<&IndicatorContribution> for ComponentView {
    fn from(value: &IndicatorContribution) -> Self {
        Self {
            indicator: value.indicator,
            high_intake: value.high_intake,
            points: value.points,
            detail: value.detail(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report layout failed: {0}")]
    Layout(#[from] LayoutError),
    #[error("report rendering failed: {0}")]
    Render(#[from] RenderError),
}

impl<S> BlueprintService<S>
where
    S: ScoreStore + 'static,
{
    pub fn new(store: Arc<S>, catalog: Catalog) -> Self {
        Self {
            store,
            catalog: Arc::new(catalog),
        }
    }

    pub fn latest_score(&self) -> Jdi8Score {
        self.store.latest()
    }

    /// Scores the answers and records the result as the latest score.
    pub fn score(&self, answers: &IntakeAnswers) -> ScoreResponse {
        let card = score_breakdown(answers);
        self.store.record(card.score);

        for component in &card.components {
            debug!(detail = %component.detail(), "indicator scored");
        }
        info!(score = card.score.value(), tier = card.tier.label(), "jdi8 score computed");

        ScoreResponse {
            score: card.score,
            max_score: Jdi8Score::MAX,
            tier: card.tier,
            tier_label: card.tier.label(),
            risk_reduction: card.tier.label(),
            details: card
                .components
                .iter()
                .map(IndicatorContribution::detail)
                .collect(),
            components: card.components.iter().map(ComponentView::from).collect(),
        }
    }

    pub fn report(&self, request: ReportRequest) -> Result<RenderedReport, ReportError> {
        self.report_at(request, ReportStamp::now())
    }

    /// Builds the report with a caller-supplied stamp.
    pub fn report_at(
        &self,
        request: ReportRequest,
        stamp: ReportStamp,
    ) -> Result<RenderedReport, ReportError> {
        let score = match request.score {
            Some(value) => Jdi8Score::saturating(value),
            None => self.store.latest(),
        };
        let tier = classify(score);
        let content = select_content(score, tier, &self.catalog);
        let document = layout(score, tier, &content, &stamp)?;
        let report = render(&document)?;

        info!(
            score = score.value(),
            tier = tier.label(),
            report_id = %stamp.report_id,
            bytes = report.bytes.len(),
            "blueprint report rendered"
        );
        Ok(report)
    }
}
