//! JDI8 scoring and the two-page longevity blueprint report.
//!
//! Answers flow through [`scoring`] and [`tier`] into [`content`], are placed
//! by [`layout`] and serialized by [`render`]. [`service`] composes the
//! pipeline and [`router`] exposes it over HTTP.

pub mod catalog;
pub mod content;
pub mod domain;
pub mod layout;
pub mod render;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;
pub mod tier;

pub use catalog::{Catalog, CatalogItem, CatalogItemKey, CatalogSection};
pub use content::{
    select_content, AnalysisLine, AnalysisVariant, ContentBundle, LineEmphasis, ProtocolDay,
    ProtocolIntensity,
};
pub use domain::{Indicator, IndicatorPolarity, IntakeAnswers, Jdi8Score, Tier};
pub use layout::{layout, BlueprintDocument, LayoutError, ReportStamp};
pub use render::{render, RenderError, RenderedReport, REPORT_FILENAME};
pub use router::blueprint_router;
pub use scoring::{compute_score, score_breakdown, IndicatorContribution, ScoreCard};
pub use service::{BlueprintService, ComponentView, ReportError, ReportRequest, ScoreResponse};
pub use store::ScoreStore;
pub use tier::classify;
