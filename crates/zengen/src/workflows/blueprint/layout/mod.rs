mod analysis_page;
pub mod blocks;
mod catalog_page;
pub mod metrics;
pub mod theme;

pub use blocks::{
    Align, Block, BlueprintDocument, Color, Font, Page, Point, Rect, Stroke, TableBlock,
    TableStyle, TextRun,
};

use super::content::ContentBundle;
use super::domain::{Jdi8Score, Tier};
use chrono::{Local, NaiveDate, NaiveDateTime};

pub const DOCUMENT_TITLE: &str = "ZenGen Longevity Premium Report";
pub const PAGE_COUNT: usize = 2;

/// Generation date and identifier printed under the report title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStamp {
    pub generated_on: NaiveDate,
    pub report_id: String,
}

impl ReportStamp {
    pub fn at(moment: NaiveDateTime) -> Self {
        Self {
            generated_on: moment.date(),
            report_id: format!("GEN-{}", moment.format("%H%M%S")),
        }
    }

    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    pub fn subtitle(&self) -> String {
        format!(
            "Generated on: {} | ID: {}",
            self.generated_on.format("%Y-%m-%d"),
            self.report_id
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("page {page} content overflows the bottom margin ({y:.1}pt < {floor:.1}pt)")]
    Overflow { page: u32, y: f32, floor: f32 },
}

/// Downward-only vertical cursor bounded by the content floor.
#[derive(Debug)]
pub(crate) struct FlowCursor {
    page: u32,
    y: f32,
    floor: f32,
}

impl FlowCursor {
    pub(crate) fn new(page: u32, start: f32, floor: f32) -> Self {
        Self {
            page,
            y: start,
            floor,
        }
    }

    pub(crate) fn y(&self) -> f32 {
        self.y
    }

    /// Moves the cursor down by `distance` and returns the new position.
    pub(crate) fn advance(&mut self, distance: f32) -> Result<f32, LayoutError> {
        let next = self.y - distance.max(0.0);
        if next < self.floor {
            return Err(LayoutError::Overflow {
                page: self.page,
                y: next,
                floor: self.floor,
            });
        }
        self.y = next;
        Ok(next)
    }
}

/// Places every block of the two-page report.
pub fn layout(
    score: Jdi8Score,
    tier: Tier,
    content: &ContentBundle,
    stamp: &ReportStamp,
) -> Result<BlueprintDocument, LayoutError> {
    let pages = vec![
        analysis_page::build(score, tier, content, stamp)?,
        catalog_page::build(&content.catalog)?,
    ];

    Ok(BlueprintDocument {
        title: DOCUMENT_TITLE.to_string(),
        media_box: theme::media_box(),
        pages,
    })
}

pub(crate) fn text(
    x: f32,
    y: f32,
    font: Font,
    size: f32,
    color: Color,
    align: Align,
    content: impl Into<String>,
) -> Block {
    Block::Text(TextRun {
        anchor: Point::new(x, y),
        font,
        size,
        color,
        align,
        text: content.into(),
    })
}

pub(crate) fn background() -> Block {
    Block::Rect {
        rect: theme::media_box(),
        corner_radius: 0.0,
        fill: Some(theme::BACKGROUND),
        stroke: None,
    }
}

pub(crate) fn footer(note: &str, page: u32) -> [Block; 2] {
    [
        text(
            theme::PAGE_WIDTH / 2.0,
            theme::FOOTER_Y,
            Font::Regular,
            7.0,
            theme::GREY,
            Align::Center,
            note,
        ),
        text(
            theme::PAGE_WIDTH - theme::MARGIN_X,
            theme::FOOTER_Y,
            Font::Regular,
            7.0,
            theme::GREY,
            Align::Right,
            format!("Page {page}"),
        ),
    ]
}
