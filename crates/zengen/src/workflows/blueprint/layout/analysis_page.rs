use super::blocks::{Align, Block, Font, Page, Point, Rect, Stroke, TableBlock, TableStyle};
use super::theme::{self, INCH, MARGIN_X, PAGE_HEIGHT, PAGE_WIDTH};
use super::{background, footer, text, FlowCursor, LayoutError, ReportStamp};
use crate::workflows::blueprint::content::{ContentBundle, LineEmphasis};
use crate::workflows::blueprint::domain::{Jdi8Score, Tier};

const PAGE_NUMBER: u32 = 1;

const BADGE_RADIUS: f32 = 0.8 * INCH;
const RISK_BADGE_WIDTH: f32 = 4.2 * INCH;
const RISK_BADGE_HEIGHT: f32 = 0.4 * INCH;
const LINE_PITCH: f32 = 0.2 * INCH;
const SECTION_GAP: f32 = 0.4 * INCH;

pub(crate) const TABLE_COLUMNS: [f32; 3] = [0.8 * INCH, 1.2 * INCH, 4.5 * INCH];
pub(crate) const TABLE_ROW_HEIGHT: f32 = 18.0;
pub(crate) const TABLE_FONT_SIZE: f32 = 10.0;
pub(crate) const TABLE_PADDING: f32 = 4.0;

const DISCLAIMER: &str = "This report is generated based on Japanese Diet Index (JDI8) research. It is for educational purposes only and not medical advice.";

pub(crate) fn build(
    score: Jdi8Score,
    tier: Tier,
    content: &ContentBundle,
    stamp: &ReportStamp,
) -> Result<Page, LayoutError> {
    let mut cursor = FlowCursor::new(PAGE_NUMBER, PAGE_HEIGHT, theme::CONTENT_FLOOR);
    let mut blocks = vec![background()];

    // Header rule and banner.
    let header_y = cursor.advance(0.5 * INCH)?;
    blocks.push(Block::Line {
        from: Point::new(MARGIN_X, header_y),
        to: Point::new(PAGE_WIDTH - MARGIN_X, header_y),
        stroke: Stroke {
            color: theme::ACCENT,
            width: 4.0,
        },
    });
    blocks.push(text(
        PAGE_WIDTH - MARGIN_X,
        header_y + 0.1 * INCH,
        Font::Regular,
        8.0,
        theme::GREY,
        Align::Right,
        "CONFIDENTIAL ANALYSIS",
    ));
    let banner_y = cursor.advance(0.25 * INCH)?;
    blocks.push(text(
        PAGE_WIDTH / 2.0,
        banner_y,
        Font::Bold,
        14.0,
        theme::ACCENT,
        Align::Center,
        "OFFICIAL LONGEVITY BLUEPRINT",
    ));

    let title_y = cursor.advance(0.35 * INCH)?;
    blocks.push(text(
        MARGIN_X,
        title_y,
        Font::Bold,
        28.0,
        theme::WHITE,
        Align::Left,
        "Your Bio-Hacking Blueprint",
    ));
    let subtitle_y = cursor.advance(0.25 * INCH)?;
    blocks.push(text(
        MARGIN_X,
        subtitle_y,
        Font::Regular,
        10.0,
        theme::LIGHT_GREY,
        Align::Left,
        stamp.subtitle(),
    ));

    // Score badge.
    let center_y = cursor.advance(1.15 * INCH)?;
    let center = Point::new(PAGE_WIDTH / 2.0, center_y);
    blocks.push(Block::Circle {
        center,
        radius: BADGE_RADIUS,
        fill: Some(theme::BADGE_FILL),
        stroke: Some(Stroke {
            color: theme::ACCENT,
            width: 3.0,
        }),
    });
    blocks.push(text(
        center.x,
        center.y - 10.0,
        Font::Bold,
        36.0,
        theme::WHITE,
        Align::Center,
        score.to_string(),
    ));
    blocks.push(text(
        center.x,
        center.y - 0.5 * INCH,
        Font::Regular,
        10.0,
        theme::ACCENT,
        Align::Center,
        "JDI8 SCORE",
    ));

    // Tier label sits directly below the badge.
    let risk_y = cursor.advance(1.1 * INCH)?;
    blocks.push(Block::Rect {
        rect: Rect::new(
            center.x - RISK_BADGE_WIDTH / 2.0,
            risk_y,
            RISK_BADGE_WIDTH,
            RISK_BADGE_HEIGHT,
        ),
        corner_radius: 4.0,
        fill: None,
        stroke: Some(Stroke {
            color: theme::ACCENT,
            width: 1.0,
        }),
    });
    blocks.push(text(
        center.x,
        risk_y + RISK_BADGE_HEIGHT / 2.0 - 10.0 / 3.0,
        Font::Bold,
        10.0,
        theme::WHITE,
        Align::Center,
        tier.badge_text(),
    ));

    // 01: analysis lines.
    let section_y = cursor.advance(0.6 * INCH)?;
    blocks.push(section_heading(section_y, "01 // BIO-MARKER ANALYSIS"));
    cursor.advance(0.3 * INCH)?;

    let mut in_critical_block = false;
    for line in &content.analysis {
        let (font, color) = match line.emphasis {
            LineEmphasis::Standard => (Font::Regular, theme::WHITE),
            LineEmphasis::Critical => {
                if !in_critical_block {
                    cursor.advance(0.1 * INCH)?;
                    in_critical_block = true;
                }
                (Font::Bold, theme::ALARM)
            }
        };
        blocks.push(text(
            MARGIN_X + 0.2 * INCH,
            cursor.y(),
            font,
            10.0,
            color,
            Align::Left,
            line.text,
        ));
        cursor.advance(LINE_PITCH)?;
    }

    // 02: insight box.
    let section_y = cursor.advance(SECTION_GAP)?;
    blocks.push(section_heading(section_y, "02 // THE JAPANESE GENETIC EDGE"));
    let box_y = cursor.advance(1.1 * INCH)?;
    blocks.push(Block::Rect {
        rect: Rect::new(MARGIN_X, box_y, theme::content_width(), 0.9 * INCH),
        corner_radius: 0.0,
        fill: None,
        stroke: Some(Stroke {
            color: theme::GREY,
            width: 1.0,
        }),
    });
    let inset = MARGIN_X + 0.2 * INCH;
    blocks.push(text(
        inset,
        box_y + 0.65 * INCH,
        Font::Bold,
        11.0,
        theme::WHITE,
        Align::Left,
        "GENETIC INSIGHT: Bacteroides plebeius",
    ));
    blocks.push(text(
        inset,
        box_y + 0.4 * INCH,
        Font::Regular,
        10.0,
        theme::LIGHT_GREY,
        Align::Left,
        "Research (Nature, 2010) reveals you likely possess the 'Porphyranase' enzyme.",
    ));
    blocks.push(text(
        inset,
        box_y + 0.2 * INCH,
        Font::Regular,
        10.0,
        theme::LIGHT_GREY,
        Align::Left,
        "This allows unique biological access to marine sulphated polysaccharides.",
    ));

    // 03: protocol table.
    let section_y = cursor.advance(0.5 * INCH)?;
    blocks.push(section_heading(section_y, "03 // 1-WEEK PROTOCOL"));
    let table_top = cursor.advance(0.1 * INCH)?;
    let table = protocol_table(table_top, content);
    cursor.advance(table.height())?;
    blocks.push(Block::Table(table));

    blocks.extend(footer(DISCLAIMER, PAGE_NUMBER));

    Ok(Page {
        number: PAGE_NUMBER,
        blocks,
    })
}

fn section_heading(y: f32, label: &str) -> Block {
    text(
        MARGIN_X,
        y,
        Font::Bold,
        14.0,
        theme::ACCENT,
        Align::Left,
        label,
    )
}

fn protocol_table(top: f32, content: &ContentBundle) -> TableBlock {
    let header = ["Day", "Focus", "Action"].map(str::to_string).to_vec();
    let rows = std::iter::once(header)
        .chain(content.protocol.iter().map(|day| {
            vec![
                day.day.to_string(),
                day.focus.to_string(),
                day.action.to_string(),
            ]
        }))
        .collect();

    TableBlock {
        top_left: Point::new(MARGIN_X, top),
        column_widths: TABLE_COLUMNS.to_vec(),
        row_height: TABLE_ROW_HEIGHT,
        rows,
        style: TableStyle {
            header_fill: theme::ACCENT,
            header_text: theme::BLACK,
            body_fill: theme::TABLE_BODY,
            body_text: theme::WHITE,
            grid: Stroke {
                color: theme::GREY,
                width: 0.5,
            },
            font_size: TABLE_FONT_SIZE,
            padding: TABLE_PADDING,
        },
    }
}
