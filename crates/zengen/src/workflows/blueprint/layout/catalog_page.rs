use super::blocks::{Align, Block, Font, Page, Point, Rect, Stroke};
use super::metrics::text_width;
use super::theme::{self, INCH, MARGIN_X, PAGE_HEIGHT, PAGE_WIDTH};
use super::{background, footer, text, FlowCursor, LayoutError};
use crate::workflows::blueprint::catalog::{Catalog, CatalogItem, CatalogSection};

const PAGE_NUMBER: u32 = 2;

const TITLE_SIZE: f32 = 12.0;
const BUTTON_WIDTH: f32 = 1.5 * INCH;
const BUTTON_HEIGHT: f32 = 0.25 * INCH;
const ITEM_PITCH: f32 = 0.8 * INCH;

const DISCLOSURE: &str =
    "Affiliate Disclosure: We may earn a commission from qualifying purchases.";

pub(crate) fn build(catalog: &Catalog) -> Result<Page, LayoutError> {
    let mut cursor = FlowCursor::new(PAGE_NUMBER, PAGE_HEIGHT, theme::CONTENT_FLOOR);
    let mut blocks = vec![background()];

    let rule_y = PAGE_HEIGHT - 0.8 * INCH;
    blocks.push(Block::Line {
        from: Point::new(MARGIN_X, rule_y),
        to: Point::new(PAGE_WIDTH - MARGIN_X, rule_y),
        stroke: Stroke {
            color: theme::ACCENT,
            width: 2.0,
        },
    });
    let banner_y = PAGE_HEIGHT - 0.7 * INCH;
    blocks.push(text(
        MARGIN_X,
        banner_y,
        Font::Bold,
        10.0,
        theme::ACCENT,
        Align::Left,
        "ZENGEN LONGEVITY AI",
    ));
    blocks.push(text(
        PAGE_WIDTH - MARGIN_X,
        banner_y,
        Font::Bold,
        10.0,
        theme::WHITE,
        Align::Right,
        "SHOPPING LIST & RESOURCES",
    ));

    cursor.advance(1.5 * INCH)?;
    for (index, section) in CatalogSection::ordered().into_iter().enumerate() {
        if index > 0 {
            cursor.advance(0.5 * INCH)?;
        }
        blocks.push(text(
            MARGIN_X,
            cursor.y(),
            Font::Bold,
            18.0,
            theme::WHITE,
            Align::Left,
            section.heading(),
        ));
        cursor.advance(0.4 * INCH)?;

        for item in catalog.in_section(section) {
            blocks.extend(linked_item(MARGIN_X, cursor.y(), item));
            cursor.advance(ITEM_PITCH)?;
        }
    }

    blocks.extend(footer(DISCLOSURE, PAGE_NUMBER));

    Ok(Page {
        number: PAGE_NUMBER,
        blocks,
    })
}

/// Title, description and "view" button, with both the title and the
/// button bound to the item's link.
fn linked_item(x: f32, y: f32, item: &CatalogItem) -> Vec<Block> {
    let title_width = text_width(item.name, Font::Bold, TITLE_SIZE);
    let button_y = y - 0.45 * INCH;

    vec![
        text(
            x,
            y,
            Font::Bold,
            TITLE_SIZE,
            theme::ACCENT,
            Align::Left,
            item.name,
        ),
        Block::Link {
            rect: Rect::new(x, y - 2.0, title_width, 12.0),
            uri: item.url.clone(),
        },
        text(
            x,
            y - 0.2 * INCH,
            Font::Regular,
            10.0,
            theme::WHITE,
            Align::Left,
            item.rationale,
        ),
        Block::Rect {
            rect: Rect::new(x, button_y, BUTTON_WIDTH, BUTTON_HEIGHT),
            corner_radius: 4.0,
            fill: Some(theme::BUTTON_FILL),
            stroke: None,
        },
        text(
            x + BUTTON_WIDTH / 2.0,
            button_y + 0.08 * INCH,
            Font::Bold,
            8.0,
            theme::ACCENT,
            Align::Center,
            "VIEW PRODUCT >",
        ),
        Block::Link {
            rect: Rect::new(x, button_y, BUTTON_WIDTH, BUTTON_HEIGHT),
            uri: item.url.clone(),
        },
    ]
}
