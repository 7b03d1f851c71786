use super::layout::metrics::encode_win_ansi;
use super::layout::{
    Block, BlueprintDocument, Color, Font, Page, Point, Rect, Stroke, TableBlock, TextRun,
};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use mime::Mime;

pub const REPORT_FILENAME: &str = "ZenGen_Longevity_Premium_Report.pdf";
const PRODUCER: &str = "zengen";

// Control-point distance for approximating a quarter circle with a cubic Bézier.
const KAPPA: f32 = 0.552_284_8;

/// Serialized report plus the metadata a transport needs to deliver it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub bytes: Vec<u8>,
    pub filename: &'static str,
    pub media_type: Mime,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("pdf encoding failed: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("pdf serialization failed: {0}")]
    Io(#[from] std::io::Error),
}

pub fn render(document: &BlueprintDocument) -> Result<RenderedReport, RenderError> {
    let mut pdf = Document::with_version("1.5");
    let pages_id = pdf.new_object_id();

    let regular_id = pdf.add_object(font_dictionary(Font::Regular));
    let bold_id = pdf.add_object(font_dictionary(Font::Bold));
    let resources_id = pdf.add_object(dictionary! {
        "Font" => dictionary! {
            Font::Regular.resource_name() => regular_id,
            Font::Bold.resource_name() => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(document.pages.len());
    for page in &document.pages {
        let content = page_content(page);
        let content_id = pdf.add_object(Stream::new(dictionary! {}, content.encode()?));

        let annotations: Vec<Object> = page
            .links()
            .map(|(rect, uri)| pdf.add_object(link_annotation(rect, uri)).into())
            .collect();

        let mut page_dictionary = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        };
        if !annotations.is_empty() {
            page_dictionary.set("Annots", annotations);
        }
        kids.push(pdf.add_object(page_dictionary).into());
    }

    let page_count = kids.len() as i64;
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => rect_array(&document.media_box),
        }),
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = pdf.add_object(dictionary! {
        "Title" => Object::string_literal(document.title.as_str()),
        "Producer" => Object::string_literal(PRODUCER),
    });
    pdf.trailer.set("Root", catalog_id);
    pdf.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    pdf.save_to(&mut bytes)?;

    Ok(RenderedReport {
        bytes,
        filename: REPORT_FILENAME,
        media_type: mime::APPLICATION_PDF,
    })
}

fn font_dictionary(font: Font) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn link_annotation(rect: &Rect, uri: &str) -> Dictionary {
    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => rect_array(rect),
        "Border" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(0)],
        "A" => dictionary! {
            "Type" => "Action",
            "S" => "URI",
            "URI" => Object::string_literal(uri),
        },
    }
}

fn rect_array(rect: &Rect) -> Vec<Object> {
    vec![
        real(rect.x),
        real(rect.y),
        real(rect.right()),
        real(rect.top()),
    ]
}

fn real(value: f32) -> Object {
    Object::Real(value)
}

fn op(operator: &str, operands: Vec<Object>) -> Operation {
    Operation::new(operator, operands)
}

fn page_content(page: &Page) -> Content {
    let mut operations = Vec::new();
    for block in &page.blocks {
        match block {
            Block::Text(run) => push_text(&mut operations, run),
            Block::Line { from, to, stroke } => {
                operations.push(op("q", vec![]));
                push_stroke(&mut operations, stroke);
                operations.push(op("m", vec![real(from.x), real(from.y)]));
                operations.push(op("l", vec![real(to.x), real(to.y)]));
                operations.push(op("S", vec![]));
                operations.push(op("Q", vec![]));
            }
            Block::Rect {
                rect,
                corner_radius,
                fill,
                stroke,
            } => {
                operations.push(op("q", vec![]));
                push_paint_state(&mut operations, *fill, *stroke);
                if *corner_radius > 0.0 {
                    push_rounded_rect(&mut operations, rect, *corner_radius);
                } else {
                    operations.push(op(
                        "re",
                        vec![
                            real(rect.x),
                            real(rect.y),
                            real(rect.width),
                            real(rect.height),
                        ],
                    ));
                }
                operations.push(op(paint_operator(fill.is_some(), stroke.is_some()), vec![]));
                operations.push(op("Q", vec![]));
            }
            Block::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                operations.push(op("q", vec![]));
                push_paint_state(&mut operations, *fill, *stroke);
                push_circle(&mut operations, *center, *radius);
                operations.push(op(paint_operator(fill.is_some(), stroke.is_some()), vec![]));
                operations.push(op("Q", vec![]));
            }
            Block::Table(table) => push_table(&mut operations, table),
            // Links become annotations, not drawing operations.
            Block::Link { .. } => {}
        }
    }
    Content { operations }
}

fn push_fill_color(operations: &mut Vec<Operation>, color: Color) {
    operations.push(op("rg", vec![real(color.r), real(color.g), real(color.b)]));
}

fn push_stroke(operations: &mut Vec<Operation>, stroke: &Stroke) {
    let Color { r, g, b } = stroke.color;
    operations.push(op("RG", vec![real(r), real(g), real(b)]));
    operations.push(op("w", vec![real(stroke.width)]));
}

fn push_paint_state(operations: &mut Vec<Operation>, fill: Option<Color>, stroke: Option<Stroke>) {
    if let Some(color) = fill {
        push_fill_color(operations, color);
    }
    if let Some(stroke) = stroke {
        push_stroke(operations, &stroke);
    }
}

fn paint_operator(fill: bool, stroke: bool) -> &'static str {
    match (fill, stroke) {
        (true, true) => "B",
        (true, false) => "f",
        (false, true) => "S",
        (false, false) => "n",
    }
}

fn push_text(operations: &mut Vec<Operation>, run: &TextRun) {
    push_glyphs(
        operations,
        run.font,
        run.size,
        run.color,
        Point::new(run.origin_x(), run.anchor.y),
        &run.text,
    );
}

fn push_glyphs(
    operations: &mut Vec<Operation>,
    font: Font,
    size: f32,
    color: Color,
    origin: Point,
    text: &str,
) {
    operations.push(op("BT", vec![]));
    operations.push(op("Tf", vec![font.resource_name().into(), real(size)]));
    push_fill_color(operations, color);
    operations.push(op("Td", vec![real(origin.x), real(origin.y)]));
    operations.push(op(
        "Tj",
        vec![Object::string_literal(encode_win_ansi(text))],
    ));
    operations.push(op("ET", vec![]));
}

fn push_rounded_rect(operations: &mut Vec<Operation>, rect: &Rect, radius: f32) {
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0);
    let k = r * KAPPA;
    let (x, y, right, top) = (rect.x, rect.y, rect.right(), rect.top());

    operations.push(op("m", vec![real(x + r), real(y)]));
    operations.push(op("l", vec![real(right - r), real(y)]));
    push_curve(operations, [right - r + k, y, right, y + r - k, right, y + r]);
    operations.push(op("l", vec![real(right), real(top - r)]));
    push_curve(operations, [right, top - r + k, right - r + k, top, right - r, top]);
    operations.push(op("l", vec![real(x + r), real(top)]));
    push_curve(operations, [x + r - k, top, x, top - r + k, x, top - r]);
    operations.push(op("l", vec![real(x), real(y + r)]));
    push_curve(operations, [x, y + r - k, x + r - k, y, x + r, y]);
    operations.push(op("h", vec![]));
}

fn push_circle(operations: &mut Vec<Operation>, center: Point, radius: f32) {
    let k = radius * KAPPA;
    let (cx, cy, r) = (center.x, center.y, radius);

    operations.push(op("m", vec![real(cx + r), real(cy)]));
    push_curve(operations, [cx + r, cy + k, cx + k, cy + r, cx, cy + r]);
    push_curve(operations, [cx - k, cy + r, cx - r, cy + k, cx - r, cy]);
    push_curve(operations, [cx - r, cy - k, cx - k, cy - r, cx, cy - r]);
    push_curve(operations, [cx + k, cy - r, cx + r, cy - k, cx + r, cy]);
    operations.push(op("h", vec![]));
}

fn push_curve(operations: &mut Vec<Operation>, points: [f32; 6]) {
    operations.push(op("c", points.into_iter().map(real).collect()));
}

fn push_table(operations: &mut Vec<Operation>, table: &TableBlock) {
    let style = &table.style;
    let bounds = table.bounds();

    for (row_index, row) in table.rows.iter().enumerate() {
        let (fill, text_color, font) = if row_index == 0 {
            (style.header_fill, style.header_text, Font::Bold)
        } else {
            (style.body_fill, style.body_text, Font::Regular)
        };

        let row_origin = table.cell_origin(row_index, 0);
        operations.push(op("q", vec![]));
        push_fill_color(operations, fill);
        operations.push(op(
            "re",
            vec![
                real(row_origin.x),
                real(row_origin.y),
                real(bounds.width),
                real(table.row_height),
            ],
        ));
        operations.push(op("f", vec![]));
        operations.push(op("Q", vec![]));

        for (column_index, cell) in row.iter().enumerate() {
            let origin = table.cell_origin(row_index, column_index);
            let baseline = origin.y + (table.row_height - style.font_size * 0.72) / 2.0;
            push_glyphs(
                operations,
                font,
                style.font_size,
                text_color,
                Point::new(origin.x + style.padding, baseline),
                cell,
            );
        }
    }

    operations.push(op("q", vec![]));
    push_stroke(operations, &style.grid);
    for boundary in 0..=table.rows.len() {
        let y = bounds.top() - table.row_height * boundary as f32;
        operations.push(op("m", vec![real(bounds.x), real(y)]));
        operations.push(op("l", vec![real(bounds.right()), real(y)]));
    }
    let mut x = bounds.x;
    for boundary in 0..=table.column_widths.len() {
        if boundary > 0 {
            x += table.column_widths[boundary - 1];
        }
        operations.push(op("m", vec![real(x), real(bounds.y)]));
        operations.push(op("l", vec![real(x), real(bounds.top())]));
    }
    operations.push(op("S", vec![]));
    operations.push(op("Q", vec![]));
}
