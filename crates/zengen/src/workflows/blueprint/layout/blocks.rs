use super::metrics::text_width;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at its lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.top() <= self.top()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: f32) -> Self {
        Self::rgb(level, level, level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    pub const fn base_font(self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
        }
    }

    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A single line of text. `anchor.x` is interpreted according to `align`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub anchor: Point,
    pub font: Font,
    pub size: f32,
    pub color: Color,
    pub align: Align,
    pub text: String,
}

impl TextRun {
    pub fn width(&self) -> f32 {
        text_width(&self.text, self.font, self.size)
    }

    /// X position of the first glyph once alignment is applied.
    pub fn origin_x(&self) -> f32 {
        match self.align {
            Align::Left => self.anchor.x,
            Align::Center => self.anchor.x - self.width() / 2.0,
            Align::Right => self.anchor.x - self.width(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyle {
    pub header_fill: Color,
    pub header_text: Color,
    pub body_fill: Color,
    pub body_text: Color,
    pub grid: Stroke,
    pub font_size: f32,
    pub padding: f32,
}

/// Grid of text cells hanging down from `top_left`. Row zero is the header.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub top_left: Point,
    pub column_widths: Vec<f32>,
    pub row_height: f32,
    pub rows: Vec<Vec<String>>,
    pub style: TableStyle,
}

impl TableBlock {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    pub fn height(&self) -> f32 {
        self.row_height * self.rows.len() as f32
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.top_left.x,
            self.top_left.y - self.height(),
            self.width(),
            self.height(),
        )
    }

    /// Lower-left corner of the cell at `row`, `column`.
    pub fn cell_origin(&self, row: usize, column: usize) -> Point {
        let x = self.top_left.x + self.column_widths.iter().take(column).sum::<f32>();
        let y = self.top_left.y - self.row_height * (row + 1) as f32;
        Point::new(x, y)
    }
}

/// Atomic positioned unit on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text(TextRun),
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Rect {
        rect: Rect,
        corner_radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Table(TableBlock),
    Link {
        rect: Rect,
        uri: String,
    },
}

impl Block {
    /// Lowest y coordinate the block paints or occupies.
    pub fn lowest_y(&self) -> f32 {
        match self {
            Block::Text(run) => run.anchor.y,
            Block::Line { from, to, .. } => from.y.min(to.y),
            Block::Rect { rect, .. } | Block::Link { rect, .. } => rect.y,
            Block::Circle { center, radius, .. } => center.y - radius,
            Block::Table(table) => table.bounds().y,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub number: u32,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn tables(&self) -> impl Iterator<Item = &TableBlock> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    pub fn links(&self) -> impl Iterator<Item = (&Rect, &str)> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Link { rect, uri } => Some((rect, uri.as_str())),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Text(run) => Some(run),
            _ => None,
        })
    }
}

/// Laid-out report ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct BlueprintDocument {
    pub title: String,
    pub media_box: Rect,
    pub pages: Vec<Page>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_text_straddles_its_anchor() {
        let run = TextRun {
            anchor: Point::new(300.0, 100.0),
            font: Font::Bold,
            size: 36.0,
            color: Color::gray(1.0),
            align: Align::Center,
            text: "4/8".to_string(),
        };
        let half = run.width() / 2.0;
        assert!((run.origin_x() - (300.0 - half)).abs() < 0.001);
    }

    #[test]
    fn table_cells_hang_down_from_top_left() {
        let table = TableBlock {
            top_left: Point::new(50.0, 200.0),
            column_widths: vec![10.0, 20.0, 30.0],
            row_height: 18.0,
            rows: vec![vec![String::new(); 3]; 8],
            style: TableStyle {
                header_fill: Color::gray(0.0),
                header_text: Color::gray(1.0),
                body_fill: Color::gray(0.0),
                body_text: Color::gray(1.0),
                grid: Stroke {
                    color: Color::gray(0.5),
                    width: 0.5,
                },
                font_size: 10.0,
                padding: 4.0,
            },
        };

        assert_eq!(table.cell_origin(0, 2), Point::new(80.0, 182.0));
        assert_eq!(table.bounds(), Rect::new(50.0, 56.0, 60.0, 144.0));
    }
}
