//! Shared grid layout of matrices and tables
use super::boxes::{Boxed, Child, Composite, Extent, Frame, MathBox};
use super::delim;
use crate::geom::{self, Point};
use crate::math::MatrixDelim;
use crate::metrics::Metrics;
use crate::style::StyleContext;

/// Grid spacing, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    pub col_gap: f32,
    pub row_gap: f32,
    pub min_row_ascent: f32,
    pub min_row_descent: f32,
    /// Space between the cells and the grid border
    pub padding: f32,
}

impl GridParams {
    pub fn new(metrics: &Metrics, font_size: f32, bordered: bool) -> Self {
        GridParams {
            col_gap: metrics.col_gap * font_size,
            row_gap: metrics.row_gap * font_size,
            min_row_ascent: metrics.min_row_ascent * font_size,
            min_row_descent: metrics.min_row_descent * font_size,
            padding: if bordered {
                metrics.table_padding * font_size
            } else {
                0.0
            },
        }
    }
}

/// Row metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowMetrics {
    pub ascent: f32,
    pub descent: f32,
}

/// Result of [`layout`]
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub col_widths: Vec<f32>,
    pub rows: Vec<RowMetrics>,
    pub col_gap: f32,
    pub row_gap: f32,
    pub padding: f32,
    pub width: f32,
    pub height: f32,
    /// Baseline origin of each cell relative to the grid center (y-down), row-major
    pub cells: Vec<Vec<Point>>,
}

impl GridLayout {
    /// X of the left edge of column `col`, relative to the grid center
    pub fn col_left(&self, col: usize) -> f32 {
        let before: f32 = self.col_widths[..col].iter().sum();
        -self.width / 2.0 + self.padding + before + col as f32 * self.col_gap
    }

    /// Y of the top edge of row `row`, relative to the grid center
    pub fn row_top(&self, row: usize) -> f32 {
        let before: f32 = self.rows[..row].iter().map(|r| r.ascent + r.descent).sum();
        -self.height / 2.0 + self.padding + before + row as f32 * self.row_gap
    }
}

/// Compute the grid geometry from cell extents.
///
/// Column widths are the maximum over each column, row ascent and descent the maximum
/// over each row, floor-clamped to the minimum ratios. Cells are centered horizontally
/// in their column and sit on their row baseline. Missing cells of ragged rows count as empty.
pub fn layout(cells: &[Vec<Extent>], params: &GridParams) -> GridLayout {
    let ncols = cells.iter().map(Vec::len).max().unwrap_or(0);

    let mut col_widths = vec![0.0f32; ncols];
    let rows: Vec<RowMetrics> = cells
        .iter()
        .map(|row| {
            let mut rm = RowMetrics {
                ascent: params.min_row_ascent,
                descent: params.min_row_descent,
            };
            for (c, cell) in row.iter().enumerate() {
                col_widths[c] = col_widths[c].max(cell.width);
                rm.ascent = rm.ascent.max(cell.ascent);
                rm.descent = rm.descent.max(cell.descent);
            }
            rm
        })
        .collect();

    let gaps = |n: usize, gap: f32| n.saturating_sub(1) as f32 * gap;
    let width = col_widths.iter().sum::<f32>() + gaps(ncols, params.col_gap) + 2.0 * params.padding;
    let height = rows.iter().map(|r| r.ascent + r.descent).sum::<f32>()
        + gaps(rows.len(), params.row_gap)
        + 2.0 * params.padding;

    let mut grid = GridLayout {
        col_widths,
        rows,
        col_gap: params.col_gap,
        row_gap: params.row_gap,
        padding: params.padding,
        width,
        height,
        cells: Vec::with_capacity(cells.len()),
    };

    for (r, row) in cells.iter().enumerate() {
        let baseline = grid.row_top(r) + grid.rows[r].ascent;
        let offsets = row
            .iter()
            .enumerate()
            .map(|(c, cell)| {
                let x = grid.col_left(c) + (grid.col_widths[c] - cell.width) / 2.0;
                Point::from_xy(x, baseline)
            })
            .collect();
        grid.cells.push(offsets);
    }
    grid
}

/// Place built cells on a grid centered on the math axis.
/// With `bordered`, a frame with grid lines at mid-gaps is added as first child.
fn grid_box(
    rows: Vec<Vec<MathBox>>,
    metrics: &Metrics,
    style: &StyleContext,
    bordered: bool,
) -> Composite {
    let fs = style.font_size;
    let params = GridParams::new(metrics, fs, bordered);
    let extents: Vec<Vec<Extent>> = rows
        .iter()
        .map(|row| row.iter().map(Boxed::extent).collect())
        .collect();
    let grid = layout(&extents, &params);

    // grid center in the box frame
    let cx = grid.width / 2.0;
    let cy = -metrics.axis_height * fs;
    let extent = Extent::new(
        grid.width,
        (grid.height / 2.0 - cy).max(0.0),
        (grid.height / 2.0 + cy).max(0.0),
    );

    let mut children = Vec::new();
    if bordered {
        let top = cy - grid.height / 2.0;
        let bottom = cy + grid.height / 2.0;
        let mut lines = Vec::new();
        for c in 1..grid.col_widths.len() {
            let x = cx + grid.col_left(c) - grid.col_gap / 2.0;
            lines.push((Point::from_xy(x, top), Point::from_xy(x, bottom)));
        }
        for r in 1..grid.rows.len() {
            let y = cy + grid.row_top(r) - grid.row_gap / 2.0;
            lines.push((Point::from_xy(0.0, y), Point::from_xy(grid.width, y)));
        }
        let frame = Frame {
            border: geom::Rect::from_xywh(0.0, top, grid.width, grid.height),
            lines,
            line_width: metrics.table_line_width * fs,
            color: style.color,
            extent,
        };
        children.push(Child {
            dx: 0.0,
            dy: 0.0,
            node: frame.into(),
        });
    }

    for (row, offsets) in rows.into_iter().zip(grid.cells.iter()) {
        for (cell, o) in row.into_iter().zip(offsets.iter()) {
            children.push(Child {
                dx: cx + o.x,
                dy: cy + o.y,
                node: cell,
            });
        }
    }
    log::trace!(
        "grid {}x{}: {} x {}",
        grid.rows.len(),
        grid.col_widths.len(),
        grid.width,
        grid.height
    );
    Composite::new(children, extent)
}

/// Bordered table with grid lines
pub fn table(rows: Vec<Vec<MathBox>>, metrics: &Metrics, style: &StyleContext) -> Composite {
    grid_box(rows, metrics, style, true)
}

/// Grid wrapped in delimiters, without lines
pub fn matrix(
    delim_kind: MatrixDelim,
    rows: Vec<Vec<MathBox>>,
    metrics: &Metrics,
    style: &StyleContext,
) -> Composite {
    let grid = grid_box(rows, metrics, style, false);
    let (open, close) = delim_kind.chars();
    delim::wrap(open, close, grid.into(), metrics, style)
}
