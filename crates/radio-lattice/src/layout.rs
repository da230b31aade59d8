//! Placement of rows within a group.
//!
//! Vertical groups stack rows top to bottom at their natural height with
//! the configured spacing between them. Horizontal groups split the
//! available width equally between items and give every item the height
//! of the tallest one.

use radio_lattice_core::PerfSpan;
use radio_lattice_core::logging::{span_names, targets};
use radio_lattice_style::resolve::{ContentShape, ItemLayout};
use radio_lattice_style::style::{Axis, StyleConfiguration};
use radio_lattice_style::types::{Point, Rect, Size};

/// One placed row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowFrame {
    /// Position of the item in its group.
    pub index: usize,
    /// The row's rectangle in group coordinates.
    pub frame: Rect,
    /// Geometry inside the row, relative to `frame`'s origin.
    pub layout: ItemLayout,
}

/// Rectangles for every row of a group at a given width.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLayout {
    rows: Vec<RowFrame>,
    size: Size,
}

impl GroupLayout {
    /// Lay out rows of the given shapes within `width`.
    pub fn compute(config: &StyleConfiguration, shapes: &[ContentShape], width: f32) -> Self {
        let _span = PerfSpan::new(span_names::LAYOUT);

        let width = width.max(0.0);
        let layouts: Vec<ItemLayout> = shapes
            .iter()
            .map(|&shape| ItemLayout::resolve(config, shape))
            .collect();

        let count = layouts.len();
        let total_spacing = config.spacing * count.saturating_sub(1) as f32;

        let (rows, size) = match config.axis {
            Axis::Vertical => {
                let mut y = 0.0;
                let rows: Vec<RowFrame> = layouts
                    .into_iter()
                    .enumerate()
                    .map(|(index, layout)| {
                        let frame = Rect::new(0.0, y, width, layout.row_height);
                        y += layout.row_height + config.spacing;
                        RowFrame { index, frame, layout }
                    })
                    .collect();
                let height = rows.last().map_or(0.0, |row| row.frame.bottom());
                (rows, Size::new(width, height))
            }
            Axis::Horizontal => {
                let item_width = if count == 0 {
                    0.0
                } else {
                    ((width - total_spacing) / count as f32).max(0.0)
                };
                let height = layouts
                    .iter()
                    .map(|layout| layout.row_height)
                    .fold(0.0_f32, f32::max);
                let rows = layouts
                    .into_iter()
                    .enumerate()
                    .map(|(index, layout)| {
                        let x = index as f32 * (item_width + config.spacing);
                        RowFrame {
                            index,
                            frame: Rect::new(x, 0.0, item_width, height),
                            layout,
                        }
                    })
                    .collect();
                (rows, Size::new(width, height))
            }
        };

        tracing::trace!(
            target: targets::LAYOUT,
            axis = %config.axis,
            rows = count,
            width = size.width,
            height = size.height,
            "laid out radio group"
        );

        Self { rows, size }
    }

    /// Get every placed row, in item order.
    pub fn rows(&self) -> &[RowFrame] {
        &self.rows
    }

    /// Get the placed row for an item.
    pub fn row(&self, index: usize) -> Option<&RowFrame> {
        self.rows.get(index)
    }

    /// Get the total size occupied by the rows.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Find the item whose row contains `point`.
    ///
    /// Points in the spacing between rows hit nothing. A renderer turns a
    /// hit at `i` into `select(i)`.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.rows
            .iter()
            .find(|row| row.frame.contains(point))
            .map(|row| row.index)
    }
}

#[cfg(test)]
mod tests {
    use radio_lattice_style::prelude::*;

    use super::*;

    fn title_only(count: usize) -> Vec<ContentShape> {
        vec![ContentShape::TITLE_ONLY; count]
    }

    #[test]
    fn test_vertical_stacks_with_spacing() {
        let config = resolve_style(GroupStyle::Standard, Axis::Vertical);
        let layout = GroupLayout::compute(&config, &title_only(3), 320.0);

        let tops: Vec<f32> = layout.rows().iter().map(|r| r.frame.top()).collect();
        assert_eq!(tops, vec![0.0, 53.0, 106.0]);
        assert!(layout.rows().iter().all(|r| r.frame.width() == 320.0));
        assert_eq!(layout.size(), Size::new(320.0, 144.0));
    }

    #[test]
    fn test_horizontal_equal_widths() {
        let config = resolve_style(GroupStyle::Grouped, Axis::Horizontal);
        let layout = GroupLayout::compute(&config, &title_only(2), 315.0);

        let widths: Vec<f32> = layout.rows().iter().map(|r| r.frame.width()).collect();
        assert_eq!(widths, vec![150.0, 150.0]);
        let total: f32 = widths.iter().sum::<f32>() + config.spacing;
        assert_eq!(total, 315.0);
        assert_eq!(layout.rows()[1].frame.left(), 165.0);
    }

    #[test]
    fn test_horizontal_uses_tallest_row() {
        let config = resolve_style(GroupStyle::Grouped, Axis::Horizontal);
        let shapes = [ContentShape::TITLE_ONLY, ContentShape::new(true, false)];
        let layout = GroupLayout::compute(&config, &shapes, 300.0);

        let tallest = ItemLayout::resolve(&config, shapes[1]).row_height;
        assert!(layout.rows().iter().all(|r| r.frame.height() == tallest));
        assert_eq!(layout.size().height, tallest);
    }

    #[test]
    fn test_hit_test() {
        let config = resolve_style(GroupStyle::Standard, Axis::Vertical);
        let layout = GroupLayout::compute(&config, &title_only(3), 200.0);

        assert_eq!(layout.hit_test(Point::new(10.0, 10.0)), Some(0));
        assert_eq!(layout.hit_test(Point::new(10.0, 60.0)), Some(1));
        // In the spacing between row 0 and row 1.
        assert_eq!(layout.hit_test(Point::new(10.0, 45.0)), None);
        assert_eq!(layout.hit_test(Point::new(10.0, 500.0)), None);
    }

    #[test]
    fn test_empty_layout() {
        let config = resolve_style(GroupStyle::Standard, Axis::Horizontal);
        let layout = GroupLayout::compute(&config, &[], 100.0);
        assert!(layout.rows().is_empty());
        assert_eq!(layout.size().height, 0.0);
    }
}
