//! Rounded outline with the placeholder label cut into its top edge.
//!
//! ```text
//! ╭─ Username ──────────╮
//! │ jdoe                │
//! ╰─────────────────────╯
//! ```
//!
//! The top edge is a corner, a short lead segment, then a gap holding the
//! label with one blank column of padding on each side, then the rest of the
//! edge. Geometry is computed by [`BorderGeometry::compute`] and painted by
//! the [`BorderOutline`] widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::border;
use ratatui::widgets::Widget;

use crate::measure::{text_width, truncate_to_width};

/// Columns of top edge drawn between the corner and the label gap.
pub const LEAD: u16 = 1;
/// Blank columns on each side of the label.
pub const PADDING: u16 = 1;
/// Edge columns that must remain between the gap and the top-right corner.
pub const MIN_TRAIL: u16 = 1;

/// Where the label gap sits on the top edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGap {
    /// First column of the gap (left padding).
    pub start: u16,
    /// One past the last column of the gap (after right padding).
    pub end: u16,
    /// Column where the label text begins.
    pub label_x: u16,
    /// The label as it fits, possibly truncated.
    pub label: String,
}

impl LabelGap {
    /// Whether column `x` falls inside the gap.
    pub fn contains(&self, x: u16) -> bool {
        (self.start..self.end).contains(&x)
    }
}

/// Cell geometry of an outline drawn into `area`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderGeometry {
    /// The rectangle the outline traces.
    pub area: Rect,
    /// The label gap, or `None` for a continuous top edge.
    pub gap: Option<LabelGap>,
}

impl BorderGeometry {
    /// Lay out an outline for `area`, cutting a gap for `label` when
    /// `show_label` is set.
    ///
    /// Returns `None` when `area` is too small to hold any outline (under two
    /// columns or two rows). The label is truncated so at least
    /// [`MIN_TRAIL`] edge columns remain after the gap; if nothing of it
    /// fits, or it is empty, the top edge stays continuous.
    pub fn compute(area: Rect, label: &str, show_label: bool) -> Option<Self> {
        if area.width < 2 || area.height < 2 {
            return None;
        }
        let gap = if show_label {
            Self::gap_for(area, label)
        } else {
            None
        };
        Some(Self { area, gap })
    }

    fn gap_for(area: Rect, label: &str) -> Option<LabelGap> {
        let reserved = 2 + LEAD + 2 * PADDING + MIN_TRAIL;
        let available = area.width.saturating_sub(reserved) as usize;
        let fitted = truncate_to_width(label, available);
        if fitted.is_empty() {
            return None;
        }
        if fitted.len() < label.len() {
            tracing::trace!(
                label_width = text_width(label),
                available,
                "border label truncated"
            );
        }
        let start = area.x + 1 + LEAD;
        let label_x = start + PADDING;
        let end = label_x + text_width(fitted) as u16 + PADDING;
        Some(LabelGap {
            start,
            end,
            label_x,
            label: fitted.to_string(),
        })
    }

    /// The area left inside the outline.
    pub fn inner(&self) -> Rect {
        inner_area(self.area)
    }
}

/// `area` shrunk by one cell on every side.
pub fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Widget that strokes a rounded outline and writes the label into its gap.
#[derive(Debug, Clone)]
pub struct BorderOutline<'a> {
    label: &'a str,
    show_label: bool,
    stroke: Style,
    label_style: Style,
}

impl<'a> BorderOutline<'a> {
    /// An outline with `label` cut into the top edge.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            show_label: true,
            stroke: Style::default(),
            label_style: Style::default(),
        }
    }

    /// Whether to cut the label gap. Without it the outline is a plain
    /// rounded rectangle.
    pub fn show_label(mut self, show: bool) -> Self {
        self.show_label = show;
        self
    }

    /// Style for the outline cells.
    pub fn stroke(mut self, style: Style) -> Self {
        self.stroke = style;
        self
    }

    /// Style for the label text.
    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }
}

impl Widget for BorderOutline<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let Some(geometry) = BorderGeometry::compute(area, self.label, self.show_label) else {
            return;
        };
        let symbols = border::ROUNDED;
        let left = area.left();
        let right = area.right() - 1;
        let top = area.top();
        let bottom = area.bottom() - 1;

        for x in left + 1..right {
            let symbol = match &geometry.gap {
                Some(gap) if gap.contains(x) => " ",
                _ => symbols.horizontal_top,
            };
            buf[(x, top)].set_symbol(symbol).set_style(self.stroke);
            buf[(x, bottom)]
                .set_symbol(symbols.horizontal_bottom)
                .set_style(self.stroke);
        }
        for y in top + 1..bottom {
            buf[(left, y)]
                .set_symbol(symbols.vertical_left)
                .set_style(self.stroke);
            buf[(right, y)]
                .set_symbol(symbols.vertical_right)
                .set_style(self.stroke);
        }
        buf[(left, top)]
            .set_symbol(symbols.top_left)
            .set_style(self.stroke);
        buf[(right, top)]
            .set_symbol(symbols.top_right)
            .set_style(self.stroke);
        buf[(left, bottom)]
            .set_symbol(symbols.bottom_left)
            .set_style(self.stroke);
        buf[(right, bottom)]
            .set_symbol(symbols.bottom_right)
            .set_style(self.stroke);

        if let Some(gap) = &geometry.gap {
            buf.set_string(gap.label_x, top, &gap.label, self.label_style);
        }
    }
}
