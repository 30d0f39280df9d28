//! Render-only chart descriptions.
//!
//! Charts are plain data: every label, value, colour, and position is computed
//! before drawing, so the same description can go to an SVG file or to the
//! terminal viewer.

use plotters::style::RGBColor;

use crate::domain::Sign;

#[derive(Debug, Clone)]
pub enum Chart {
    Pie(PieChart),
    Bar(BarChart),
    Network(NetworkChart),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Pie(c) => &c.title,
            Chart::Bar(c) => &c.title,
            Chart::Network(c) => &c.title,
        }
    }

    /// File name (without extension) used for image output.
    pub fn file_stem(&self) -> &str {
        match self {
            Chart::Pie(c) => &c.file_stem,
            Chart::Bar(c) => &c.file_stem,
            Chart::Network(c) => &c.file_stem,
        }
    }

    /// Image size in pixels.
    pub fn size(&self) -> (u32, u32) {
        match self {
            Chart::Pie(c) => c.size,
            Chart::Bar(c) => c.size,
            Chart::Network(c) => c.size,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    pub color: RGBColor,
}

#[derive(Debug, Clone)]
pub struct PieChart {
    pub title: String,
    pub file_stem: String,
    pub size: (u32, u32),
    pub slices: Vec<PieSlice>,
    /// Angle of the first wedge's leading edge, degrees counter-clockwise from +x.
    pub start_angle: f64,
}

impl PieChart {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Wedge annotation: percentage on the first line, count on the second.
    pub fn wedge_label(&self, slice: &PieSlice) -> (String, String) {
        let total = self.total() as f64;
        let pct = if total > 0.0 { slice.value as f64 / total * 100.0 } else { 0.0 };
        (format!("{pct:.1}%"), format!("({})", slice.value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    /// Bars grow to the right; the first bar is drawn at the top.
    Horizontal,
}

#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub file_stem: String,
    pub size: (u32, u32),
    /// Category axis description.
    pub category_desc: String,
    /// Value axis description.
    pub value_desc: String,
    pub bars: Vec<Bar>,
    /// Bar colours, cycled when shorter than `bars`.
    pub colors: Vec<RGBColor>,
    pub orientation: Orientation,
}

impl BarChart {
    pub fn color_of(&self, i: usize) -> RGBColor {
        if self.colors.is_empty() {
            RGBColor(0, 0, 255)
        } else {
            self.colors[i % self.colors.len()]
        }
    }

    pub fn max_value(&self) -> u32 {
        self.bars.iter().map(|b| b.value).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct NetworkNode {
    pub label: String,
    pub position: (f64, f64),
    /// Drives the colormap.
    pub color_value: f64,
    /// Marker area in square points.
    pub size: f64,
}

#[derive(Debug, Clone)]
pub struct NetworkEdge {
    pub from: usize,
    pub to: usize,
    pub sign: Sign,
}

#[derive(Debug, Clone)]
pub struct NetworkChart {
    pub title: String,
    pub file_stem: String,
    pub size: (u32, u32),
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
    pub colorbar_label: String,
}

impl NetworkChart {
    /// Colormap bounds: min and max of the node colour values.
    pub fn color_range(&self) -> (f64, f64) {
        let (lo, hi) = self
            .nodes
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), n| {
                (lo.min(n.color_value), hi.max(n.color_value))
            });
        if lo.is_finite() && hi.is_finite() { (lo, hi) } else { (0.0, 1.0) }
    }
}
