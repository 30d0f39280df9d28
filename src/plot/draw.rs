//! Draw a [`Chart`] onto any Plotters drawing area.
//!
//! The same code paints SVG files and the terminal viewer; `Surface` only
//! adjusts sizes and marker shapes for the target.

use std::iter::once;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::domain::Sign;
use crate::plot::chart::{BarChart, Chart, NetworkChart, Orientation, PieChart};
use crate::plot::palette::{OPPOSE_EDGE, SUPPORT_EDGE, normalize, viridis};

pub type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Rendering target class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Full-resolution image (SVG).
    Image,
    /// Terminal cells via the Ratatui backend.
    Terminal,
}

struct Metrics {
    caption: f64,
    label: f64,
    margin: i32,
    x_area: i32,
    y_area: i32,
    /// Left label area when categories run down the y axis.
    wide_y_area: i32,
    bar_gap: u32,
    /// Text, axis, and outline colour.
    fg: RGBColor,
}

impl Metrics {
    fn font(&self, size: f64) -> TextStyle<'static> {
        ("sans-serif", size).into_font().color(&self.fg)
    }

    fn centered(&self, size: f64) -> TextStyle<'static> {
        self.font(size).pos(Pos::new(HPos::Center, VPos::Center))
    }
}

impl Surface {
    fn metrics(self) -> Metrics {
        match self {
            Surface::Image => Metrics {
                caption: 20.0,
                label: 13.0,
                margin: 15,
                x_area: 50,
                y_area: 60,
                wide_y_area: 190,
                bar_gap: 8,
                fg: BLACK,
            },
            // Terminal cells are low-res, so keep label areas compact.
            Surface::Terminal => Metrics {
                caption: 10.0,
                label: 10.0,
                margin: 1,
                x_area: 3,
                y_area: 6,
                wide_y_area: 14,
                bar_gap: 1,
                fg: WHITE,
            },
        }
    }
}

pub fn draw_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &Chart, surface: Surface) -> DrawResult<DB> {
    // The terminal keeps its own background.
    if surface == Surface::Image {
        root.fill(&WHITE)?;
    }
    let m = surface.metrics();
    match chart {
        Chart::Pie(pie) => draw_pie(root, pie, &m),
        Chart::Bar(bars) => draw_bars(root, bars, &m),
        Chart::Network(net) => draw_network(root, net, surface, &m),
    }
}

fn draw_pie<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, pie: &PieChart, m: &Metrics) -> DrawResult<DB> {
    let area = root.titled(&pie.title, m.font(m.caption))?;
    let total = pie.total();
    if total == 0 {
        return Ok(());
    }

    let (w, h) = area.dim_in_pixel();
    let center = (w as f64 / 2.0, h as f64 / 2.0);
    let radius = w.min(h) as f64 * 0.36;
    // Pixel y grows downward; angles run counter-clockwise.
    let at = |angle_deg: f64, r: f64| {
        let a = angle_deg.to_radians();
        ((center.0 + r * a.cos()).round() as i32, (center.1 - r * a.sin()).round() as i32)
    };

    let mut angle = pie.start_angle;
    for slice in &pie.slices {
        if slice.value == 0 {
            continue;
        }
        let sweep = slice.value as f64 / total as f64 * 360.0;

        let steps = (sweep / 2.0).ceil().max(1.0) as usize;
        let mut wedge = vec![at(0.0, 0.0)];
        wedge.extend((0..=steps).map(|i| at(angle + sweep * i as f64 / steps as f64, radius)));

        area.draw(&Polygon::new(wedge.clone(), slice.color.filled()))?;
        wedge.push(wedge[0]);
        area.draw(&PathElement::new(wedge, m.fg.stroke_width(1)))?;

        let mid = angle + sweep / 2.0;
        let (pct, count) = pie.wedge_label(slice);
        let (lx, ly) = at(mid, radius * 0.6);
        let line = (m.label * 0.7).round() as i32;
        area.draw(&Text::new(pct, (lx, ly - line), m.centered(m.label)))?;
        area.draw(&Text::new(count, (lx, ly + line), m.centered(m.label)))?;
        area.draw(&Text::new(slice.label.clone(), at(mid, radius * 1.15), m.centered(m.label)))?;

        angle += sweep;
    }
    Ok(())
}

fn segment_label(labels: &[&str], v: &SegmentValue<u32>) -> String {
    match v {
        SegmentValue::CenterOf(i) => labels.get(*i as usize).map(|s| s.to_string()).unwrap_or_default(),
        _ => String::new(),
    }
}

fn draw_bars<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &BarChart, m: &Metrics) -> DrawResult<DB> {
    if chart.bars.is_empty() {
        root.titled(&chart.title, m.font(m.caption))?;
        return Ok(());
    }

    let n = chart.bars.len() as u32;
    let max = chart.max_value();
    let top = max + max / 10 + 1;

    match chart.orientation {
        Orientation::Vertical => {
            let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
            let mut ctx = ChartBuilder::on(root)
                .caption(&chart.title, m.font(m.caption))
                .margin(m.margin)
                .x_label_area_size(m.x_area)
                .y_label_area_size(m.y_area)
                .build_cartesian_2d((0u32..n).into_segmented(), 0u32..top)?;

            ctx.configure_mesh()
                .disable_x_mesh()
                .x_labels(labels.len() + 1)
                .x_label_formatter(&|v| segment_label(&labels, v))
                .x_desc(chart.category_desc.as_str())
                .y_desc(chart.value_desc.as_str())
                .label_style(m.font(m.label))
                .axis_style(m.fg)
                .draw()?;

            ctx.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
                let x = i as u32;
                let mut rect = Rectangle::new(
                    [(SegmentValue::Exact(x), 0), (SegmentValue::Exact(x + 1), bar.value)],
                    chart.color_of(i).filled(),
                );
                rect.set_margin(0, 0, m.bar_gap, m.bar_gap);
                rect
            }))?;
        }
        Orientation::Horizontal => {
            // Slot 0 is the bottom row, so the first bar takes the highest slot.
            let labels: Vec<&str> = chart.bars.iter().rev().map(|b| b.label.as_str()).collect();
            let mut ctx = ChartBuilder::on(root)
                .caption(&chart.title, m.font(m.caption))
                .margin(m.margin)
                .x_label_area_size(m.x_area)
                .y_label_area_size(m.wide_y_area)
                .build_cartesian_2d(0u32..top, (0u32..n).into_segmented())?;

            ctx.configure_mesh()
                .disable_y_mesh()
                .y_labels(labels.len() + 1)
                .y_label_formatter(&|v| segment_label(&labels, v))
                .x_desc(chart.value_desc.as_str())
                .y_desc(chart.category_desc.as_str())
                .label_style(m.font(m.label))
                .axis_style(m.fg)
                .draw()?;

            ctx.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
                let slot = n - 1 - i as u32;
                let mut rect = Rectangle::new(
                    [(0, SegmentValue::Exact(slot)), (bar.value, SegmentValue::Exact(slot + 1))],
                    chart.color_of(i).filled(),
                );
                rect.set_margin(m.bar_gap / 2, m.bar_gap / 2, 0, 0);
                rect
            }))?;
        }
    }
    Ok(())
}

/// Marker radius in pixels for a matplotlib-style marker area (pt², 100 dpi).
fn marker_radius(size: f64) -> i32 {
    let radius_pt = size.max(0.0).sqrt() / 2.0;
    (radius_pt * 100.0 / 72.0).round().max(2.0) as i32
}

/// Arrowhead triangle ending just short of `to`; `None` for self-loops.
fn arrow_head(from: (f64, f64), to: (f64, f64), len: f64) -> Option<Vec<(f64, f64)>> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let d = (dx * dx + dy * dy).sqrt();
    if d < 1e-9 {
        return None;
    }
    let (ux, uy) = (dx / d, dy / d);
    let tip = (to.0 - ux * 0.03, to.1 - uy * 0.03);
    let base = (tip.0 - ux * len, tip.1 - uy * len);
    let half = len * 0.4;
    Some(vec![
        tip,
        (base.0 - uy * half, base.1 + ux * half),
        (base.0 + uy * half, base.1 - ux * half),
    ])
}

fn draw_network<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    net: &NetworkChart,
    surface: Surface,
    m: &Metrics,
) -> DrawResult<DB> {
    let area = root.titled(&net.title, m.font(m.caption))?;
    let (w, _) = area.dim_in_pixel();
    let (plot_area, bar_area) = area.split_horizontally(w as i32 * 85 / 100);
    let (lo, hi) = net.color_range();

    let mut ctx = ChartBuilder::on(&plot_area)
        .margin(m.margin)
        .build_cartesian_2d(-1.15f64..1.15f64, -1.15f64..1.15f64)?;

    for e in &net.edges {
        let (Some(a), Some(b)) = (net.nodes.get(e.from), net.nodes.get(e.to)) else {
            continue;
        };
        let color = match e.sign {
            Sign::Support => SUPPORT_EDGE,
            Sign::Oppose => OPPOSE_EDGE,
        };
        ctx.draw_series(once(PathElement::new(
            vec![a.position, b.position],
            color.mix(0.7).stroke_width(1),
        )))?;
        if let Some(head) = arrow_head(a.position, b.position, 0.035) {
            ctx.draw_series(once(Polygon::new(head, color.mix(0.7).filled())))?;
        }
    }

    let node_color = |v: f64| viridis(normalize(v, lo, hi));
    match surface {
        Surface::Image => {
            ctx.draw_series(net.nodes.iter().map(|n| {
                Circle::new(n.position, marker_radius(n.size), node_color(n.color_value).filled())
            }))?;
        }
        // Circle radii come out badly scaled on the terminal canvas; a
        // coloured pixel reads as a clean dot instead.
        Surface::Terminal => {
            ctx.draw_series(net.nodes.iter().map(|n| Pixel::new(n.position, node_color(n.color_value))))?;
        }
    }

    ctx.draw_series(
        net.nodes
            .iter()
            .map(|n| Text::new(n.label.clone(), n.position, m.centered(m.label * 0.85))),
    )?;

    draw_colorbar(&bar_area, &net.colorbar_label, lo, hi, m)
}

fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    label: &str,
    lo: f64,
    hi: f64,
    m: &Metrics,
) -> DrawResult<DB> {
    let (lo, hi) = if hi > lo { (lo, hi) } else { (lo - 0.5, lo + 0.5) };

    let mut ctx = ChartBuilder::on(area)
        .margin(m.margin)
        .set_label_area_size(LabelAreaPosition::Right, m.y_area)
        .build_cartesian_2d(0f64..1f64, lo..hi)?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_labels(6)
        .y_label_formatter(&|v| format!("{v:.3}"))
        .y_desc(label)
        .label_style(m.font(m.label))
        .axis_style(m.fg)
        .draw()?;

    const STEPS: usize = 64;
    let step = (hi - lo) / STEPS as f64;
    ctx.draw_series((0..STEPS).map(|i| {
        let y0 = lo + step * i as f64;
        Rectangle::new(
            [(0.0, y0), (1.0, y0 + step)],
            viridis(i as f64 / (STEPS - 1) as f64).filled(),
        )
    }))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_head_points_at_target() {
        let head = arrow_head((0.0, 0.0), (1.0, 0.0), 0.1).unwrap();
        assert!((head[0].0 - 0.97).abs() < 1e-12);
        assert!(head[1].1 > 0.0 && head[2].1 < 0.0);
        assert!(arrow_head((0.5, 0.5), (0.5, 0.5), 0.1).is_none());
    }

    #[test]
    fn marker_radius_has_a_floor() {
        assert_eq!(marker_radius(0.0), 2);
        assert!(marker_radius(400.0) > marker_radius(100.0));
    }
}
