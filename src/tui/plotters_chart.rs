//! Plotters-powered chart widget for Ratatui.
//!
//! Plotters output is drawn into the Ratatui buffer through
//! `plotters-ratatui-backend`, using the same drawing code as the SVG files.

use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::plot::{Chart, Surface, draw_chart};

/// Render-only wrapper: the chart is fully computed before drawing.
pub struct ChartWidget<'a> {
    pub chart: &'a Chart,
}

impl<'a> Widget for ChartWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters may fail to lay out a chart in a tiny area; show a hint instead.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let chart = self.chart;
        let widget = widget_fn(move |root| {
            draw_chart(&root, chart, Surface::Terminal)?;
            Ok(())
        });

        widget.render(area, buf);
    }
}
