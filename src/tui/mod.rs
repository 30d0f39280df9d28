//! Ratatui-based chart viewer.
//!
//! Shows one chart at a time; ←/→ page through the charts and `q` (or Esc)
//! quits. The terminal is restored on exit, including on error.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tracing::debug;

use crate::error::AppError;
use crate::plot::Chart;

mod plotters_chart;

use plotters_chart::ChartWidget;

/// Show `charts` in the terminal until the user quits.
pub fn show_charts(charts: &[Chart]) -> Result<(), AppError> {
    if charts.is_empty() {
        return Ok(());
    }

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut viewer = Viewer::new(charts);
    viewer.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct Viewer<'a> {
    charts: &'a [Chart],
    current: usize,
}

impl<'a> Viewer<'a> {
    fn new(charts: &'a [Chart]) -> Self {
        Self { charts, current: 0 }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the viewer should close.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                self.current = (self.current + 1) % self.charts.len();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.current = (self.current + self.charts.len() - 1) % self.charts.len();
            }
            _ => {}
        }
        debug!(chart = self.current, "viewer page");
        false
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(frame.area());

        self.draw_chart(frame, chunks[0]);
        self.draw_footer(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chart = &self.charts[self.current];
        let block = Block::default().title(chart.title()).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);
        frame.render_widget(ChartWidget { chart }, inner);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "←/→ page  q quit";
        let status = format!("chart {}/{}", self.current + 1, self.charts.len());
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::{BarChart, Orientation};

    fn bar(title: &str) -> Chart {
        Chart::Bar(BarChart {
            title: title.to_string(),
            file_stem: title.to_string(),
            size: (100, 100),
            category_desc: String::new(),
            value_desc: String::new(),
            bars: Vec::new(),
            colors: Vec::new(),
            orientation: Orientation::Vertical,
        })
    }

    #[test]
    fn paging_wraps_both_ways() {
        let charts = vec![bar("a"), bar("b"), bar("c")];
        let mut viewer = Viewer::new(&charts);
        assert!(!viewer.handle_key(KeyCode::Left));
        assert_eq!(viewer.current, 2);
        assert!(!viewer.handle_key(KeyCode::Right));
        assert_eq!(viewer.current, 0);
        assert!(viewer.handle_key(KeyCode::Char('q')));
    }
}
