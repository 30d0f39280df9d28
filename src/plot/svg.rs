//! SVG file output.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use crate::error::AppError;
use crate::plot::chart::Chart;
use crate::plot::draw::{Surface, draw_chart};

/// Write `chart` to `<dir>/<file_stem>.svg`, creating `dir` if needed.
pub fn write_svg(chart: &Chart, dir: &Path) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dir)
        .map_err(|e| AppError::new(4, format!("Failed to create chart directory '{}': {e}", dir.display())))?;

    let path = dir.join(format!("{}.svg", chart.file_stem()));
    {
        let root = SVGBackend::new(&path, chart.size()).into_drawing_area();
        draw_chart(&root, chart, Surface::Image)
            .map_err(|e| AppError::new(4, format!("Failed to draw '{}': {e}", chart.title())))?;
        root.present()
            .map_err(|e| AppError::new(4, format!("Failed to write '{}': {e}", path.display())))?;
    }

    info!(path = %path.display(), "chart written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::chart::{Bar, BarChart, Orientation, PieChart, PieSlice};
    use crate::plot::palette::{BAR_BLUE, LIGHT_CORAL, SKY_BLUE};

    #[test]
    fn writes_bar_chart_svg() {
        let dir = tempfile::tempdir().unwrap();
        let chart = Chart::Bar(BarChart {
            title: "Top Nationalities".to_string(),
            file_stem: "nationalities".to_string(),
            size: (400, 300),
            category_desc: "Nationality".to_string(),
            value_desc: "Number of Players".to_string(),
            bars: vec![
                Bar { label: "ENG".to_string(), value: 3 },
                Bar { label: "FRA".to_string(), value: 1 },
            ],
            colors: vec![BAR_BLUE],
            orientation: Orientation::Vertical,
        });

        let path = write_svg(&chart, &dir.path().join("out")).unwrap();
        assert_eq!(path.file_name().unwrap(), "nationalities.svg");
        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains("<svg"));
        assert!(body.contains("Top Nationalities"));
    }

    #[test]
    fn writes_pie_chart_svg() {
        let dir = tempfile::tempdir().unwrap();
        let chart = Chart::Pie(PieChart {
            title: "Split".to_string(),
            file_stem: "split".to_string(),
            size: (300, 300),
            slices: vec![
                PieSlice { label: "International".to_string(), value: 2, color: SKY_BLUE },
                PieSlice { label: "Domestic".to_string(), value: 1, color: LIGHT_CORAL },
            ],
            start_angle: 140.0,
        });

        let path = write_svg(&chart, dir.path()).unwrap();
        let body = fs::read_to_string(path).unwrap();
        assert!(body.contains("66.7%"));
        assert!(body.contains("Domestic"));
    }
}
