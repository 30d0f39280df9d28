//! Chart descriptions and their renderers (SVG, terminal, ASCII).

pub mod ascii;
pub mod chart;
pub mod draw;
pub mod palette;
pub mod svg;

pub use ascii::render_ascii_bars;
pub use chart::{Bar, BarChart, Chart, NetworkChart, NetworkEdge, NetworkNode, Orientation, PieChart, PieSlice};
pub use draw::{Surface, draw_chart};
pub use svg::write_svg;
