//! Rasterization and the bundled bar-chart renderer.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: axis and tick lines
//! - **Rect fill/outline**: alpha-blended bars and bar strokes
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod bar_chart;
mod primitives;

pub use bar_chart::{BarChart, BarChartFactory, BarLayout};
pub use primitives::{draw_dotted_rect_outline, draw_line, draw_rect_outline, fill_rect};
