//! # histogram-widget
//!
//! A canvas-backed bar chart for histograms that are redrawn as new counts
//! arrive, such as the distribution of beliefs across a simulated population.
//!
//! The widget mounts a canvas after an anchor element, seeds one series with
//! a zero for every bin, and then supports two operations:
//!
//! - [`render`](widget::HistogramWidget::render): overwrite some or all bins and redraw
//! - [`reset`](widget::HistogramWidget::reset): recreate the chart with all bins at zero
//!
//! The anchor ([`page::Mount`]) and the drawing backend
//! ([`chart::RendererFactory`]) are passed in, so the widget can be driven
//! against the bundled raster [`render::BarChart`] or any other renderer.
//!
//! ## Quick Start
//!
//! ```rust
//! use histogram_widget::prelude::*;
//! use histogram_widget::binning::{belief_counts, integer_edges};
//!
//! let mut page = Page::with_anchor("elements");
//! let mut widget = HistogramWidget::new(
//!     &mut page.anchor("elements")?,
//!     BarChartFactory,
//!     ["A", "B", "C"],
//!     400,
//!     400,
//!     "Emotivist beliefs",
//! )?;
//!
//! let counts = belief_counts(["A", "B", "B", "A"], &integer_edges(4))?;
//! widget.render(counts.iter().copied().enumerate())?;
//! assert_eq!(widget.values(), &[2.0, 2.0, 0.0]);
//!
//! let png = widget.canvas().to_png()?;
//! assert!(!png.is_empty());
//! # Ok::<(), histogram_widget::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `wasm`: JavaScript bindings via wasm-bindgen

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and CSS color parsing.
pub mod color;

/// Pixel buffer backing canvas contexts.
pub mod framebuffer;

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Value-to-pixel scales and axis fitting.
pub mod scale;

// ============================================================================
// Widget Modules
// ============================================================================

/// Canvas elements and their 2D context.
pub mod canvas;

/// Page model and mount points.
pub mod page;

/// Chart model and renderer traits.
pub mod chart;

/// The histogram widget.
pub mod widget;

/// Histogram counting for widget input.
pub mod binning;

/// YAML widget configuration.
pub mod config;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization and the bar chart renderer.
pub mod render;

/// Output encoders (PNG, data URLs).
pub mod output;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for widget operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use histogram_widget::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::chart::{ChartConfig, ChartData, ChartRenderer, Dataset, RendererFactory};
    pub use crate::color::Rgba;
    pub use crate::config::WidgetConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::output::PngEncoder;
    pub use crate::page::{Mount, Page, DEFAULT_ANCHOR_ID};
    pub use crate::render::{BarChart, BarChartFactory};
    pub use crate::widget::HistogramWidget;
}
