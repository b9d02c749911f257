//! Chart model and the renderer seam.
//!
//! A chart is described by a [`ChartConfig`]: category labels, the data
//! series drawn against them, and display options. Drawing is delegated to a
//! [`ChartRenderer`] produced by a [`RendererFactory`], so the widget never
//! depends on one particular drawing backend.

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::error::Result;

/// Chart type. Only bar charts are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    /// Vertical bars, one group per category.
    #[default]
    Bar,
}

/// Fixed visual style of a data series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStyle {
    /// Bar fill.
    pub fill_color: Rgba,
    /// Bar outline.
    pub stroke_color: Rgba,
    /// Bar fill while hovered.
    pub highlight_fill: Rgba,
    /// Bar outline while hovered.
    pub highlight_stroke: Rgba,
}

impl DatasetStyle {
    /// Translucent steel blue: `rgba(151,187,205, 0.5 / 0.8 / 0.75 / 1)`.
    pub const STEEL_BLUE: Self = Self {
        fill_color: Rgba::new(151, 187, 205, 128),
        stroke_color: Rgba::new(151, 187, 205, 204),
        highlight_fill: Rgba::new(151, 187, 205, 191),
        highlight_stroke: Rgba::new(151, 187, 205, 255),
    };
}

impl Default for DatasetStyle {
    fn default() -> Self {
        Self::STEEL_BLUE
    }
}

/// A named series with one value per category.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Legend label.
    pub label: String,
    /// Colors.
    pub style: DatasetStyle,
    /// Values aligned by index to [`ChartData::labels`].
    pub data: Vec<f64>,
}

impl Dataset {
    /// A series of `len` zeros.
    #[must_use]
    pub fn zeros(label: impl Into<String>, len: usize) -> Self {
        Self {
            label: label.into(),
            style: DatasetStyle::default(),
            data: vec![0.0; len],
        }
    }
}

/// Category labels plus the series plotted against them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    /// Category (x axis) labels.
    pub labels: Vec<String>,
    /// Data series.
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// Number of categories.
    #[must_use]
    pub fn bins(&self) -> usize {
        self.labels.len()
    }

    /// True when every series has exactly one value per category.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.datasets.iter().all(|d| d.data.len() == self.labels.len())
    }
}

/// Display options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Force the value axis to include zero.
    pub begin_at_zero: bool,
    /// Resize with the container. Bar charts here are always fixed-size.
    pub responsive: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            begin_at_zero: true,
            responsive: false,
        }
    }
}

/// Everything needed to (re)create a chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartConfig {
    /// Chart type.
    pub kind: ChartKind,
    /// Labels and series.
    pub data: ChartData,
    /// Display options.
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Bar chart with a single all-zero series over `labels`.
    #[must_use]
    pub fn zeroed_bar(labels: Vec<String>, series_label: impl Into<String>) -> Self {
        let dataset = Dataset::zeros(series_label, labels.len());
        Self {
            kind: ChartKind::Bar,
            data: ChartData {
                labels,
                datasets: vec![dataset],
            },
            options: ChartOptions::default(),
        }
    }
}

/// A live chart bound to a canvas.
///
/// The chart owns its data; callers mutate it through [`data_mut`] and then
/// call [`update`] to redraw.
///
/// [`data_mut`]: ChartRenderer::data_mut
/// [`update`]: ChartRenderer::update
pub trait ChartRenderer {
    /// Current chart data.
    fn data(&self) -> &ChartData;

    /// Mutable chart data. Changes are not visible until [`ChartRenderer::update`].
    fn data_mut(&mut self) -> &mut ChartData;

    /// Redraw with the current data.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ChartDestroyed`] after [`ChartRenderer::destroy`].
    fn update(&mut self) -> Result<()>;

    /// Release the chart and clear its canvas. Idempotent.
    fn destroy(&mut self);

    /// Whether [`ChartRenderer::destroy`] has been called.
    fn is_destroyed(&self) -> bool;
}

/// Creates charts bound to a canvas.
pub trait RendererFactory {
    /// Chart type produced.
    type Renderer: ChartRenderer;

    /// Build a chart on `canvas` and draw its first frame.
    fn create(&mut self, canvas: &Canvas, config: ChartConfig) -> Result<Self::Renderer>;
}
