//! The histogram widget.
//!
//! [`HistogramWidget`] owns one canvas and the bar chart drawn on it. Its
//! single series starts at zero in every bin; [`render`] overwrites selected
//! bins and redraws, [`reset`] recreates the chart from its construction-time
//! state.
//!
//! # Example
//!
//! ```
//! use histogram_widget::prelude::*;
//!
//! let mut page = Page::with_anchor("elements");
//! let mut anchor = page.anchor("elements").unwrap();
//! let mut widget =
//!     HistogramWidget::new(&mut anchor, BarChartFactory, ["a", "b", "c"], 200, 150, "Belief")
//!         .unwrap();
//!
//! widget.render([5.0, 3.0, 9.0].into_iter().enumerate()).unwrap();
//! assert_eq!(widget.values(), &[5.0, 3.0, 9.0]);
//!
//! widget.reset().unwrap();
//! assert_eq!(widget.values(), &[0.0, 0.0, 0.0]);
//! ```
//!
//! [`render`]: HistogramWidget::render
//! [`reset`]: HistogramWidget::reset

use log::{debug, warn};

use crate::canvas::Canvas;
use crate::chart::{ChartConfig, ChartRenderer, RendererFactory};
use crate::config::WidgetConfig;
use crate::error::{Error, Result};
use crate::page::{Mount, Page};
use crate::render::BarChartFactory;

/// A bar-chart histogram mounted on a page.
#[derive(Debug)]
pub struct HistogramWidget<F: RendererFactory> {
    canvas: Canvas,
    factory: F,
    initial: ChartConfig,
    chart: F::Renderer,
}

impl<F: RendererFactory> HistogramWidget<F> {
    /// Create the canvas, draw an all-zero chart on it, and mount it after
    /// `mount`. Nothing is mounted if the renderer factory fails.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyBins`] if `bins` is empty
    /// - [`Error::InvalidDimensions`] if `width` or `height` is zero
    /// - any error from mounting or from the renderer factory
    pub fn new<M, B, L>(
        mount: &mut M,
        mut factory: F,
        bins: B,
        width: u32,
        height: u32,
        series_label: impl Into<String>,
    ) -> Result<Self>
    where
        M: Mount + ?Sized,
        B: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let labels: Vec<String> = bins.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(Error::EmptyBins);
        }

        let canvas = Canvas::new(width, height)?;
        let initial = ChartConfig::zeroed_bar(labels, series_label);
        let chart = factory.create(&canvas, initial.clone())?;
        mount.insert_after(&canvas)?;
        debug!(
            "histogram widget ready: {} bins, {width}x{height}",
            initial.data.bins()
        );

        Ok(Self {
            canvas,
            factory,
            initial,
            chart,
        })
    }

    /// Build a widget from configuration, mounting it after the configured
    /// anchor on `page`.
    pub fn from_config(page: &mut Page, factory: F, config: &WidgetConfig) -> Result<Self> {
        config.validate()?;
        let mut anchor = page.anchor(&config.anchor_id)?;
        Self::new(
            &mut anchor,
            factory,
            config.bins.iter().cloned(),
            config.width,
            config.height,
            config.series_label.clone(),
        )
    }

    /// Overwrite the bins named in `values` and redraw.
    ///
    /// Bins not mentioned keep their current value. The whole update is
    /// checked first: if any index is out of range or any value is not
    /// finite, nothing changes and nothing is redrawn.
    ///
    /// Accepts anything yielding `(index, value)` pairs: `slice.iter().copied().enumerate()`,
    /// a `BTreeMap<usize, f64>`, `[(1, 7.0)]`, ...
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfRange`] for an index past the last bin
    /// - [`Error::InvalidValue`] for NaN or infinite values
    /// - [`Error::ChartDestroyed`] if a previous [`reset`](Self::reset) failed
    /// - [`Error::Rendering`] if the renderer's series no longer match the bins
    pub fn render<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = (usize, V)>,
        V: Into<f64>,
    {
        let len = self.labels().len();
        let updates = values
            .into_iter()
            .map(|(index, value)| {
                let value = value.into();
                if index >= len {
                    Err(Error::IndexOutOfRange { index, len })
                } else if !value.is_finite() {
                    Err(Error::InvalidValue { index, value })
                } else {
                    Ok((index, value))
                }
            })
            .collect::<Result<Vec<_>>>()
            .and_then(|updates| {
                let data = self.chart.data();
                if data.is_aligned() && data.bins() == len {
                    Ok(updates)
                } else {
                    Err(Error::Rendering(format!(
                        "chart series no longer match the {len} bins"
                    )))
                }
            })
            .map_err(|err| {
                warn!("histogram render rejected: {err}");
                err
            })?;

        for dataset in &mut self.chart.data_mut().datasets {
            for &(index, value) in &updates {
                dataset.data[index] = value;
            }
        }
        debug!("histogram render: {} bins updated", updates.len());
        self.chart.update()
    }

    /// Destroy the chart and recreate it with all bins at zero.
    pub fn reset(&mut self) -> Result<()> {
        self.chart.destroy();
        self.chart = self.factory.create(&self.canvas, self.initial.clone())?;
        debug!("histogram reset");
        Ok(())
    }

    /// Current values of the series.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        self.chart
            .data()
            .datasets
            .first()
            .map_or(&[][..], |dataset| dataset.data.as_slice())
    }

    /// Bin labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.initial.data.labels
    }

    /// Display label of the series.
    #[must_use]
    pub fn series_label(&self) -> &str {
        self.initial
            .data
            .datasets
            .first()
            .map_or("", |dataset| dataset.label.as_str())
    }

    /// The canvas the chart draws on.
    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The current chart instance.
    #[must_use]
    pub fn chart(&self) -> &F::Renderer {
        &self.chart
    }

}

impl HistogramWidget<BarChartFactory> {
    /// Highlight the bar under `(x, y)` in canvas pixels. Returns the hovered
    /// bin, if any.
    pub fn hover(&mut self, x: f32, y: f32) -> Result<Option<usize>> {
        self.chart.hover(x, y)
    }

    /// Remove any hover highlight.
    pub fn clear_hover(&mut self) -> Result<()> {
        self.chart.clear_hover()
    }
}
