//! Raster bar chart drawn straight into a canvas context.
//!
//! Layout follows the usual category bar chart: each category gets an equal
//! slice of the plot width, 80% of which holds the bar group; each bar takes
//! 90% of its slot inside the group.

use log::{debug, trace, warn};

use crate::canvas::{Canvas, Context2d};
use crate::chart::{ChartConfig, ChartData, ChartRenderer, RendererFactory};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};
use crate::render::{draw_line, draw_rect_outline, fill_rect};
use crate::scale::{Scale, ValueAxis};

const CATEGORY_PERCENTAGE: f32 = 0.8;
const BAR_PERCENTAGE: f32 = 0.9;
const STROKE_WIDTH: u32 = 1;
const TICK_LENGTH: f32 = 4.0;

/// Where one bar was drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    /// Series index.
    pub dataset: usize,
    /// Category index.
    pub bin: usize,
    /// Bar rectangle in canvas pixels.
    pub rect: Rect,
}

/// Bar chart bound to a canvas.
#[derive(Debug)]
pub struct BarChart {
    context: Context2d,
    width: u32,
    height: u32,
    config: ChartConfig,
    axis: Option<ValueAxis>,
    bars: Vec<BarLayout>,
    hovered: Option<usize>,
    frames: u64,
    destroyed: bool,
}

impl BarChart {
    /// Bars from the last draw, series-major.
    #[must_use]
    pub fn bars(&self) -> &[BarLayout] {
        &self.bars
    }

    /// Value axis from the last draw.
    #[must_use]
    pub fn value_axis(&self) -> Option<&ValueAxis> {
        self.axis.as_ref()
    }

    /// Number of frames drawn by this chart instance.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Options this chart was created with.
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Plot area inside the axis margins.
    #[must_use]
    pub fn plot_area(&self) -> Rect {
        plot_area(self.width, self.height)
    }

    /// Highlight the bar under `(x, y)`, if any, and redraw when the
    /// highlighted bar changes. Returns the hovered category.
    pub fn hover(&mut self, x: f32, y: f32) -> Result<Option<usize>> {
        if self.destroyed {
            return Err(Error::ChartDestroyed);
        }
        let point = Point::new(x, y);
        let hit = self.bars.iter().position(|bar| bar.rect.contains(point));
        if hit != self.hovered {
            self.hovered = hit;
            self.draw()?;
        }
        Ok(hit.map(|i| self.bars[i].bin))
    }

    /// Remove any hover highlight.
    pub fn clear_hover(&mut self) -> Result<()> {
        if self.hovered.take().is_some() && !self.destroyed {
            self.draw()?;
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let plot = self.plot_area();
        let values: Vec<f64> = self
            .config
            .data
            .datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .collect();
        let axis = ValueAxis::fit(
            &values,
            self.config.options.begin_at_zero,
            plot.bottom(),
            plot.y,
        )?;
        // Bars grow from zero, or from the axis floor when zero is off-domain
        let (lo, hi) = axis.scale().domain();
        let baseline = axis.scale().scale(0f32.clamp(lo, hi));
        self.bars = layout_bars(&self.config.data, plot, &axis, baseline);

        let bars = &self.bars;
        let hovered = self.hovered;
        let data = &self.config.data;
        self.context.draw(|fb| {
            fb.clear(Rgba::TRANSPARENT);
            draw_grid(fb, plot, &axis, data.bins(), baseline);
            for (i, bar) in bars.iter().enumerate() {
                let style = data.datasets[bar.dataset].style;
                let (fill, stroke) = if hovered == Some(i) {
                    (style.highlight_fill, style.highlight_stroke)
                } else {
                    (style.fill_color, style.stroke_color)
                };
                fill_rect(fb, bar.rect, fill);
                draw_rect_outline(fb, bar.rect, stroke, STROKE_WIDTH);
            }
        })?;

        self.axis = Some(axis);
        self.frames += 1;
        trace!("bar chart frame {} ({} bars)", self.frames, self.bars.len());
        Ok(())
    }
}

impl ChartRenderer for BarChart {
    fn data(&self) -> &ChartData {
        &self.config.data
    }

    fn data_mut(&mut self) -> &mut ChartData {
        &mut self.config.data
    }

    fn update(&mut self) -> Result<()> {
        if self.destroyed {
            return Err(Error::ChartDestroyed);
        }
        if !self.config.data.is_aligned() {
            return Err(Error::Rendering(format!(
                "every series needs {} values",
                self.config.data.bins()
            )));
        }
        self.draw()
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        if let Err(err) = self.context.draw(|fb| fb.clear(Rgba::TRANSPARENT)) {
            warn!("could not clear canvas on destroy: {err}");
        }
        self.destroyed = true;
        self.bars.clear();
        self.hovered = None;
        debug!("bar chart destroyed after {} frames", self.frames);
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

/// Factory for [`BarChart`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarChartFactory;

impl RendererFactory for BarChartFactory {
    type Renderer = BarChart;

    fn create(&mut self, canvas: &Canvas, config: ChartConfig) -> Result<BarChart> {
        debug!(
            "creating bar chart: {} bins, {} series, {}x{}",
            config.data.bins(),
            config.data.datasets.len(),
            canvas.width(),
            canvas.height()
        );
        for dataset in &config.data.datasets {
            trace!(
                "series '{}': fill {}, stroke {}",
                dataset.label,
                dataset.style.fill_color.to_css(),
                dataset.style.stroke_color.to_css()
            );
        }
        let mut chart = BarChart {
            context: canvas.context().clone(),
            width: canvas.width(),
            height: canvas.height(),
            config,
            axis: None,
            bars: Vec::new(),
            hovered: None,
            frames: 0,
            destroyed: false,
        };
        chart.update()?;
        Ok(chart)
    }
}

fn plot_area(width: u32, height: u32) -> Rect {
    let (w, h) = (width as f32, height as f32);
    let left = (w * 0.12).min(40.0).round();
    let right = (w * 0.05).min(10.0).round();
    let top = (h * 0.05).min(10.0).round();
    let bottom = (h * 0.12).min(24.0).round();
    Rect::new(left, top, (w - left - right).max(1.0), (h - top - bottom).max(1.0))
}

fn layout_bars(data: &ChartData, plot: Rect, axis: &ValueAxis, baseline: f32) -> Vec<BarLayout> {
    let bins = data.bins();
    let series = data.datasets.len();
    if bins == 0 || series == 0 {
        return Vec::new();
    }

    let category = plot.width / bins as f32;
    let group = category * CATEGORY_PERCENTAGE;
    let slot = group / series as f32;
    let bar_width = slot * BAR_PERCENTAGE;

    let mut bars = Vec::with_capacity(bins * series);
    for (d, dataset) in data.datasets.iter().enumerate() {
        for (bin, &value) in dataset.data.iter().enumerate() {
            let x = plot.x
                + bin as f32 * category
                + (category - group) / 2.0
                + d as f32 * slot
                + (slot - bar_width) / 2.0;
            let top = axis.to_pixel(value);
            bars.push(BarLayout {
                dataset: d,
                bin,
                rect: Rect::new(x, top.min(baseline), bar_width, (top - baseline).abs()),
            });
        }
    }
    bars
}

fn draw_grid(fb: &mut Framebuffer, plot: Rect, axis: &ValueAxis, bins: usize, baseline: f32) {
    let left = plot.x.round() as i32;
    let right = plot.right().round() as i32;

    for &tick in axis.ticks() {
        let y = axis.scale().scale(tick).round() as i32;
        draw_line(fb, left, y, right, y, Rgba::GRID);
    }

    // Axes
    draw_line(fb, left, plot.y.round() as i32, left, plot.bottom().round() as i32, Rgba::AXIS);
    let base = baseline.round() as i32;
    draw_line(fb, left, base, right, base, Rgba::AXIS);

    // Category separators below the plot
    if bins > 0 {
        let category = plot.width / bins as f32;
        let bottom = plot.bottom().round() as i32;
        for i in 0..=bins {
            let x = (plot.x + i as f32 * category).round() as i32;
            draw_line(fb, x, bottom, x, bottom + TICK_LENGTH as i32, Rgba::AXIS);
        }
    }
}
