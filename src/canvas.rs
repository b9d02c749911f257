//! Canvas elements and their 2D drawing context.
//!
//! A [`Canvas`] is a cheap handle: clones share the same [`Context2d`], the
//! way a page node and a chart both refer to one `<canvas>` in a browser.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::output::PngEncoder;
use crate::render::draw_dotted_rect_outline;

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    /// Solid line.
    Solid,
    /// Alternating on/off pixels.
    Dotted,
}

impl BorderStyle {
    fn as_css(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dotted => "dotted",
        }
    }
}

/// Inline style of a canvas element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasStyle {
    /// Border width in pixels.
    pub border_width: u32,
    /// Border line style.
    pub border_style: BorderStyle,
    /// Border color.
    pub border_color: Rgba,
    /// Center horizontally within the parent (`margin: 0px auto`).
    pub centered: bool,
    /// Clip overflowing content (`overflow: hidden`).
    pub clip: bool,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            border_width: 1,
            border_style: BorderStyle::Dotted,
            border_color: Rgba::BLACK,
            centered: true,
            clip: true,
        }
    }
}

impl CanvasStyle {
    /// CSS declaration list for the `style` attribute.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = format!("border:{}px {};", self.border_width, self.border_style.as_css());
        if self.centered {
            css.push_str(" margin: 0px auto;");
        }
        if self.clip {
            css.push_str(" overflow: hidden;");
        }
        css
    }
}

/// Shared handle to a canvas's pixel buffer.
#[derive(Clone)]
pub struct Context2d(Rc<RefCell<Framebuffer>>);

impl Context2d {
    fn new(fb: Framebuffer) -> Self {
        Self(Rc::new(RefCell::new(fb)))
    }

    /// Read access to the pixels.
    pub fn pixels(&self) -> Result<Ref<'_, Framebuffer>> {
        self.0
            .try_borrow()
            .map_err(|_| Error::Rendering("canvas context is being drawn to".to_string()))
    }

    /// Run `draw` with exclusive access to the pixels.
    pub fn draw<T>(&self, draw: impl FnOnce(&mut Framebuffer) -> T) -> Result<T> {
        let mut fb = self
            .0
            .try_borrow_mut()
            .map_err(|_| Error::Rendering("canvas context is already borrowed".to_string()))?;
        Ok(draw(&mut fb))
    }

    /// Whether two handles refer to the same canvas.
    #[must_use]
    pub fn same_canvas(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Context2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(fb) => write!(f, "Context2d({}x{})", fb.width(), fb.height()),
            Err(_) => f.write_str("Context2d(<borrowed>)"),
        }
    }
}

/// A fixed-size canvas element.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    style: CanvasStyle,
    context: Context2d,
}

impl Canvas {
    /// Create a transparent canvas with the default dotted-border style.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_style(width, height, CanvasStyle::default())
    }

    /// Create a canvas with an explicit style.
    pub fn with_style(width: u32, height: u32, style: CanvasStyle) -> Result<Self> {
        let fb = Framebuffer::new(width, height)?;
        Ok(Self {
            width,
            height,
            style,
            context: Context2d::new(fb),
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Inline style.
    #[must_use]
    pub const fn style(&self) -> &CanvasStyle {
        &self.style
    }

    /// The 2D drawing context.
    #[must_use]
    pub fn context(&self) -> &Context2d {
        &self.context
    }

    /// Copy of the current pixels.
    pub fn snapshot(&self) -> Result<Framebuffer> {
        Ok(self.context.pixels()?.clone())
    }

    /// The element as HTML markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "<canvas width='{}' height='{}' style='{}'></canvas>",
            self.width,
            self.height,
            self.style.to_css()
        )
    }

    /// The element as displayed: canvas pixels over a white page, framed by
    /// its border.
    pub fn screenshot(&self) -> Result<Framebuffer> {
        let b = self.style.border_width;
        let mut out = Framebuffer::new(self.width + 2 * b, self.height + 2 * b)?;
        out.clear(Rgba::WHITE);

        let pixels = self.context.pixels()?;
        for y in 0..self.height {
            for x in 0..self.width {
                if let Some(px) = pixels.get_pixel(x, y) {
                    out.set_pixel(x + b, y + b, px.over(Rgba::WHITE));
                }
            }
        }

        for ring in 0..b {
            let (w, h) = (out.width() - 2 * ring, out.height() - 2 * ring);
            match self.style.border_style {
                BorderStyle::Dotted => {
                    draw_dotted_rect_outline(&mut out, ring, ring, w, h, self.style.border_color);
                }
                BorderStyle::Solid => {
                    let c = self.style.border_color;
                    out.fill_rect(ring, ring, w, 1, c);
                    out.fill_rect(ring, ring + h - 1, w, 1, c);
                    out.fill_rect(ring, ring, 1, h, c);
                    out.fill_rect(ring + w - 1, ring, 1, h, c);
                }
            }
        }
        Ok(out)
    }

    /// Canvas pixels as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        PngEncoder::to_bytes(&*self.context.pixels()?)
    }

    /// Canvas pixels as a `data:image/png;base64,...` URL.
    pub fn to_data_url(&self) -> Result<String> {
        PngEncoder::to_data_url(&*self.context.pixels()?)
    }
}
