//! Layout elements genpdf does not ship: a fixed-height title cell, a gap measured in
//! millimetres and an image that moves to the next page instead of running off the bottom.

use genpdf::elements::Image;
use genpdf::error::Error;
use genpdf::style::Style;
use genpdf::{render, Element, Mm, Position, RenderResult, Size};

/// A single line of text centered horizontally and vertically in a full-width cell of fixed height.
pub struct TitleCell {
    text: String,
    height: Mm,
    style: Style,
}

impl TitleCell {
    /// Creates a title cell.
    pub fn new(text: impl Into<String>, height: impl Into<Mm>) -> Self {
        Self {
            text: text.into(),
            height: height.into(),
            style: Style::new(),
        }
    }

    /// Sets the text style and returns the updated element.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Element for TitleCell {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let style = style.and(self.style);
        let mut result = RenderResult::default();

        let available = area.size();
        if self.height > available.height {
            result.has_more = true;
            return Ok(result);
        }

        let text_width = style.str_width(&context.font_cache, &self.text);
        let line_height = style.line_height(&context.font_cache);
        let x = if text_width < available.width {
            (available.width - text_width) / 2.0
        } else {
            Mm::default()
        };
        let y = if line_height < self.height {
            (self.height - line_height) / 2.0
        } else {
            Mm::default()
        };

        if let Some(mut section) = area.text_section(&context.font_cache, Position::new(x, y), style) {
            section.print_str(&self.text, style)?;
        } else {
            result.has_more = true;
            return Ok(result);
        }

        result.size = Size::new(available.width, self.height);
        Ok(result)
    }
}

/// Empty vertical space. Truncated at the bottom of a page rather than carried over.
pub struct VerticalSpace {
    height: Mm,
}

impl VerticalSpace {
    /// Creates a gap of the given height.
    pub fn new(height: impl Into<Mm>) -> Self {
        Self {
            height: height.into(),
        }
    }
}

impl Element for VerticalSpace {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let height = if self.height > available {
            available
        } else {
            self.height
        };

        Ok(RenderResult {
            size: Size::new(Mm::default(), height),
            ..RenderResult::default()
        })
    }
}

/// An image kept whole on one page.
///
/// When the remaining area is shorter than the image, nothing is drawn and the
/// image is retried on the next page. It is placed there even if it is taller
/// than a full page, so layout always terminates.
pub struct KeepTogetherImage {
    image: Image,
    height: Mm,
    deferred: bool,
}

impl KeepTogetherImage {
    /// Wraps `image`, whose rendered height is `height`.
    pub fn new(image: Image, height: impl Into<Mm>) -> Self {
        Self {
            image,
            height: height.into(),
            deferred: false,
        }
    }
}

impl Element for KeepTogetherImage {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        if !self.deferred && self.height > area.size().height {
            self.deferred = true;
            return Ok(RenderResult {
                has_more: true,
                ..RenderResult::default()
            });
        }
        self.image.render(context, area, style)
    }
}
