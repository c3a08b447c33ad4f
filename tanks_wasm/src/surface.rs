//! Canvas backed implementation of the game's drawing contract

use std::collections::{hash_map::Entry, HashMap};

use tanks_core::render::Surface;
use tracing::warn;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    /// Images by source, loaded the first time they are asked for
    images: HashMap<String, HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self {
            context,
            images: HashMap::new(),
        }
    }
}

impl Surface for CanvasSurface {
    fn set_fill_style(&mut self, color: &str) {
        self.context.set_fill_style(&color.into());
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.context.set_stroke_style(&color.into());
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.fill_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        if let Err(err) = self
            .context
            .arc_with_anticlockwise(x, y, radius, start, end, anticlockwise)
        {
            warn!(?err, "arc could not be drawn");
        }
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn fill(&mut self) {
        self.context.fill();
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }

    fn image_size(&mut self, src: &str) -> Option<(f64, f64)> {
        let image = match self.images.entry(src.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let image = HtmlImageElement::new().ok()?;
                image.set_src(src);
                entry.insert(image)
            }
        };

        (image.complete() && image.natural_width() > 0)
            .then(|| (image.width().into(), image.height().into()))
    }

    fn draw_image(&mut self, src: &str, x: f64, y: f64) {
        if let Some(image) = self.images.get(src) {
            if let Err(err) = self.context.draw_image_with_html_image_element(image, x, y) {
                warn!(?err, src, "image could not be drawn");
            }
        }
    }
}
