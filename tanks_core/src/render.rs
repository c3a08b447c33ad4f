//! The drawing contract between the game model and whatever paints it.

use std::{cell::RefCell, rc::Rc};

/// 2D drawing primitives, shaped after a canvas rendering context
pub trait Surface {
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn fill(&mut self);
    fn stroke(&mut self);

    /// Size of the image behind `src`, `None` while it is not loaded yet
    fn image_size(&mut self, src: &str) -> Option<(f64, f64)>;
    fn draw_image(&mut self, src: &str, x: f64, y: f64);
}

/// The canvas, shared between the Game and the Scene it is lent to
pub type SharedSurface = Rc<RefCell<dyn Surface>>;

#[cfg(test)]
pub(crate) mod recording {
    use super::Surface;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        FillStyle(String),
        StrokeStyle(String),
        LineWidth(f64),
        FillRect(f64, f64, f64, f64),
        BeginPath,
        ClosePath,
        Arc(f64, f64, f64, f64, f64, bool),
        MoveTo(f64, f64),
        LineTo(f64, f64),
        Fill,
        Stroke,
        DrawImage(String, f64, f64),
    }

    /// Surface that remembers every call made on it
    #[derive(Default)]
    pub struct RecordingSurface {
        pub calls: Vec<Call>,
        pub image_sizes: Vec<(String, (f64, f64))>,
    }

    impl Surface for RecordingSurface {
        fn set_fill_style(&mut self, color: &str) {
            self.calls.push(Call::FillStyle(color.to_string()));
        }
        fn set_stroke_style(&mut self, color: &str) {
            self.calls.push(Call::StrokeStyle(color.to_string()));
        }
        fn set_line_width(&mut self, width: f64) {
            self.calls.push(Call::LineWidth(width));
        }
        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.calls.push(Call::FillRect(x, y, width, height));
        }
        fn begin_path(&mut self) {
            self.calls.push(Call::BeginPath);
        }
        fn close_path(&mut self) {
            self.calls.push(Call::ClosePath);
        }
        fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
            self.calls
                .push(Call::Arc(x, y, radius, start, end, anticlockwise));
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.calls.push(Call::MoveTo(x, y));
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.calls.push(Call::LineTo(x, y));
        }
        fn fill(&mut self) {
            self.calls.push(Call::Fill);
        }
        fn stroke(&mut self) {
            self.calls.push(Call::Stroke);
        }
        fn image_size(&mut self, src: &str) -> Option<(f64, f64)> {
            self.image_sizes
                .iter()
                .find(|(known, _)| known == src)
                .map(|(_, size)| *size)
        }
        fn draw_image(&mut self, src: &str, x: f64, y: f64) {
            self.calls.push(Call::DrawImage(src.to_string(), x, y));
        }
    }
}
