//! Pixel buffer figures are rasterized into

use super::color::Color;
use super::shapes::Shape;

/// Row-major RGBA raster, transparent until painted
#[derive(Debug, Clone)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
        }
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|x| *x < self.width)?;
        let y = u32::try_from(y).ok().filter(|y| *y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(i64::from(x), i64::from(y)).map(|i| self.pixels[i])
    }

    /// Composite `color` over the pixel at (x, y); off-canvas writes are dropped
    pub fn paint(&mut self, x: i64, y: i64, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.over(self.pixels[i]);
        }
    }

    pub fn draw<S: Shape>(&mut self, shape: &S) {
        shape.rasterize(self);
    }

    /// Interleaved 8-bit RGBA, as PNG encoders expect
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba8()).collect()
    }

    /// Nothing painted with any opacity
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|c| c.a <= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = Canvas::new(100, 50);
        assert_eq!(canvas.pixels.len(), 5000);
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_paint_composites() {
        let mut canvas = Canvas::new(3, 3);
        canvas.paint(1, 1, Color::rgb(0.0, 0.0, 1.0));
        canvas.paint(1, 1, Color::rgba(1.0, 0.0, 0.0, 0.5));
        let px = canvas.pixel(1, 1).unwrap();
        assert!(px.r > 0.4 && px.b > 0.4);
    }

    #[test]
    fn test_off_canvas_dropped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.paint(4, 0, Color::BLACK);
        canvas.paint(-1, 2, Color::BLACK);
        assert!(canvas.is_blank());
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_rgba8_layout() {
        let mut canvas = Canvas::new(2, 1);
        canvas.paint(1, 0, Color::WHITE);
        assert_eq!(canvas.to_rgba8(), vec![0, 0, 0, 0, 255, 255, 255, 255]);
    }
}
