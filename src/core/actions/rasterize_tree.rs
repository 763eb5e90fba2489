//! Draws fractal trees into RGBA pixel buffers.

use rand::Rng;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::tree::canvas::{CanvasPoint, TreeCanvas};
use crate::core::fractals::tree::errors::TreeError;
use crate::core::fractals::tree::grow::{TreeStats, draw_tree};
use crate::core::fractals::tree::params::TreeParams;

/// Spacing between the discs stamped along a line, in pixels.
const LINE_STEP: f64 = 0.5;
/// Below this radius a stamp covers just the pixel under its centre.
const MIN_DISC_RADIUS: f64 = 0.75;

/// [`TreeCanvas`] that paints opaque pixels straight into a [`PixelBuffer`].
///
/// Anything outside the buffer is clipped.
pub struct PixelCanvas<'a> {
    buffer: &'a mut PixelBuffer,
}

impl<'a> PixelCanvas<'a> {
    pub fn new(buffer: &'a mut PixelBuffer) -> Self {
        Self { buffer }
    }

    fn plot(&mut self, x: i64, y: i64, colour: Colour) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };

        // out of range pixels are clipped
        let _ = self.buffer.set_pixel(Point::new(x, y), colour);
    }

    fn stamp_disc(&mut self, centre: CanvasPoint, radius: f64, colour: Colour) {
        if radius < MIN_DISC_RADIUS {
            self.plot(centre.x.floor() as i64, centre.y.floor() as i64, colour);
            return;
        }

        let pixel_rect = self.buffer.pixel_rect();
        let min_x = (centre.x - radius).floor().max(0.0) as i64;
        let min_y = (centre.y - radius).floor().max(0.0) as i64;
        let max_x = (centre.x + radius).ceil().min(f64::from(pixel_rect.width())) as i64;
        let max_y = (centre.y + radius).ceil().min(f64::from(pixel_rect.height())) as i64;
        let radius_squared = radius * radius;

        for y in min_y..max_y {
            for x in min_x..max_x {
                let dx = x as f64 + 0.5 - centre.x;
                let dy = y as f64 + 0.5 - centre.y;

                if dx * dx + dy * dy <= radius_squared {
                    self.plot(x, y, colour);
                }
            }
        }
    }
}

impl TreeCanvas for PixelCanvas<'_> {
    fn draw_line(&mut self, from: CanvasPoint, to: CanvasPoint, width: f64, colour: Colour) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let steps = ((dx.hypot(dy) / LINE_STEP).ceil() as u32).max(1);
        let radius = width / 2.0;

        for step in 0..=steps {
            let t = f64::from(step) / f64::from(steps);
            self.stamp_disc(
                CanvasPoint::new(from.x + dx * t, from.y + dy * t),
                radius,
                colour,
            );
        }
    }

    fn fill_circle(&mut self, centre: CanvasPoint, radius: f64, colour: Colour) {
        self.stamp_disc(centre, radius, colour);
    }
}

/// Grows a tree over an opaque `background` and returns the finished frame.
pub fn render_tree<R: Rng + ?Sized>(
    pixel_rect: PixelRect,
    params: &TreeParams,
    background: Colour,
    rng: &mut R,
) -> Result<(PixelBuffer, TreeStats), TreeError> {
    params.validate()?;

    let mut buffer = PixelBuffer::filled(pixel_rect, background);
    let stats = draw_tree(&mut PixelCanvas::new(&mut buffer), params, pixel_rect, rng)?;

    Ok((buffer, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const RED: Colour = Colour::new(255, 0, 0);

    fn blank(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::filled(PixelRect::new(width, height).unwrap(), Colour::BLACK)
    }

    fn painted(buffer: &PixelBuffer, colour: Colour) -> usize {
        buffer
            .buffer()
            .chunks_exact(4)
            .filter(|px| *px == colour.to_rgba())
            .count()
    }

    #[test]
    fn test_horizontal_line_covers_its_row() {
        let mut buffer = blank(10, 5);

        PixelCanvas::new(&mut buffer).draw_line(
            CanvasPoint::new(0.0, 2.5),
            CanvasPoint::new(10.0, 2.5),
            1.0,
            RED,
        );

        for x in 0..10 {
            assert_eq!(buffer.pixel(Point::new(x, 2)), Some(RED.to_rgba()));
        }
        assert_eq!(buffer.pixel(Point::new(5, 0)), Some(Colour::BLACK.to_rgba()));
        assert_eq!(buffer.pixel(Point::new(5, 4)), Some(Colour::BLACK.to_rgba()));
    }

    #[test]
    fn test_circle_is_filled_and_bounded() {
        let mut buffer = blank(20, 20);

        PixelCanvas::new(&mut buffer).fill_circle(CanvasPoint::new(10.0, 10.0), 3.0, RED);

        let count = painted(&buffer, RED);
        // area of a radius 3 disc is ~28.3
        assert!((24..=32).contains(&count), "painted {count}");
        assert_eq!(buffer.pixel(Point::new(10, 10)), Some(RED.to_rgba()));
        assert_eq!(buffer.pixel(Point::new(14, 10)), Some(Colour::BLACK.to_rgba()));
    }

    #[test]
    fn test_thin_stamp_paints_single_pixel() {
        let mut buffer = blank(4, 4);

        PixelCanvas::new(&mut buffer).fill_circle(CanvasPoint::new(1.9, 2.1), 0.25, RED);

        assert_eq!(painted(&buffer, RED), 1);
        assert_eq!(buffer.pixel(Point::new(1, 2)), Some(RED.to_rgba()));
    }

    #[test]
    fn test_drawing_outside_the_buffer_is_clipped() {
        let mut buffer = blank(4, 4);
        let mut canvas = PixelCanvas::new(&mut buffer);

        canvas.fill_circle(CanvasPoint::new(-10.0, -10.0), 3.0, RED);
        canvas.draw_line(
            CanvasPoint::new(-5.0, 0.5),
            CanvasPoint::new(50.0, 0.5),
            1.0,
            RED,
        );

        assert_eq!(painted(&buffer, RED), 4);
    }

    #[test]
    fn test_render_tree_paints_trunk_over_background() {
        let pixel_rect = PixelRect::new(120, 80).unwrap();
        let params = TreeParams::default();
        let mut rng = StdRng::seed_from_u64(11);

        let (buffer, stats) = render_tree(pixel_rect, &params, Colour::WHITE, &mut rng).unwrap();

        assert!(stats.branches > 1);
        // bottom centre sits on the trunk
        assert_eq!(
            buffer.pixel(Point::new(60, 79)),
            Some(params.branch_colour.to_rgba())
        );
        assert_eq!(buffer.pixel(Point::new(0, 0)), Some(Colour::WHITE.to_rgba()));
        assert!(buffer.buffer().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_render_tree_is_reproducible() {
        let pixel_rect = PixelRect::new(64, 64).unwrap();
        let params = TreeParams::default();

        let (first, _) =
            render_tree(pixel_rect, &params, Colour::BLACK, &mut StdRng::seed_from_u64(3)).unwrap();
        let (second, _) =
            render_tree(pixel_rect, &params, Colour::BLACK, &mut StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_tree_rejects_invalid_params() {
        let params = TreeParams {
            line_width: -1.0,
            ..TreeParams::default()
        };

        let result = render_tree(
            PixelRect::new(8, 8).unwrap(),
            &params,
            Colour::BLACK,
            &mut StdRng::seed_from_u64(0),
        );

        assert!(matches!(result, Err(TreeError::InvalidLineWidth { .. })));
    }
}
