use std::f64::consts::FRAC_PI_2;

use log::debug;
use rand::Rng;

use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::tree::canvas::{CanvasPoint, TreeCanvas};
use crate::core::fractals::tree::errors::TreeError;
use crate::core::fractals::tree::params::TreeParams;

const ANGLE_JITTER: f64 = 0.1;
const LENGTH_JITTER: f64 = 0.1;
const SPREAD_JITTER_DEGREES: f64 = 10.0;
const SIDE_WIDTH_FACTOR: f64 = 0.7;
const CENTRE_BRANCH_PROBABILITY: f64 = 0.2;
const CENTRE_LENGTH_FACTOR: f64 = 0.7;
const CENTRE_WIDTH_FACTOR: f64 = 0.6;
const MIN_STROKE_WIDTH: f64 = 0.5;
const MIN_BRANCH_LENGTH: f64 = 1.0;
const MIN_LEAF_RADIUS: f64 = 2.0;

/// Counts of what a call to [`draw_tree`] put on the canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub branches: u32,
    pub leaves: u32,
    pub deepest_branch: u32,
}

#[derive(Debug, Copy, Clone)]
struct Branch {
    start: CanvasPoint,
    length: f64,
    angle: f64,
    depth: u32,
    width: f64,
}

struct Grower<'a, C: TreeCanvas + ?Sized, R: Rng + ?Sized> {
    canvas: &'a mut C,
    params: &'a TreeParams,
    rng: &'a mut R,
    stats: TreeStats,
}

/// Grows a tree from the middle of the bottom edge of `pixel_rect`.
///
/// Every random choice is drawn from `rng`, so a seeded generator always
/// produces the same tree.
pub fn draw_tree<C, R>(
    canvas: &mut C,
    params: &TreeParams,
    pixel_rect: PixelRect,
    rng: &mut R,
) -> Result<TreeStats, TreeError>
where
    C: TreeCanvas + ?Sized,
    R: Rng + ?Sized,
{
    params.validate()?;

    let width = f64::from(pixel_rect.width());
    let height = f64::from(pixel_rect.height());
    let trunk_divisor = if params.max_depth > 7 { 4.5 } else { 3.5 };

    let mut grower = Grower {
        canvas,
        params,
        rng,
        stats: TreeStats::default(),
    };
    grower.grow(Branch {
        start: CanvasPoint::new(width / 2.0, height),
        length: height / trunk_divisor,
        angle: -FRAC_PI_2,
        depth: 1,
        width: params.line_width,
    });

    let stats = grower.stats;
    debug!(
        "tree grown: {} branches, {} leaves, deepest branch {}",
        stats.branches, stats.leaves, stats.deepest_branch
    );

    Ok(stats)
}

impl<C: TreeCanvas + ?Sized, R: Rng + ?Sized> Grower<'_, C, R> {
    fn jitter(&mut self, amount: f64) -> f64 {
        (self.rng.random::<f64>() - 0.5) * amount
    }

    fn grow(&mut self, branch: Branch) {
        let max_depth = f64::from(self.params.max_depth);
        let depth = f64::from(branch.depth);

        if branch.depth > self.params.max_depth || branch.length < MIN_BRANCH_LENGTH {
            if depth > max_depth / 1.5 && branch.length > 0.5 && branch.length < 10.0 {
                let radius = MIN_LEAF_RADIUS + 2.0 * self.rng.random::<f64>();
                self.canvas
                    .fill_circle(branch.start, radius, self.params.leaf_colour);
                self.stats.leaves += 1;
            }
            return;
        }

        let angle = branch.angle + self.jitter(ANGLE_JITTER);
        let length = branch.length * (1.0 + self.jitter(LENGTH_JITTER));
        let end = CanvasPoint::new(
            branch.start.x + angle.cos() * length,
            branch.start.y + angle.sin() * length,
        );
        let stroke =
            (branch.width * (max_depth - depth + 1.0) / max_depth).max(MIN_STROKE_WIDTH);

        self.canvas
            .draw_line(branch.start, end, stroke, self.params.branch_colour);
        self.stats.branches += 1;
        self.stats.deepest_branch = self.stats.deepest_branch.max(branch.depth);

        let spread =
            (self.params.angle_degrees + self.jitter(SPREAD_JITTER_DEGREES)).to_radians();
        let child_length = branch.length * self.params.length_factor;
        let child_width = branch.width * SIDE_WIDTH_FACTOR;

        for side_angle in [branch.angle - spread, branch.angle + spread] {
            self.grow(Branch {
                start: end,
                length: child_length,
                angle: side_angle,
                depth: branch.depth + 1,
                width: child_width,
            });
        }

        if self.rng.random::<f64>() < CENTRE_BRANCH_PROBABILITY && depth < max_depth / 1.5 {
            let angle = branch.angle + self.jitter(ANGLE_JITTER);
            self.grow(Branch {
                start: end,
                length: child_length * CENTRE_LENGTH_FACTOR,
                angle,
                depth: branch.depth + 1,
                width: branch.width * CENTRE_WIDTH_FACTOR,
            });
        }
    }
}
