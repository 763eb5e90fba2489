use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::view_state::{DEFAULT_CENTER, DEFAULT_ZOOM, ViewState};
use crate::core::util::pixel_to_complex_coords::{fraction_to_complex_coords, pixel_to_fraction};
use log::debug;

/// Zoom multiplier applied by every click.
pub const ZOOM_FACTOR: f64 = 2.0;

/// Recentres on the clicked point and zooms in by [`ZOOM_FACTOR`].
///
/// The click is a fraction of the rendered frame in `[0, 1) x [0, 1)` and is
/// resolved against the viewport of `view`, the frame the user clicked on.
/// Fractions are not range-checked.
#[must_use]
pub fn zoom_at(view: ViewState, x_frac: f64, y_frac: f64) -> ViewState {
    let center = fraction_to_complex_coords(x_frac, y_frac, view.viewport());
    let zoomed = view.recentred(center, view.zoom() * ZOOM_FACTOR);

    debug!(
        "zoom at ({x_frac:.4}, {y_frac:.4}): center {}, zoom {}",
        zoomed.center(),
        zoomed.zoom()
    );

    zoomed
}

/// [`zoom_at`] for a click on pixel `point` of a `pixel_rect` frame.
#[must_use]
pub fn zoom_at_pixel(view: ViewState, pixel_rect: PixelRect, point: Point) -> ViewState {
    let (x_frac, y_frac) = pixel_to_fraction(point, pixel_rect);

    zoom_at(view, x_frac, y_frac)
}

/// Returns to the default center and zoom.
///
/// The iteration bound and colour scheme are kept: they are picked by the
/// user independently of where the view is looking.
#[must_use]
pub fn reset(view: ViewState) -> ViewState {
    view.recentred(DEFAULT_CENTER, DEFAULT_ZOOM)
}
