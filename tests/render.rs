use fractal_canvas::{
    Colour, ColourSchemeKind, Complex, FilePresenterPort, MandelbrotError, PixelRect, Point,
    PresentError, RenderError, TreeParams, ViewState, colour_for, escape_time,
    file_presenter_for_path, render, render_mandelbrot, render_mandelbrot_parallel, render_tree,
    reset, zoom_at,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn two_by_one_frame_matches_escape_times_and_grayscale() {
    let view = ViewState::default().with_max_iterations(10).unwrap();

    let buffer = render(2, 1, &view).unwrap();

    let left = escape_time(Complex::new(-2.25, -1.0), 10);
    let right = escape_time(Complex::new(-0.5, -1.0), 10);
    let expected: Vec<u8> = [left, right]
        .iter()
        .flat_map(|&n| colour_for(n, 10, ColourSchemeKind::Grayscale).to_rgba())
        .collect();
    assert_eq!(buffer.buffer(), expected.as_slice());
    assert_eq!(buffer.buffer(), &[80, 80, 80, 255, 161, 161, 161, 255]);
}

#[test]
fn origin_is_black_under_every_scheme() {
    for &scheme in ColourSchemeKind::ALL {
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 50), 50);
        assert_eq!(colour_for(50, 50, scheme), Colour::BLACK);
    }
}

#[test]
fn unknown_scheme_name_renders_as_default() {
    let pixel_rect = PixelRect::new(12, 8).unwrap();
    let fallback = ViewState::default()
        .with_colour_scheme(ColourSchemeKind::from_name_or_default("no-such-scheme"));

    assert_eq!(
        render_mandelbrot(pixel_rect, &fallback).unwrap(),
        render_mandelbrot(pixel_rect, &ViewState::default()).unwrap()
    );
}

#[test]
fn navigation_then_reset_returns_home() {
    let zoomed = (0..10).fold(ViewState::default(), |view, _| zoom_at(view, 0.3, 0.7));

    assert_eq!(zoomed.zoom(), 1024.0);

    let home = reset(zoomed);
    assert_eq!(home.center(), Complex::new(-0.5, 0.0));
    assert_eq!(home.zoom(), 1.0);
}

#[test]
fn deep_zoom_parallel_matches_sequential() {
    let pixel_rect = PixelRect::new(40, 30).unwrap();
    let view = (0..20).fold(
        ViewState::default()
            .with_max_iterations(300)
            .unwrap()
            .with_colour_scheme(ColourSchemeKind::Ultra),
        |view, _| zoom_at(view, 0.26, 0.5),
    );

    assert_eq!(
        render_mandelbrot_parallel(pixel_rect, &view).unwrap(),
        render_mandelbrot(pixel_rect, &view).unwrap()
    );
}

#[test]
fn invalid_inputs_are_rejected_before_rendering() {
    assert!(matches!(
        render(0, 0, &ViewState::default()),
        Err(RenderError::InvalidDimension(_))
    ));
    assert_eq!(
        ViewState::default().with_zoom(0.0),
        Err(MandelbrotError::InvalidZoom { zoom: 0.0 })
    );
    assert_eq!(
        ViewState::default().with_max_iterations(0),
        Err(MandelbrotError::InvalidIterationBound)
    );
}

#[test]
fn frames_are_written_as_ppm_and_png() {
    let dir = tempfile::tempdir().unwrap();
    let buffer = render(9, 7, &ViewState::default()).unwrap();

    let ppm = dir.path().join("frame.ppm");
    file_presenter_for_path(&ppm)
        .unwrap()
        .present(&buffer, &ppm)
        .unwrap();
    let ppm_bytes = std::fs::read(&ppm).unwrap();
    let header = b"P6\n9 7\n255\n";
    assert!(ppm_bytes.starts_with(header));
    assert_eq!(ppm_bytes.len(), header.len() + 9 * 7 * 3);

    let png = dir.path().join("frame.png");
    file_presenter_for_path(&png)
        .unwrap()
        .present(&buffer, &png)
        .unwrap();
    let decoded = image::open(&png).unwrap().into_rgba8();
    assert_eq!(decoded.as_raw().as_slice(), buffer.buffer());

    assert!(matches!(
        file_presenter_for_path(&dir.path().join("frame.bmp")),
        Err(PresentError::UnsupportedFormat { .. })
    ));
}

#[test]
fn seeded_tree_is_reproducible_and_drawn_from_the_bottom() {
    let pixel_rect = PixelRect::new(200, 120).unwrap();
    let params = TreeParams::default();

    let (first, stats) =
        render_tree(pixel_rect, &params, Colour::WHITE, &mut StdRng::seed_from_u64(99)).unwrap();
    let (second, _) =
        render_tree(pixel_rect, &params, Colour::WHITE, &mut StdRng::seed_from_u64(99)).unwrap();

    assert_eq!(first, second);
    assert!(stats.branches > 10);
    assert!(stats.deepest_branch <= params.max_depth);
    assert_eq!(
        first.pixel(Point::new(100, 119)),
        Some(params.branch_colour.to_rgba())
    );
}
