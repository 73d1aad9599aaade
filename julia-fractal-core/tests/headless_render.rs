use julia_fractal_core::{Complex, EscapeParams, GenerateRequest, Julia, Viewport};

/// Iterate every pixel of a viewport serially into a flat row-major Vec.
fn render_grid(julia: &Julia, viewport: &Viewport) -> Vec<u32> {
    let mut counts = Vec::with_capacity((viewport.width * viewport.height) as usize);
    for row in 0..viewport.height {
        for col in 0..viewport.width {
            counts.push(julia.escape_count(viewport.pixel_to_complex(col, row)));
        }
    }
    counts
}

#[test]
fn headless_julia_render() {
    // Basilica: the origin is attracted to the 2-cycle 0 ↔ -1.
    let julia = Julia::new(
        Complex::new(-1.0, 0.0),
        EscapeParams::with_max_iterations(256).unwrap(),
    )
    .unwrap();
    let viewport = Viewport::fit_extent(100, 100, 3.0).unwrap();
    let max = julia.params().max_iterations;

    let counts = render_grid(&julia, &viewport);

    assert_eq!(counts.len(), 10_000);
    assert!(counts.iter().all(|&n| n <= max));

    let bounded = counts.iter().filter(|&&n| n == max).count();
    let escaped = counts.len() - bounded;
    assert!(escaped > 0, "should have some escaped points");
    assert!(bounded > 0, "should have some bounded points");
}

#[test]
fn headless_render_is_deterministic() {
    let julia = Julia::default();
    let viewport = Viewport::from_zoom(80, 60, 25.0).unwrap();

    let run1 = render_grid(&julia, &viewport);
    let run2 = render_grid(&julia, &viewport);

    assert_eq!(run1, run2, "two identical renders must produce identical results");
}

#[test]
fn real_c_grid_is_vertically_symmetric() {
    let julia = Julia::new(
        Complex::new(-0.8, 0.0),
        EscapeParams::with_max_iterations(120).unwrap(),
    )
    .unwrap();
    let (w, h) = (31u32, 24u32);
    let viewport = Viewport::from_zoom(w, h, 9.0).unwrap();

    let counts = render_grid(&julia, &viewport);

    for r in 0..h as usize {
        let mirror = h as usize - 1 - r;
        let row = &counts[r * w as usize..(r + 1) * w as usize];
        let mirror_row = &counts[mirror * w as usize..(mirror + 1) * w as usize];
        assert_eq!(row, mirror_row, "row {r} should mirror row {mirror}");
    }
}

#[test]
fn request_builds_equivalent_fractal() {
    let req = GenerateRequest::with_zoom(16, 16, 6.0, Complex::new(-1.0, 0.0), 40);
    let (julia, viewport) = req.build().unwrap();

    let direct_julia = Julia::new(
        Complex::new(-1.0, 0.0),
        EscapeParams::with_max_iterations(40).unwrap(),
    )
    .unwrap();
    let direct_viewport = Viewport::from_zoom(16, 16, 6.0).unwrap();

    assert_eq!(
        render_grid(&julia, &viewport),
        render_grid(&direct_julia, &direct_viewport)
    );
}
