//! End-to-end drawing scenarios through the public API.
//!
//! Run: cargo test --test raster_scenarios

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use trueno_raster::prelude::*;
use trueno_raster::render::{circle_points, disc_points, line_points};

fn lit(canvas: &Canvas, color: Rgb) -> HashSet<Point> {
    let mut set = HashSet::new();
    for row in 0..canvas.height() as i32 {
        for col in 0..canvas.width() as i32 {
            let p = Point::new(row, col);
            if canvas.get_pixel(p).unwrap() == color {
                set.insert(p);
            }
        }
    }
    set
}

#[test]
fn diagonal_line_sets_exactly_the_diagonal() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    draw_line(&mut canvas, Point::new(0, 0), Point::new(9, 9), Rgb::WHITE).unwrap();

    let expected: HashSet<Point> = (0..10).map(|i| Point::new(i, i)).collect();
    assert_eq!(lit(&canvas, Rgb::WHITE), expected);
    assert_eq!(canvas.count_color(Rgb::BLACK), 90);
}

#[test]
fn circle_matches_step_sequence() {
    let mut canvas = Canvas::new(11, 11).unwrap();
    let center = Point::new(5, 5);
    draw_circle(&mut canvas, center, 3, Rgb::WHITE).unwrap();

    let expected: HashSet<Point> = circle_points(center, 3).unwrap().into_iter().collect();
    assert_eq!(expected.len(), 20);
    assert_eq!(lit(&canvas, Rgb::WHITE), expected);
}

#[test]
fn pixel_roundtrip() {
    let mut canvas = Canvas::new(8, 6).unwrap();
    let color = Rgb::new(1, 128, 254);
    canvas.set_pixel(Point::new(5, 7), color).unwrap();
    assert_eq!(canvas.get_pixel(Point::new(5, 7)).unwrap(), color);
}

#[test]
fn set_pixels_failure_leaves_canvas_unmutated() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    let before = canvas.clone();

    let err = canvas
        .set_pixels(&[Point::new(3, 3), Point::new(3, 10)], Rgb::WHITE)
        .unwrap_err();

    assert!(matches!(err, Error::OutOfBounds { row: 3, col: 10, .. }));
    assert_eq!(canvas, before);
}

#[test]
fn disc_then_outline_repaints_nothing_new() {
    let mut canvas = Canvas::new(41, 41).unwrap();
    let center = Point::new(20, 20);
    draw_disc(&mut canvas, center, 12, Rgb::RED).unwrap();
    let disc = lit(&canvas, Rgb::RED);

    draw_circle(&mut canvas, center, 12, Rgb::GREEN).unwrap();
    let outline = lit(&canvas, Rgb::GREEN);

    assert!(outline.is_subset(&disc));
    let expected: HashSet<Point> = disc_points(center, 12).unwrap().into_iter().collect();
    assert_eq!(disc, expected);
}

#[test]
fn square_covers_exact_area() {
    let mut canvas = Canvas::new(20, 20).unwrap();
    draw_square(&mut canvas, Point::new(4, 2), Point::new(9, 12), Rgb::BLUE).unwrap();
    assert_eq!(canvas.count_color(Rgb::BLUE), 5 * 10);
}

#[test]
fn adjacent_squares_share_no_pixels() {
    let mut canvas = Canvas::new(20, 20).unwrap();
    draw_square(&mut canvas, Point::new(0, 0), Point::new(10, 10), Rgb::RED).unwrap();
    draw_square(&mut canvas, Point::new(10, 0), Point::new(20, 10), Rgb::BLUE).unwrap();
    assert_eq!(canvas.count_color(Rgb::RED), 100);
    assert_eq!(canvas.count_color(Rgb::BLUE), 100);
}

#[test]
fn dragon_curve_is_connected_chain_of_leaves() {
    let curve = DragonCurve::new(Point::new(40, 20), Point::new(40, 60), 8);
    let leaves = curve.segments(Rgb::WHITE).unwrap();
    assert_eq!(leaves.len(), 256);

    let mut canvas = Canvas::new(80, 80).unwrap();
    curve.draw(&mut canvas, Rgb::WHITE).unwrap();
    for (segment, color) in &leaves {
        for p in line_points(segment.start, segment.end) {
            assert_eq!(canvas.get_pixel(p).unwrap(), *color);
        }
    }
}

#[test]
fn configured_pipeline_exports_png() {
    let config = Config::parse(
        "background: { r: 0, g: 0, b: 32 }\nforeground: { r: 255, g: 200, b: 0 }\n",
    )
    .unwrap();
    let mut canvas = config.canvas(48, 48).unwrap();
    config
        .dragon_curve(Point::new(24, 12), Point::new(24, 36), 5)
        .draw(&mut canvas, config.foreground)
        .unwrap();

    assert!(canvas.count_color(Rgb::new(0, 0, 32)) < 48 * 48);
    let png = PngEncoder::to_bytes(&canvas).unwrap();
    assert_eq!(&png[1..4], b"PNG");
}

#[test]
fn shared_canvas_runs_whole_shapes_under_lock() {
    let shared = SharedCanvas::new(Canvas::new(32, 32).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                let rect = Rect::from_corners(Point::new(i * 8, 0), Point::new(i * 8 + 8, 32));
                shared.with_canvas(|canvas| rect.draw(canvas, Rgb::WHITE))
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }
    assert_eq!(shared.snapshot().count_color(Rgb::WHITE), 32 * 32);
}

#[test]
fn extreme_extents_report_errors_instead_of_panicking() {
    let mut canvas = Canvas::new(10, 10).unwrap();

    let results = [
        draw_circle(&mut canvas, Point::new(5, 5), 1 << 30, Rgb::WHITE),
        draw_disc(&mut canvas, Point::new(5, 5), 100_000, Rgb::WHITE),
        draw_line(&mut canvas, Point::new(0, 0), Point::new(0, 1_000_000_000), Rgb::WHITE),
        draw_square(&mut canvas, Point::new(0, 0), Point::new(i32::MAX, i32::MAX), Rgb::WHITE),
        generate(
            &mut canvas,
            Point::new(i32::MAX - 1, 0),
            Point::new(i32::MAX - 1, 4),
            1,
            Rgb::WHITE,
        ),
    ];

    for result in results {
        assert!(matches!(result, Err(Error::OutOfBounds { .. })), "{result:?}");
    }
    assert!(matches!(
        draw_circle(&mut canvas, Point::new(5, 5), i32::MAX, Rgb::WHITE),
        Err(Error::InvalidGeometry(_))
    ));
    assert_eq!(canvas.count_color(Rgb::BLACK), 100);
}
