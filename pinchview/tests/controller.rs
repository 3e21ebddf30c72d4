// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios for `PinchController`: layout, gestures, frame ticks,
//! and content replacement, driven the way a host would drive them.

use kurbo::{Point, Rect, Size};
use pinchview::{Content, PinchController, PointerEvent, ViewError, ViewerConfig, ZoomMode};

#[derive(Clone, Debug, PartialEq)]
struct Bitmap {
    id: u32,
    size: Size,
}

impl Bitmap {
    fn new(id: u32, width: f64, height: f64) -> Self {
        Self {
            id,
            size: Size::new(width, height),
        }
    }
}

impl Content for Bitmap {
    fn pixel_size(&self) -> Size {
        self.size
    }
}

fn laid_out(view: Size, content: Bitmap, config: ViewerConfig) -> PinchController<Bitmap> {
    let mut c = PinchController::with_content(content, config).unwrap();
    c.on_size_changed(view.width, view.height).unwrap();
    c
}

fn tap(c: &mut PinchController<Bitmap>, at: Point, down_ms: u64) -> bool {
    c.on_pointer_event(&PointerEvent::primary_down(at, down_ms));
    c.on_pointer_event(&PointerEvent::primary_up(at, down_ms + 50))
}

#[test]
fn fit_short_side_covers_the_view() {
    let c = laid_out(
        Size::new(300.0, 200.0),
        Bitmap::new(1, 100.0, 50.0),
        ViewerConfig::default(),
    );
    assert_eq!(c.zoom_mode(), ZoomMode::FitShortSide);
    assert_eq!(c.scale(), 4.0);
    assert!(100.0 * c.scale() >= 300.0);
    assert!(50.0 * c.scale() >= 200.0);
}

#[test]
fn double_tap_advances_zoom_mode() {
    let mut c = laid_out(
        Size::new(300.0, 200.0),
        Bitmap::new(1, 100.0, 50.0),
        ViewerConfig::default(),
    );
    let at = Point::new(150.0, 100.0);

    tap(&mut c, at, 0);
    assert_eq!(c.take_click(), Some(at));
    assert_eq!(c.zoom_mode(), ZoomMode::FitShortSide);

    assert!(tap(&mut c, at, 300));
    assert_eq!(c.zoom_mode(), ZoomMode::NoZoom);
    assert_eq!(c.scale(), 1.0);
    assert_eq!(c.take_click(), None);
}

#[test]
fn slow_taps_are_two_single_taps() {
    let mut c = laid_out(
        Size::new(300.0, 200.0),
        Bitmap::new(1, 100.0, 50.0),
        ViewerConfig::default(),
    );
    let at = Point::new(10.0, 10.0);

    tap(&mut c, at, 0);
    assert_eq!(c.take_click(), Some(at));
    tap(&mut c, at, 500);
    assert_eq!(c.take_click(), Some(at));
    assert_eq!(c.zoom_mode(), ZoomMode::FitShortSide);
}

#[test]
fn drag_between_taps_is_not_a_double_tap() {
    let mut c = laid_out(
        Size::new(300.0, 200.0),
        Bitmap::new(1, 100.0, 50.0),
        ViewerConfig::default(),
    );
    let at = Point::new(150.0, 100.0);

    tap(&mut c, at, 0);
    assert_eq!(c.take_click(), Some(at));

    c.on_pointer_event(&PointerEvent::primary_down(at, 80));
    for i in 1..=6_u32 {
        let moved = Point::new(at.x - f64::from(i) * 5.0, at.y);
        c.on_pointer_event(&PointerEvent::moved(moved, 80 + u64::from(i) * 13));
    }
    c.on_pointer_event(&PointerEvent::primary_up(Point::new(120.0, 100.0), 160));
    assert_eq!(c.take_click(), None);

    tap(&mut c, at, 250);
    assert_eq!(c.zoom_mode(), ZoomMode::FitShortSide);
    assert_eq!(c.take_click(), Some(at));
}

#[test]
fn show_around_waits_for_a_size() {
    let mut c = PinchController::with_content(Bitmap::new(1, 1000.0, 1000.0), ViewerConfig::default())
        .unwrap();
    c.show_around(Some(Rect::new(100.0, 100.0, 140.0, 130.0)))
        .unwrap();
    assert!(c.viewport().pending_show_around().is_some());

    c.on_size_changed(400.0, 300.0).unwrap();
    assert!(c.viewport().pending_show_around().is_none());
    assert!((c.scale() - 2.5).abs() < 1e-9);

    let bounds = c.bounds();
    assert!((bounds.center().x - 120.0).abs() < 1e-9);
    assert!((bounds.center().y - 115.0).abs() < 1e-9);
    assert!((bounds.width() - 160.0).abs() < 1e-9);
    assert!((bounds.height() - 120.0).abs() < 1e-9);

    let frame = c.tick();
    let affine = frame.transform.to_affine();
    let center = affine * Point::new(120.0, 115.0);
    assert!((center.x - 200.0).abs() < 1e-9);
    assert!((center.y - 150.0).abs() < 1e-9);
}

#[test]
fn show_around_none_is_a_no_op() {
    let mut c = laid_out(
        Size::new(300.0, 200.0),
        Bitmap::new(1, 100.0, 50.0),
        ViewerConfig::default(),
    );
    let before = c.draw_transform();
    assert_eq!(c.show_around(None), Ok(()));
    assert_eq!(c.draw_transform(), before);
}

#[test]
fn overrun_after_drag_settles_without_oscillation() {
    let mut c = laid_out(
        Size::new(300.0, 200.0),
        Bitmap::new(1, 1000.0, 800.0),
        ViewerConfig::default(),
    );
    c.on_pointer_event(&PointerEvent::primary_down(Point::new(0.0, 50.0), 0));
    assert!(c.on_pointer_event(&PointerEvent::moved(Point::new(150.0, 50.0), 16)));
    assert!(c.on_pointer_event(&PointerEvent::primary_up(Point::new(150.0, 50.0), 600)));

    let mut gap = -c.bounds().x0;
    assert!(gap > 400.0);
    let mut ticks = 0;
    while c.tick().redraw {
        let left = c.bounds().x0;
        assert!(left <= 1.0, "overshot past the content edge: {left}");
        assert!(-left < gap);
        gap = -left;
        ticks += 1;
        assert!(ticks < 500);
    }
    assert!(gap <= 1.0);
    assert!(ticks > 5);
}

#[test]
fn pinch_scale_comes_from_start_snapshot() {
    let mut c = laid_out(
        Size::new(400.0, 300.0),
        Bitmap::new(1, 2000.0, 2000.0),
        ViewerConfig::default(),
    );
    let start_scale = c.scale();
    let a = Point::new(100.0, 100.0);

    c.on_pointer_event(&PointerEvent::primary_down(a, 0));
    c.on_pointer_event(&PointerEvent::secondary_down(a, Point::new(200.0, 100.0), 10));
    for x in [250.0, 190.0, 330.0] {
        assert!(c.on_pointer_event(&PointerEvent::moved_pair(a, Point::new(x, 100.0), 20)));
    }
    assert_eq!(c.scale(), start_scale * (230.0 / 100.0));
}

#[test]
fn degenerate_pinch_leaves_scale_alone() {
    let mut c = laid_out(
        Size::new(400.0, 300.0),
        Bitmap::new(1, 2000.0, 2000.0),
        ViewerConfig::default(),
    );
    let before = c.scale();
    let a = Point::new(50.0, 50.0);
    c.on_pointer_event(&PointerEvent::primary_down(a, 0));
    c.on_pointer_event(&PointerEvent::secondary_down(a, a, 10));
    assert!(!c.on_pointer_event(&PointerEvent::moved_pair(a, Point::new(300.0, 50.0), 20)));
    assert_eq!(c.scale(), before);
    assert!(c.bounds().x0.is_finite());
}

#[test]
fn lifting_first_pointer_freezes_the_view() {
    let mut c = laid_out(
        Size::new(400.0, 300.0),
        Bitmap::new(1, 2000.0, 2000.0),
        ViewerConfig::default(),
    );
    let a = Point::new(100.0, 100.0);
    let b = Point::new(200.0, 100.0);
    c.on_pointer_event(&PointerEvent::primary_down(a, 0));
    c.on_pointer_event(&PointerEvent::secondary_down(a, b, 10));
    c.on_pointer_event(&PointerEvent::secondary_up(0, a, b, 20));
    let frozen = c.draw_transform();

    assert!(!c.on_pointer_event(&PointerEvent::moved(Point::new(300.0, 250.0), 30)));
    assert_eq!(c.draw_transform(), frozen);
    assert!(c.is_touching());

    assert!(c.on_pointer_event(&PointerEvent::primary_up(Point::new(300.0, 250.0), 40)));
    assert!(!c.is_touching());
    assert_eq!(c.take_click(), None);
}

#[test]
fn content_replacement_fades_in_and_recycles() {
    let config = ViewerConfig::default().with_fade_in_rate(64);
    let mut c = laid_out(Size::new(300.0, 200.0), Bitmap::new(1, 300.0, 200.0), config);

    // Initial content is shown opaque, with nothing to animate.
    assert_eq!(c.alpha(), 255);
    assert!(!c.tick().redraw);

    // Replacement without recycling drops the handle and fades in.
    assert_eq!(c.set_content(Bitmap::new(2, 300.0, 200.0), false), Ok(None));
    assert_eq!(c.alpha(), 0);
    assert_eq!(c.content().map(|b| b.id), Some(2));
    let alphas: Vec<u8> = (0..5).map(|_| c.tick().alpha).collect();
    assert_eq!(alphas, [64, 128, 192, 255, 255]);
    assert!(!c.tick().redraw);

    // Same content: nothing changes.
    assert_eq!(c.set_content(Bitmap::new(2, 300.0, 200.0), true), Ok(None));
    assert_eq!(c.alpha(), 255);

    // Replacement with recycling hands the old one back.
    let old = c.set_content(Bitmap::new(3, 600.0, 400.0), true).unwrap();
    assert_eq!(old.map(|b| b.id), Some(2));
    assert_eq!(c.alpha(), 0);
    assert_eq!(c.scale(), 0.5);
    assert!(c.tick().redraw);
}

#[test]
fn content_given_at_construction_is_opaque() {
    let c = PinchController::with_content(Bitmap::new(1, 100.0, 50.0), ViewerConfig::default())
        .unwrap();
    assert_eq!(c.alpha(), 255);
}

#[test]
fn empty_content_is_rejected() {
    let mut c = laid_out(
        Size::new(300.0, 200.0),
        Bitmap::new(1, 100.0, 50.0),
        ViewerConfig::default(),
    );
    assert_eq!(
        c.set_content(Bitmap::new(2, 0.0, 50.0), false),
        Err(ViewError::InvalidArgument("content"))
    );
    assert_eq!(c.content().map(|b| b.id), Some(1));
    assert!(PinchController::with_content(Bitmap::new(3, 10.0, 0.0), ViewerConfig::default()).is_err());
}

#[test]
fn zoom_mode_cycles_both_ways() {
    let mut c = laid_out(
        Size::new(300.0, 200.0),
        Bitmap::new(1, 100.0, 50.0),
        ViewerConfig::default(),
    );
    let start = c.zoom_mode();
    c.cycle_zoom_mode(-1);
    assert_eq!(c.zoom_mode(), ZoomMode::FitWindow);
    c.cycle_zoom_mode(1);
    assert_eq!(c.zoom_mode(), start);
    for _ in 0..3 {
        c.cycle_zoom_mode(1);
    }
    assert_eq!(c.zoom_mode(), start);
}

#[test]
fn runtime_setters_validate() {
    let mut c = laid_out(
        Size::new(300.0, 200.0),
        Bitmap::new(1, 100.0, 50.0),
        ViewerConfig::default(),
    );
    assert!(c.set_overrun_damping(0.5).is_err());
    assert!(c.set_overrun_damping(2.0).is_ok());
    assert_eq!(c.config().overrun_damping, 2.0);
    assert!(c.set_show_around_margin(-1.0).is_err());
    assert!(c.set_show_around_margin(2.0).is_ok());
    assert_eq!(c.viewport().show_around_margin(), 2.0);
    assert!(c.on_size_changed(f64::NAN, 10.0).is_err());
}

#[test]
fn last_touch_point_tracks_primary_pointer() {
    let mut c = laid_out(
        Size::new(300.0, 200.0),
        Bitmap::new(1, 1000.0, 800.0),
        ViewerConfig::default(),
    );
    c.on_pointer_event(&PointerEvent::primary_down(Point::new(5.0, 6.0), 0));
    assert_eq!(c.last_touch_point(), Point::new(5.0, 6.0));
    c.on_pointer_event(&PointerEvent::moved(Point::new(25.0, 16.0), 16));
    assert_eq!(c.last_touch_point(), Point::new(25.0, 16.0));
}
