use super::*;

#[test]
fn millis_since_floors_at_zero() {
    let t0 = Millis(1_000.0);
    assert_eq!(t0.offset(250.0).since(t0), 250.0);
    assert_eq!(t0.since(t0.offset(250.0)), 0.0);
}

#[test]
fn degenerate_canvas_detection() {
    assert!(Canvas::new(0.0, 100.0).is_degenerate());
    assert!(Canvas::new(100.0, -1.0).is_degenerate());
    assert!(Canvas::new(f64::NAN, 10.0).is_degenerate());
    assert!(Canvas::new(f64::INFINITY, 10.0).is_degenerate());
    assert!(!Canvas::new(1.0, 1.0).is_degenerate());
}

#[test]
fn pixel_size_rounds_up() {
    assert_eq!(Canvas::new(10.2, 3.0).pixel_size(), (11, 3));
    assert_eq!(Canvas::new(0.0, 0.0).pixel_size(), (1, 1));
}

#[test]
fn lerp_hits_endpoints_and_midpoint() {
    assert_eq!(f64::lerp(&2.0, &6.0, 0.0), 2.0);
    assert_eq!(f64::lerp(&2.0, &6.0, 1.0), 6.0);
    assert_eq!(f64::lerp(&2.0, &6.0, 0.5), 4.0);

    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 20.0, 30.0, 50.0);
    assert_eq!(Rect::lerp(&a, &b, 0.5), Rect::new(5.0, 10.0, 20.0, 30.0));
}
