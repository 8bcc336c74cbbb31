use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn ellipse_area(form: &Form) -> f64 {
    match form {
        Form::Ellipse { radii, .. } => std::f64::consts::PI * radii.x * radii.y,
        other => panic!("expected ellipse, got {other:?}"),
    }
}

fn rect_of(form: &Form) -> (Rect, f64) {
    match form {
        Form::Rect {
            rect,
            corner_radius,
        } => (*rect, *corner_radius),
        other => panic!("expected rect, got {other:?}"),
    }
}

#[test]
fn elliptic_derivations_preserve_area() {
    let bounds = Rect::new(10.0, 20.0, 110.0, 420.0);
    let base = ellipse_area(&Form::derive(ShapeKind::Ellipse, bounds, Stretch::Wide));
    for kind in [
        ShapeKind::Circle,
        ShapeKind::WideEllipse,
        ShapeKind::TallEllipse,
    ] {
        let area = ellipse_area(&Form::derive(kind, bounds, Stretch::Wide));
        assert!(approx(area, base), "{kind} area {area} != {base}");
    }
}

#[test]
fn wide_and_tall_ellipses_redistribute_extent() {
    let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
    let Form::Ellipse { radii: wide, .. } =
        Form::derive(ShapeKind::WideEllipse, bounds, Stretch::Wide)
    else {
        panic!("wide-ellipse must derive an ellipse");
    };
    let Form::Ellipse { radii: tall, .. } =
        Form::derive(ShapeKind::TallEllipse, bounds, Stretch::Wide)
    else {
        panic!("tall-ellipse must derive an ellipse");
    };
    assert!(wide.x > wide.y);
    assert!(tall.y > tall.x);
    assert!(approx(wide.x / wide.y, ELLIPSE_STRETCH));
}

#[test]
fn every_form_shares_the_box_center() {
    let bounds = Rect::new(5.0, 7.0, 65.0, 91.0);
    for kind in ShapeKind::ALL {
        for stretch in [Stretch::Wide, Stretch::Tall] {
            let c = Form::derive(kind, bounds, stretch).bounding_box().center();
            assert!(approx(c.x, bounds.center().x), "{kind}");
            assert!(approx(c.y, bounds.center().y), "{kind}");
        }
    }
}

#[test]
fn square_averages_sides() {
    let bounds = Rect::new(0.0, 0.0, 40.0, 80.0);
    let (rect, radius) = rect_of(&Form::derive(ShapeKind::Square, bounds, Stretch::Tall));
    assert!(approx(rect.width(), 60.0));
    assert!(approx(rect.height(), 60.0));
    assert_eq!(radius, 0.0);
}

#[test]
fn rectangle_bias_follows_stretch() {
    let bounds = Rect::new(0.0, 0.0, 40.0, 80.0);
    let (wide, _) = rect_of(&Form::derive(ShapeKind::Rectangle, bounds, Stretch::Wide));
    let (tall, _) = rect_of(&Form::derive(ShapeKind::Rectangle, bounds, Stretch::Tall));
    assert!(approx(wide.width(), 40.0 * RECT_BIAS));
    assert!(approx(wide.height(), 80.0 / RECT_BIAS));
    assert!(approx(tall.width(), 40.0 / RECT_BIAS));
    assert!(approx(tall.height(), 80.0 * RECT_BIAS));
    assert!(approx(wide.area(), bounds.area()));
}

#[test]
fn rounded_rectangle_scales_its_corner() {
    let bounds = Rect::new(0.0, 0.0, 235.79, 324.64);
    let (rect, radius) = rect_of(&Form::derive(
        ShapeKind::RoundedRectangle,
        bounds,
        Stretch::Wide,
    ));
    assert_eq!(rect, bounds);
    assert!(approx(radius, 20.0));
}

#[test]
fn contour_kinds_keep_the_bounds() {
    let bounds = Rect::new(1.0, 2.0, 31.0, 42.0);
    for kind in ShapeKind::ALL
        .into_iter()
        .filter(|k| k.family() == Family::Contour)
    {
        let form = Form::derive(kind, bounds, Stretch::Wide);
        assert_eq!(form.family(), Family::Contour);
        assert_eq!(form.bounding_box(), bounds);
        let bbox = form.to_path().bounding_box();
        assert!(approx(bbox.x0, bounds.x0) && approx(bbox.y1, bounds.y1), "{kind}");
    }
}

#[test]
fn interpolation_is_exact_linear_for_ellipses() {
    let from = Form::Ellipse {
        center: Point::new(10.0, 20.0),
        radii: Vec2::new(4.0, 4.0),
    };
    let to = Form::Ellipse {
        center: Point::new(30.0, 60.0),
        radii: Vec2::new(12.0, 12.0),
    };
    for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let Some(Form::Ellipse { center, radii }) = Form::interpolate(&from, &to, p) else {
            panic!("ellipses must interpolate");
        };
        assert_eq!(center.x, 10.0 + p * (30.0 - 10.0));
        assert_eq!(center.y, 20.0 + p * (60.0 - 20.0));
        assert_eq!(radii.x, 4.0 + p * (12.0 - 4.0));
    }
}

#[test]
fn interpolation_rejects_mixed_families() {
    let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
    let circle = Form::derive(ShapeKind::Circle, bounds, Stretch::Wide);
    let square = Form::derive(ShapeKind::Square, bounds, Stretch::Wide);
    let dome = Form::derive(ShapeKind::SemicircleTop, bounds, Stretch::Wide);
    assert!(Form::interpolate(&circle, &square, 0.5).is_none());
    assert!(Form::interpolate(&dome, &dome, 0.5).is_none());
    assert!(Form::interpolate(&square, &square, 0.5).is_some());
}

#[test]
fn oversized_corner_radius_is_clamped_when_drawn() {
    let form = Form::Rect {
        rect: Rect::new(0.0, 0.0, 10.0, 4.0),
        corner_radius: 50.0,
    };
    let bbox = form.to_path().bounding_box();
    assert!(approx(bbox.width(), 10.0));
    assert!(approx(bbox.height(), 4.0));
}
