use tui_wireframe::core::{Camera, Projector};
use tui_wireframe::types::{ScreenPoint, Vec3};

fn sample_points() -> Vec<Vec3> {
    let mut out = Vec::new();
    for xi in -4..=4 {
        for yi in -3..=3 {
            for zi in -20..=40 {
                out.push(Vec3::new(xi as f64 * 0.75, yi as f64 * 0.6, zi as f64 * 0.05));
            }
        }
    }
    out
}

#[test]
fn points_at_or_behind_near_plane_are_always_rejected() {
    let projector = Projector::new(80, 24);
    for yaw in [0.0, 0.4, -2.0, 3.1] {
        let camera = Camera::new(Vec3::new(1.5, 2.0, -4.0), yaw);
        for p in sample_points() {
            let view = camera.to_view(p);
            let projected = projector.project(p, &camera);
            if view.z <= projector.near_plane() {
                assert_eq!(projected, None, "{p:?} at yaw {yaw}");
            } else {
                assert!(projected.is_some(), "{p:?} at yaw {yaw}");
            }
        }
    }
}

#[test]
fn visible_points_follow_documented_formula() {
    let (w, h) = (80u16, 24u16);
    let projector = Projector::new(w, h);
    let camera = Camera::new(Vec3::new(0.0, 3.0, -8.0), 0.3);

    for p in sample_points() {
        let rel = p - camera.position;
        let (sin, cos) = (-camera.yaw).sin_cos();
        let x = rel.x * cos - rel.z * sin;
        let z = rel.x * sin + rel.z * cos;
        if z <= projector.near_plane() {
            continue;
        }
        let scale = projector.focal_length() / z;
        let expected_x = x * scale + w as f64 / 2.0;
        let expected_y = -rel.y * scale + h as f64 / 2.0;

        let got = projector.project(p, &camera).unwrap();
        assert!((got.x as f64 - expected_x).abs() <= 0.5 + 1e-9, "{p:?}");
        assert!((got.y as f64 - expected_y).abs() <= 0.5 + 1e-9, "{p:?}");
    }
}

#[test]
fn projection_is_pure() {
    let projector = Projector::new(80, 24);
    let camera = Camera::default();
    let p = Vec3::new(0.3, 1.2, 2.0);
    let a = projector.project(p, &camera);
    let b = projector.project(p, &camera);
    assert_eq!(a, b);
    assert_eq!(camera, Camera::default());
}

#[test]
fn wider_focal_length_spreads_points_out() {
    let camera = Camera::default();
    let narrow = Projector::new(80, 24);
    let wide = Projector::new(80, 24).with_focal_length(40.0);
    assert_eq!(wide.focal_length(), 2.0 * narrow.focal_length());
    assert_eq!(wide.near_plane(), narrow.near_plane());
    let p = Vec3::new(1.0, 3.0, 2.0);
    assert_eq!(narrow.project(p, &camera), Some(ScreenPoint::new(42, 12)));
    assert_eq!(wide.project(p, &camera), Some(ScreenPoint::new(44, 12)));
}
