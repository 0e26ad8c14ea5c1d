use approx::assert_abs_diff_eq;

use lumen::{Geometry, Intersection, Matrix4x4, Polygon, Ray, Shape, Sphere, Transform, Vec3};

fn rigid() -> Matrix4x4<f64> {
    Matrix4x4::translation(Vec3::new(1.0, -2.0, 3.0)) * Matrix4x4::rotation_y(0.5) * Matrix4x4::rotation_x(0.2)
}

fn assert_vec_eq(a: Vec3<f64>, b: Vec3<f64>) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
    assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
    assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-9);
}

/// Hitting `M·shape` with `ray` must match hitting `shape` with `M⁻¹·ray`,
/// once that hit is mapped back through `M`.
fn assert_commutes(shape: Shape, ray: Ray) -> Intersection {
    let m = rigid();

    let mut moved = shape.clone();
    moved.transform(&m);
    let direct = moved.intersection(&ray).expect("transformed shape must be hit");

    let mut local = ray;
    local.transform(&m.inverse());
    let original = shape.intersection(&local).expect("original shape must be hit by the inverse ray");

    assert_abs_diff_eq!(direct.distance(), original.distance(), epsilon = 1e-9);
    assert_vec_eq(direct.point, m.transform_point(original.point));
    assert_vec_eq(direct.normal, m.transform_vector(original.normal));

    direct
}

#[test]
fn sphere_transform_commutes_with_ray() {
    let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0);
    let target = rigid().transform_point(Vec3::new(0.3, -0.2, 5.0));
    let origin = Vec3::new(-1.0, 0.5, -2.0);

    assert_commutes(sphere.into(), Ray::new(origin, target - origin));
}

#[test]
fn polygon_transform_commutes_with_ray() {
    let vertices = vec![
        Vec3::new(-2.0, 0.0, -2.0),
        Vec3::new(2.0, 0.0, -2.0),
        Vec3::new(2.0, 0.0, 2.0),
        Vec3::new(-2.0, 0.0, 2.0),
    ];
    let polygon = Polygon::new(vertices, vec![0, 1, 2, 0, 2, 3]).expect("valid mesh");
    let target = rigid().transform_point(Vec3::new(0.7, 0.0, -0.4));
    let origin = rigid().transform_point(Vec3::new(0.0, 4.0, 0.0));

    let hit = assert_commutes(polygon.into(), Ray::new(origin, target - origin));

    let (u, v) = hit.uv.expect("triangle hit carries barycentrics");
    assert!(u >= 0.0 && v >= 0.0 && u + v <= 1.0);
}
