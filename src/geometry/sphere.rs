use log::warn;

use crate::{
    geometry::Geometry, intersection::Intersection, matrix::Matrix4x4, ray::Ray, transform::Transform,
    vec3::Vec3,
};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3<f64>,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Vec3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn center(&self) -> Vec3<f64> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Geometry for Sphere {
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        // A point-sized sphere has no surface to shade.
        if !(self.radius > 0.0) {
            return None;
        }

        let oc = ray.origin() - self.center;

        // The direction is a unit vector, so the quadratic term is 1.
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(&oc) - self.radius.powi(2);

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt = discriminant.sqrt();
        let near = (-b - sqrt) / 2.0;
        let far = (-b + sqrt) / 2.0;

        let t = if near > 0.0 {
            near
        } else if far > 0.0 {
            far
        } else {
            return None;
        };

        let point = ray.offset(t);
        let normal = (point - self.center).unit();
        let normal = if normal.dot(ray.direction()) > 0.0 { -normal } else { normal };

        Some(Intersection::new(ray, t, normal))
    }
}

impl Transform<f64> for Sphere {
    /// Moves the center. The radius is kept, so only rigid transforms keep the
    /// sphere's shape; any scale or shear is dropped with a warning.
    fn transform(&mut self, transformation: &Matrix4x4<f64>) {
        if !transformation.is_rigid() {
            warn!("sphere at {:?} keeps radius {} under a non-rigid transform", self.center, self.radius);
        }

        self.center = transformation.transform_point(self.center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ray_toward_center_hits_at_distance_minus_radius() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, 7.0), 1.5);
        let origin = Vec3::new(-3.0, 0.0, 1.0);
        let ray = Ray::new(origin, sphere.center() - origin);

        let hit = sphere.intersection(&ray).expect("ray aimed at the center must hit");

        assert_abs_diff_eq!(origin.distance(&sphere.center()) - 1.5, hit.t, epsilon = 1e-9);
        assert_abs_diff_eq!(1.5, hit.point.distance(&sphere.center()), epsilon = 1e-9);
        assert_abs_diff_eq!(1.0, hit.normal.len(), epsilon = 1e-12);
        assert!(hit.normal.dot(ray.direction()) < 0.0);
        assert!(hit.uv.is_none());
    }

    #[test]
    fn ray_missing_sphere() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::default(), Vec3::new(0.0, 1.0, 0.0));

        assert!(sphere.intersection(&ray).is_none());
    }

    #[test]
    fn sphere_behind_ray_is_not_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::default(), Vec3::new(0.0, 0.0, 1.0));

        assert!(sphere.intersection(&ray).is_none());
    }

    #[test]
    fn ray_from_inside_hits_far_side() {
        let sphere = Sphere::new(Vec3::default(), 2.0);
        let ray = Ray::new(Vec3::default(), Vec3::new(1.0, 0.0, 0.0));

        let hit = sphere.intersection(&ray).expect("inside origin must hit the shell");

        assert_abs_diff_eq!(2.0, hit.t, epsilon = 1e-12);
        assert_eq!(Vec3::new(-1.0, 0.0, 0.0), hit.normal);
    }

    #[test]
    fn zero_radius_sphere_is_never_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 3.0), 0.0);
        let ray = Ray::new(Vec3::default(), Vec3::new(0.0, 0.0, 1.0));

        assert!(sphere.intersection(&ray).is_none());
    }

    #[test]
    fn transform_moves_center_only() {
        let mut sphere = Sphere::new(Vec3::new(1.0, 0.0, 0.0), 0.5);
        sphere.transform(&Matrix4x4::translation(Vec3::new(0.0, 0.0, 4.0)));

        assert_eq!(Vec3::new(1.0, 0.0, 4.0), sphere.center());
        assert_eq!(0.5, sphere.radius());
    }

    #[test]
    fn scaling_moves_center_but_keeps_radius() {
        let mut sphere = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 0.5);
        sphere.transform(&Matrix4x4::scaling(Vec3::new(2.0, 2.0, 2.0)));

        assert_eq!(Vec3::new(2.0, 4.0, 6.0), sphere.center());
        assert_eq!(0.5, sphere.radius());
    }
}
