use crate::{ray::Ray, vec3::Vec3};

/// Where a ray met a surface.
#[derive(Copy, Clone, Debug)]
pub struct Intersection {
    /// Parametric distance along `ray`, always strictly positive.
    pub t: f64,
    pub point: Vec3<f64>,
    /// Unit normal, facing against the incoming ray.
    pub normal: Vec3<f64>,
    /// Barycentric coordinates inside the hit triangle.
    pub uv: Option<(f64, f64)>,
    /// Vertices of the hit triangle.
    pub triangle: Option<[Vec3<f64>; 3]>,
    pub ray: Ray,
}

impl Intersection {
    pub fn new(ray: &Ray, t: f64, normal: Vec3<f64>) -> Self {
        Self {
            t,
            point: ray.offset(t),
            normal,
            uv: None,
            triangle: None,
            ray: *ray,
        }
    }

    pub fn with_triangle(mut self, uv: (f64, f64), triangle: [Vec3<f64>; 3]) -> Self {
        self.uv = Some(uv);
        self.triangle = Some(triangle);
        self
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.t
    }
}
