//! Model that contains one or more triangles.

use crate::{
    error::Error, geometry::Geometry, intersection::Intersection, matrix::Matrix4x4, ray::Ray,
    transform::Transform, vec3::Vec3,
};

/// Indexed triangle mesh.
///
/// Every successive triple of `indices` names one triangle. Triangles are
/// tested in index order and the first one hit wins, so overlapping triangles
/// within a single polygon are not depth sorted.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec3<f64>>,
    indices: Vec<usize>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec3<f64>>, indices: Vec<usize>) -> Result<Self, Error> {
        if indices.len() % 3 != 0 {
            return Err(Error::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }

        if let Some(&index) = indices.iter().find(|&&i| i >= vertices.len()) {
            return Err(Error::InvalidMesh(format!(
                "index {} out of range for {} vertices",
                index,
                vertices.len()
            )));
        }

        Ok(Self { vertices, indices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3<f64>] {
        &self.vertices
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec3<f64>; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(move |t| [self.vertices[t[0]], self.vertices[t[1]], self.vertices[t[2]]])
    }
}

/// Möller–Trumbore test against a single triangle.
///
/// Returns `(t, u, v)` for a forward hit.
fn intersect_triangle(ray: &Ray, [p0, p1, p2]: &[Vec3<f64>; 3]) -> Option<(f64, f64, f64)> {
    let e1 = *p1 - *p0;
    let e2 = *p2 - *p0;

    let p = ray.direction().cross(&e2);
    let det = p.dot(&e1);
    if det == 0.0 {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = ray.origin() - *p0;
    let u = s.dot(&p) * inv_det;

    let q = s.cross(&e1);
    let v = ray.direction().dot(&q) * inv_det;
    let t = e2.dot(&q) * inv_det;

    if !(t > 0.0) || u < 0.0 || v < 0.0 || u + v > 1.0 {
        return None;
    }

    Some((t, u, v))
}

impl Geometry for Polygon {
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        self.triangles().find_map(|triangle| {
            let (t, u, v) = intersect_triangle(ray, &triangle)?;

            let [p0, p1, p2] = triangle;
            let normal = (p1 - p0).cross(&(p2 - p0)).unit();
            let normal = if normal.dot(ray.direction()) > 0.0 { -normal } else { normal };

            Some(Intersection::new(ray, t, normal).with_triangle((u, v), triangle))
        })
    }
}

impl Transform<f64> for Polygon {
    fn transform(&mut self, transformation: &Matrix4x4<f64>) {
        for vertex in &mut self.vertices {
            *vertex = transformation.transform_point(*vertex);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Unit square in the y = 0 plane, two triangles.
    fn floor() -> Polygon {
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];

        Polygon::new(vertices, vec![0, 1, 2, 0, 2, 3]).expect("valid mesh")
    }

    #[test]
    fn rejects_incomplete_triangle() {
        let vertices = vec![Vec3::default(); 3];

        assert!(Polygon::new(vertices, vec![0, 1]).is_err());
    }

    #[test]
    fn rejects_out_of_range_index() {
        let vertices = vec![Vec3::default(); 3];

        assert!(Polygon::new(vertices, vec![0, 1, 3]).is_err());
    }

    #[test]
    fn ray_from_above_hits_floor() {
        let ray = Ray::new(Vec3::new(0.25, 2.0, 0.75), Vec3::new(0.0, -1.0, 0.0));

        let hit = floor().intersection(&ray).expect("must hit the floor");

        assert_abs_diff_eq!(2.0, hit.t, epsilon = 1e-12);
        assert_eq!(Vec3::new(0.0, 1.0, 0.0), hit.normal);
        assert!(hit.uv.is_some());
        assert_eq!(Vec3::new(0.0, 0.0, 1.0), hit.triangle.expect("triangle cached")[2]);
    }

    #[test]
    fn normal_faces_the_ray_from_below() {
        let ray = Ray::new(Vec3::new(0.5, -1.0, 0.25), Vec3::new(0.0, 1.0, 0.0));

        let hit = floor().intersection(&ray).expect("mesh is double sided");

        assert_eq!(Vec3::new(0.0, -1.0, 0.0), hit.normal);
    }

    #[test]
    fn barycentric_coordinates_locate_the_point() {
        let ray = Ray::new(Vec3::new(0.75, 1.0, 0.25), Vec3::new(0.0, -1.0, 0.0));

        let hit = floor().intersection(&ray).expect("must hit");
        let (u, v) = hit.uv.expect("triangle hits carry uv");
        let [p0, p1, p2] = hit.triangle.expect("triangle cached");
        let rebuilt = p0 + (p1 - p0).scale(u) + (p2 - p0).scale(v);

        assert_abs_diff_eq!(hit.point.x, rebuilt.x, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.point.z, rebuilt.z, epsilon = 1e-12);
    }

    #[test]
    fn parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(-1.0, 0.0, 0.5), Vec3::new(1.0, 0.0, 0.0));

        assert!(floor().intersection(&ray).is_none());
    }

    #[test]
    fn surface_behind_ray_is_not_hit() {
        let ray = Ray::new(Vec3::new(0.5, 1.0, 0.5), Vec3::new(0.0, 1.0, 0.0));

        assert!(floor().intersection(&ray).is_none());
    }

    #[test]
    fn degenerate_triangle_is_skipped() {
        let vertices = vec![Vec3::new(0.0, 0.0, 0.0); 3];
        let polygon = Polygon::new(vertices, vec![0, 1, 2]).expect("indices are valid");
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        assert!(polygon.intersection(&ray).is_none());
    }

    #[test]
    fn first_triangle_in_index_order_wins_over_nearer_one() {
        // Two stacked triangles; the far one is listed first.
        let vertices = vec![
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(0.0, 1.0, 1.0),
        ];
        let polygon = Polygon::new(vertices, vec![0, 1, 2, 3, 4, 5]).expect("valid mesh");
        let ray = Ray::new(Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        let hit = polygon.intersection(&ray).expect("must hit");

        assert_abs_diff_eq!(3.0, hit.t, epsilon = 1e-12);
    }

    #[test]
    fn transform_moves_every_vertex() {
        let mut polygon = floor();
        polygon.transform(&Matrix4x4::translation(Vec3::new(0.0, -2.0, 0.0)));

        assert!(polygon.vertices().iter().all(|v| v.y == -2.0));
    }
}
