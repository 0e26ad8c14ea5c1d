use crate::{
    color::Color,
    illumination::{Coefficients, Illuminate, Materials},
    intersection::Intersection,
    light::Light,
    vec3::Vec3,
};

/// Two-color procedural checker pattern.
///
/// The pattern lives in the plane orthogonal to the dominant axis of the
/// surface normal, so a floor is checkered in x/z and a wall in x/y.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Checkerboard {
    pub coefficients: Coefficients,
    pub even: Color,
    pub odd: Color,
    /// Edge length of one square, in world units.
    pub period: f64,
}

impl Checkerboard {
    pub fn new(coefficients: Coefficients, even: Color, odd: Color, period: f64) -> Self {
        Self {
            coefficients,
            even,
            odd,
            period,
        }
    }

    fn pattern_coords(point: &Vec3<f64>, normal: &Vec3<f64>) -> (f64, f64) {
        let (nx, ny, nz) = (normal.x.abs(), normal.y.abs(), normal.z.abs());

        if ny >= nx && ny >= nz {
            (point.x, point.z)
        } else if nx >= nz {
            (point.y, point.z)
        } else {
            (point.x, point.y)
        }
    }

    /// Base color under the hit point.
    pub fn color_at(&self, hit: &Intersection) -> Color {
        // A non-positive period has no squares to alternate between.
        if !(self.period > 0.0) {
            return self.even;
        }

        let (s, t) = Self::pattern_coords(&hit.point, &hit.normal);
        let parity = ((s / self.period).floor() + (t / self.period).floor()) as i64;

        if parity.rem_euclid(2) == 0 {
            self.even
        } else {
            self.odd
        }
    }
}

impl Illuminate for Checkerboard {
    fn illuminate(&self, hit: &Intersection, light: &Light, viewer: Vec3<f64>, shadowed: bool) -> Color {
        let base = self.color_at(hit);
        let materials = Materials {
            ambient: base,
            diffuse: base,
            specular: Color::WHITE,
        };

        self.coefficients.shade(&materials, hit, light, viewer, shadowed)
    }
}
