use crate::{
    color::Color,
    illumination::{Coefficients, Illuminate, Materials},
    intersection::Intersection,
    light::Light,
    vec3::Vec3,
};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Phong {
    pub coefficients: Coefficients,
    pub materials: Materials,
}

impl Phong {
    pub fn new(coefficients: Coefficients, materials: Materials) -> Self {
        Self {
            coefficients,
            materials,
        }
    }
}

impl Illuminate for Phong {
    fn illuminate(&self, hit: &Intersection, light: &Light, viewer: Vec3<f64>, shadowed: bool) -> Color {
        self.coefficients.shade(&self.materials, hit, light, viewer, shadowed)
    }
}
