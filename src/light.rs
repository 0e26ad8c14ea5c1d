use crate::{color::Color, matrix::Matrix4x4, transform::Transform, vec3::Vec3};

/// Point light.
///
/// `ambient` is added to every lit surface even when the light itself is
/// occluded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3<f64>,
    pub color: Color,
    pub ambient: Color,
}

impl Light {
    pub fn new(position: Vec3<f64>, color: Color, ambient: Color) -> Self {
        Self {
            position,
            color,
            ambient,
        }
    }
}

impl Transform<f64> for Light {
    fn transform(&mut self, transformation: &Matrix4x4<f64>) {
        self.position = transformation.transform_point(self.position);
    }
}
