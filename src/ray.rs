use crate::{matrix::Matrix4x4, transform::Transform, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    origin: Vec3<f64>,
    direction: Vec3<f64>,
}

impl Ray {
    /// Direction is normalized here, so intersection routines may assume a
    /// unit vector.
    pub fn new(origin: Vec3<f64>, direction: Vec3<f64>) -> Self {
        Self {
            origin,
            direction: direction.unit(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec3<f64> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vec3<f64> {
        &self.direction
    }

    #[inline]
    pub fn offset(&self, t: f64) -> Vec3<f64> {
        self.origin + self.direction.scale(t)
    }
}

impl Transform<f64> for Ray {
    fn transform(&mut self, transformation: &Matrix4x4<f64>) {
        self.origin = transformation.transform_point(self.origin);
        self.direction = transformation.transform_vector(self.direction).unit();
    }
}
