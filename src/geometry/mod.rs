use crate::{
    illumination::IlluminationModel, intersection::Intersection, matrix::Matrix4x4, ray::Ray,
    transform::Transform,
};

mod polygon;
mod sphere;

pub use self::polygon::Polygon;
pub use self::sphere::Sphere;

pub trait Geometry {
    /// Nearest forward hit of a ray with a unit direction, if any.
    fn intersection(&self, ray: &Ray) -> Option<Intersection>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Polygon(Polygon),
}

impl Geometry for Shape {
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        match self {
            Shape::Sphere(s) => s.intersection(ray),
            Shape::Polygon(p) => p.intersection(ray),
        }
    }
}

impl Transform<f64> for Shape {
    fn transform(&mut self, transformation: &Matrix4x4<f64>) {
        match self {
            Shape::Sphere(s) => s.transform(transformation),
            Shape::Polygon(p) => p.transform(transformation),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}

/// Scene object: a shape and the illumination model it owns.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub geometry: Shape,
    pub illumination: IlluminationModel,
}

impl Model {
    pub fn new<G, I>(geometry: G, illumination: I) -> Self
    where
        G: Into<Shape>,
        I: Into<IlluminationModel>,
    {
        Self {
            geometry: geometry.into(),
            illumination: illumination.into(),
        }
    }
}

impl Transform<f64> for Model {
    fn transform(&mut self, transformation: &Matrix4x4<f64>) {
        self.geometry.transform(transformation);
    }
}
