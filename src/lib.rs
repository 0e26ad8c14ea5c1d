//! Recursive ray tracer: spheres and triangle meshes lit by point lights, with
//! Phong shading, hard shadows and bounded mirror reflection.

#[macro_use]
extern crate serde_derive;

pub mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod illumination;
pub mod intersection;
pub mod light;
pub mod matrix;
pub mod raster;
pub mod ray;
pub mod scene;
pub mod transform;
pub mod vec3;
pub mod vec4;

pub use crate::camera::{Camera, RenderStats, MAX_DEPTH};
pub use crate::color::Color;
pub use crate::config::SceneConfig;
pub use crate::error::Error;
pub use crate::geometry::{Geometry, Model, Polygon, Shape, Sphere};
pub use crate::illumination::{Checkerboard, Coefficients, Illuminate, IlluminationModel, Materials, Phong};
pub use crate::intersection::Intersection;
pub use crate::light::Light;
pub use crate::matrix::Matrix4x4;
pub use crate::raster::Raster;
pub use crate::ray::Ray;
pub use crate::scene::Scene;
pub use crate::transform::Transform;
pub use crate::vec3::Vec3;
