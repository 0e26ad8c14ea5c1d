//! JSON scene description.
//!
//! ```json
//! {
//!   "background": [0.0, 0.0, 1.0],
//!   "camera": { "position": [0, 0, 0], "look_at": [0, 0, 1], "film": [2, 2], "focal_distance": 1 },
//!   "lights": [ { "position": [0, 3, 5], "color": [1, 1, 1], "ambient": [0.1, 0, 0] } ],
//!   "objects": [
//!     {
//!       "geometry": { "type": "sphere", "center": [0, 0, 5], "radius": 1 },
//!       "illumination": {
//!         "type": "phong",
//!         "coefficients": { "ambient": 1, "diffuse": 0.5, "specular": 0.5, "exponent": 70 },
//!         "ambient": [1, 1, 1], "diffuse": [1, 1, 1], "specular": [1, 1, 1]
//!       }
//!     }
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};

use crate::{
    camera::Camera,
    color::Color,
    error::Error,
    geometry::{Model, Polygon, Shape, Sphere},
    illumination::{Checkerboard, Coefficients, IlluminationModel, Materials, Phong},
    light::Light,
    matrix::Matrix4x4,
    scene::Scene,
    transform::Transform,
    vec3::Vec3,
};

fn default_background() -> [f64; 3] {
    [0.0, 0.0, 1.0]
}

fn default_up() -> [f64; 3] {
    [0.0, 1.0, 0.0]
}

fn default_period() -> f64 {
    1.0
}

#[derive(Clone, Debug, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_background")]
    pub background: [f64; 3],
    pub camera: CameraConfig,
    #[serde(default)]
    pub lights: Vec<LightConfig>,
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CameraConfig {
    pub position: [f64; 3],
    pub look_at: [f64; 3],
    #[serde(default = "default_up")]
    pub up: [f64; 3],
    pub film: [f64; 2],
    pub focal_distance: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LightConfig {
    pub position: [f64; 3],
    pub color: [f64; 3],
    #[serde(default)]
    pub ambient: [f64; 3],
}

#[derive(Clone, Debug, Deserialize)]
pub struct ObjectConfig {
    pub geometry: GeometryConfig,
    pub illumination: IlluminationConfig,
    /// Row-major matrix applied once at load time. Spheres only move their
    /// center, so scale and shear leave their radius as given.
    #[serde(default)]
    pub transform: Option<[[f64; 4]; 4]>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GeometryConfig {
    Sphere {
        center: [f64; 3],
        radius: f64,
    },
    Polygon {
        vertices: Vec<[f64; 3]>,
        indices: Vec<usize>,
    },
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct CoefficientsConfig {
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub exponent: f64,
    #[serde(default)]
    pub reflection: f64,
    #[serde(default)]
    pub refraction: f64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IlluminationConfig {
    Phong {
        coefficients: CoefficientsConfig,
        ambient: [f64; 3],
        diffuse: [f64; 3],
        specular: [f64; 3],
    },
    Checkerboard {
        coefficients: CoefficientsConfig,
        even: [f64; 3],
        odd: [f64; 3],
        #[serde(default = "default_period")]
        period: f64,
    },
}

impl SceneConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;

        Ok(config)
    }

    pub fn parse(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the scene and its camera, applying per-object transforms.
    pub fn build(&self) -> Result<(Scene, Camera), Error> {
        let mut scene = Scene::new(Color::from(self.background));

        for light in &self.lights {
            scene.add_light(Light::new(
                Vec3::from(light.position),
                Color::from(light.color),
                Color::from(light.ambient),
            ));
        }

        for (index, object) in self.objects.iter().enumerate() {
            let mut model = Model {
                geometry: object.geometry.build()?,
                illumination: object.illumination.build(),
            };

            if let Some(m) = object.transform {
                debug!("transforming object {} by {:?}", index, m);
                model.transform(&Matrix4x4::new(m));
            }

            scene.add_object(model);
        }

        let camera = Camera::new(
            Vec3::from(self.camera.position),
            Vec3::from(self.camera.look_at),
            Vec3::from(self.camera.up),
            (self.camera.film[0], self.camera.film[1]),
            self.camera.focal_distance,
        );

        info!("scene built: {} objects, {} lights", scene.objects.len(), scene.lights.len());

        Ok((scene, camera))
    }
}

impl GeometryConfig {
    fn build(&self) -> Result<Shape, Error> {
        let shape: Shape = match self {
            GeometryConfig::Sphere { center, radius } => Sphere::new(Vec3::from(*center), *radius).into(),
            GeometryConfig::Polygon { vertices, indices } => {
                let vertices = vertices.iter().map(|&v| Vec3::from(v)).collect();
                Polygon::new(vertices, indices.clone())?.into()
            }
        };

        Ok(shape)
    }
}

impl From<CoefficientsConfig> for Coefficients {
    fn from(c: CoefficientsConfig) -> Self {
        Coefficients {
            ambient: c.ambient,
            diffuse: c.diffuse,
            specular: c.specular,
            exponent: c.exponent,
            reflection: c.reflection,
            refraction: c.refraction,
        }
    }
}

impl IlluminationConfig {
    fn build(&self) -> IlluminationModel {
        match *self {
            IlluminationConfig::Phong {
                coefficients,
                ambient,
                diffuse,
                specular,
            } => {
                let materials = Materials {
                    ambient: ambient.into(),
                    diffuse: diffuse.into(),
                    specular: specular.into(),
                };

                Phong::new(coefficients.into(), materials).into()
            }
            IlluminationConfig::Checkerboard {
                coefficients,
                even,
                odd,
                period,
            } => Checkerboard::new(coefficients.into(), even.into(), odd.into(), period).into(),
        }
    }
}
