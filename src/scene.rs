use crate::{color::Color, geometry::Model, light::Light, matrix::Matrix4x4, transform::Transform};

/// Everything a camera can see.
///
/// Models are addressed by their index in `objects`; the camera uses it to
/// keep secondary rays from re-hitting the surface they start on.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub lights: Vec<Light>,
    pub objects: Vec<Model>,
    pub background: Color,
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            lights: Vec::new(),
            objects: Vec::new(),
            background,
        }
    }

    pub fn add_light(&mut self, light: Light) -> &mut Self {
        self.lights.push(light);
        self
    }

    /// Adds a model and returns its index.
    pub fn add_object(&mut self, model: Model) -> usize {
        self.objects.push(model);
        self.objects.len() - 1
    }

    /// Applies a one-time transform to every model and light, e.g. to move
    /// the whole scene into camera space before rendering.
    pub fn bake(&mut self, transformation: &Matrix4x4<f64>) {
        for model in &mut self.objects {
            model.transform(transformation);
        }

        for light in &mut self.lights {
            light.transform(transformation);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new(Color::BLUE)
    }
}
