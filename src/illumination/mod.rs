//! Local illumination models.
//!
//! The set of models is closed, so they are dispatched through the
//! `IlluminationModel` enum rather than trait objects.

use crate::{color::Color, intersection::Intersection, light::Light, vec3::Vec3};

mod checker;
mod phong;

pub use self::checker::Checkerboard;
pub use self::phong::Phong;

pub trait Illuminate {
    /// Color contributed by a single light at the hit point, as seen from
    /// `viewer`. A shadowed surface only receives the ambient term.
    fn illuminate(&self, hit: &Intersection, light: &Light, viewer: Vec3<f64>, shadowed: bool) -> Color;
}

/// Weights shared by every model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coefficients {
    /// Read from scene files but not applied: the ambient term is the light's
    /// ambient color.
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    /// Specular exponent.
    pub exponent: f64,
    /// Fraction of the mirrored ray's color added on top, `0` disables
    /// reflection.
    pub reflection: f64,
    /// Reserved, refraction is not traced.
    pub refraction: f64,
}

/// Surface colors fed into the Phong formula.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Materials {
    /// Not applied, see `Coefficients::ambient`.
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl Coefficients {
    /// `ambient + diffuse + specular` for one light.
    ///
    /// The ambient term is the light's ambient color as is. Diffuse and
    /// specular are clamped at zero independently, so a light behind the
    /// surface can still leave a highlight.
    pub fn shade(&self, materials: &Materials, hit: &Intersection, light: &Light, viewer: Vec3<f64>, shadowed: bool) -> Color {
        let ambient = light.ambient;
        if shadowed {
            return ambient;
        }

        let n = hit.normal;
        let l = (light.position - hit.point).unit();
        let diffuse = light.color * materials.diffuse * (self.diffuse * n.dot(&l).max(0.0));

        let r = (-l).reflect(&n);
        let v = (viewer - hit.point).unit();
        let highlight = r.dot(&v).max(0.0).powf(self.exponent);
        let specular = light.color * materials.specular * (self.specular * highlight);

        ambient + diffuse + specular
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum IlluminationModel {
    Phong(Phong),
    Checkerboard(Checkerboard),
}

impl IlluminationModel {
    pub fn coefficients(&self) -> &Coefficients {
        match self {
            IlluminationModel::Phong(m) => &m.coefficients,
            IlluminationModel::Checkerboard(m) => &m.coefficients,
        }
    }

    #[inline]
    pub fn reflection(&self) -> f64 {
        self.coefficients().reflection
    }
}

impl Illuminate for IlluminationModel {
    fn illuminate(&self, hit: &Intersection, light: &Light, viewer: Vec3<f64>, shadowed: bool) -> Color {
        match self {
            IlluminationModel::Phong(m) => m.illuminate(hit, light, viewer, shadowed),
            IlluminationModel::Checkerboard(m) => m.illuminate(hit, light, viewer, shadowed),
        }
    }
}

impl From<Phong> for IlluminationModel {
    fn from(m: Phong) -> Self {
        IlluminationModel::Phong(m)
    }
}

impl From<Checkerboard> for IlluminationModel {
    fn from(m: Checkerboard) -> Self {
        IlluminationModel::Checkerboard(m)
    }
}
