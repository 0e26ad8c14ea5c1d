use crate::matrix::Matrix4x4;

/// Geometry that can be moved in place by an affine matrix.
///
/// Meant for a one-time bake before rendering, e.g. world to camera space.
pub trait Transform<T> {
    fn transform(&mut self, transformation: &Matrix4x4<T>);
}
