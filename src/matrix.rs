use std::ops::{Add, Mul};

use crate::{vec3::Vec3, vec4::Vec4};

///
/// Index notation is: i, j - row, column.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix4x4<T>([Vec4<T>; 4]);

impl<T: Copy> Matrix4x4<T> {
    pub fn new(v: [[T; 4]; 4]) -> Self {
        Matrix4x4([Vec4::from(v[0]), Vec4::from(v[1]), Vec4::from(v[2]), Vec4::from(v[3])])
    }

    #[inline]
    pub fn at(&self, i: usize, j: usize) -> T {
        self.0[i][j]
    }
}

impl Matrix4x4<f64> {
    pub fn identity() -> Self {
        Matrix4x4::new([[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0], [0.0, 0.0, 0.0, 1.0]])
    }

    pub fn translation(offset: Vec3<f64>) -> Self {
        Matrix4x4::new([
            [1.0, 0.0, 0.0, offset.x],
            [0.0, 1.0, 0.0, offset.y],
            [0.0, 0.0, 1.0, offset.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn scaling(factor: Vec3<f64>) -> Self {
        Matrix4x4::new([
            [factor.x, 0.0, 0.0, 0.0],
            [0.0, factor.y, 0.0, 0.0],
            [0.0, 0.0, factor.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rotation_x(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Matrix4x4::new([
            [1.0, 0.0,  0.0, 0.0],
            [0.0, cos, -sin, 0.0],
            [0.0, sin,  cos, 0.0],
            [0.0, 0.0,  0.0, 1.0],
        ])
    }

    pub fn rotation_y(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Matrix4x4::new([
            [ cos, 0.0, sin, 0.0],
            [ 0.0, 1.0, 0.0, 0.0],
            [-sin, 0.0, cos, 0.0],
            [ 0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rotation_z(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Matrix4x4::new([
            [cos, -sin, 0.0, 0.0],
            [sin,  cos, 0.0, 0.0],
            [0.0,  0.0, 1.0, 0.0],
            [0.0,  0.0, 0.0, 1.0],
        ])
    }

    /// World to camera space for a right-handed camera at `eye` looking at
    /// `target`. The camera looks down its own -z axis.
    ///
    /// `up` must not be parallel to the view direction.
    pub fn look_at(eye: Vec3<f64>, target: Vec3<f64>, up: Vec3<f64>) -> Self {
        let f = (target - eye).unit();
        let s = f.cross(&up).unit();
        let u = s.cross(&f);

        Matrix4x4::new([
            [ s.x,  s.y,  s.z, -s.dot(&eye)],
            [ u.x,  u.y,  u.z, -u.dot(&eye)],
            [-f.x, -f.y, -f.z,  f.dot(&eye)],
            [ 0.0,  0.0,  0.0,  1.0],
        ])
    }

    pub fn transpose(&self) -> Self {
        let a = self.0;
        let mut m = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                m[j][i] = a[i][j];
            }
        }

        Matrix4x4::new(m)
    }

    pub fn determinant(&self) -> f64 {
        let (s, c) = self.cofactor_terms();

        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// 2x2 sub-determinants of the upper (`s`) and lower (`c`) row pairs.
    fn cofactor_terms(&self) -> ([f64; 6], [f64; 6]) {
        let a = self.0;

        let s = [
            a[0][0] * a[1][1] - a[1][0] * a[0][1],
            a[0][0] * a[1][2] - a[1][0] * a[0][2],
            a[0][0] * a[1][3] - a[1][0] * a[0][3],
            a[0][1] * a[1][2] - a[1][1] * a[0][2],
            a[0][1] * a[1][3] - a[1][1] * a[0][3],
            a[0][2] * a[1][3] - a[1][2] * a[0][3],
        ];

        let c = [
            a[2][0] * a[3][1] - a[3][0] * a[2][1],
            a[2][0] * a[3][2] - a[3][0] * a[2][2],
            a[2][0] * a[3][3] - a[3][0] * a[2][3],
            a[2][1] * a[3][2] - a[3][1] * a[2][2],
            a[2][1] * a[3][3] - a[3][1] * a[2][3],
            a[2][2] * a[3][3] - a[3][2] * a[2][3],
        ];

        (s, c)
    }

    /// Returns the inverse matrix.
    ///
    /// A singular matrix has no inverse; the identity is returned instead so
    /// that rendering can always proceed.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            log::warn!("singular matrix, falling back to identity: {:?}", self);
            return Matrix4x4::identity();
        }

        let (s, c) = self.cofactor_terms();
        let inv_det = 1.0 / det;
        let a = self.0;

        let mut m = [[0.0; 4]; 4];

        m[0][0] = ( a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3]) * inv_det;
        m[0][1] = (-a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3]) * inv_det;
        m[0][2] = ( a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3]) * inv_det;
        m[0][3] = (-a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3]) * inv_det;

        m[1][0] = (-a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1]) * inv_det;
        m[1][1] = ( a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1]) * inv_det;
        m[1][2] = (-a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1]) * inv_det;
        m[1][3] = ( a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1]) * inv_det;

        m[2][0] = ( a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0]) * inv_det;
        m[2][1] = (-a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0]) * inv_det;
        m[2][2] = ( a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0]) * inv_det;
        m[2][3] = (-a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0]) * inv_det;

        m[3][0] = (-a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0]) * inv_det;
        m[3][1] = ( a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0]) * inv_det;
        m[3][2] = (-a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0]) * inv_det;
        m[3][3] = ( a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0]) * inv_det;

        Matrix4x4::new(m)
    }

    /// Whether the upper 3x3 block is a rotation, i.e. distances survive the
    /// transform.
    pub fn is_rigid(&self) -> bool {
        let x = self.transform_vector(Vec3::new(1.0, 0.0, 0.0));
        let y = self.transform_vector(Vec3::new(0.0, 1.0, 0.0));
        let z = self.transform_vector(Vec3::new(0.0, 0.0, 1.0));

        let unit = |v: &Vec3<f64>| (v.len() - 1.0).abs() < 1e-9;
        let orthogonal = |a: &Vec3<f64>, b: &Vec3<f64>| a.dot(b).abs() < 1e-9;

        unit(&x) && unit(&y) && unit(&z) && orthogonal(&x, &y) && orthogonal(&y, &z) && orthogonal(&x, &z)
    }

    #[inline]
    pub fn transform_point(&self, p: Vec3<f64>) -> Vec3<f64> {
        (self * Vec4::point(p)).into()
    }

    #[inline]
    pub fn transform_vector(&self, v: Vec3<f64>) -> Vec3<f64> {
        (self * Vec4::direction(v)).into()
    }
}

impl<'a, T: Copy + Add<Output = T> + Mul<Output = T>> Mul<Vec4<T>> for &'a Matrix4x4<T> {
    type Output = Vec4<T>;

    fn mul(self, vec: Vec4<T>) -> Self::Output {
        let row = |i: usize| {
            vec[0] * self.0[i][0] + vec[1] * self.0[i][1] + vec[2] * self.0[i][2] + vec[3] * self.0[i][3]
        };

        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

impl Mul<Matrix4x4<f64>> for Matrix4x4<f64> {
    type Output = Matrix4x4<f64>;

    fn mul(self, o: Matrix4x4<f64>) -> Self::Output {
        let mut out = [[0.0; 4]; 4];

        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    out[i][j] += self.0[i][k] * o.0[k][j];
                }
            }
        }

        Matrix4x4::new(out)
    }
}
