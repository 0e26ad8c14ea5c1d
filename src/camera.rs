use std::ops::Add;
use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::{
    color::Color,
    geometry::Geometry,
    illumination::{Illuminate, IlluminationModel},
    intersection::Intersection,
    light::Light,
    matrix::Matrix4x4,
    raster::Raster,
    ray::Ray,
    scene::Scene,
    vec3::Vec3,
};

/// Maximum number of chained reflection bounces per primary ray.
pub const MAX_DEPTH: u32 = 2;

/// Counters collected while rendering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub primary: u64,
    pub hits: u64,
    pub shadow: u64,
    pub reflection: u64,
    /// Deepest reflection bounce reached, never above `MAX_DEPTH`.
    pub deepest: u32,
}

impl Add for RenderStats {
    type Output = RenderStats;

    fn add(self, o: RenderStats) -> Self::Output {
        RenderStats {
            primary: self.primary + o.primary,
            hits: self.hits + o.hits,
            shadow: self.shadow + o.shadow,
            reflection: self.reflection + o.reflection,
            deepest: self.deepest.max(o.deepest),
        }
    }
}

/// Pinhole camera.
///
/// The film plane sits `focal_distance` in front of the camera, centered on
/// the optical axis, and spans `film` world units.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    position: Vec3<f64>,
    look_at: Vec3<f64>,
    up: Vec3<f64>,
    film: (f64, f64),
    focal_distance: f64,
    view: Matrix4x4<f64>,
    to_world: Matrix4x4<f64>,
}

impl Camera {
    pub fn new(position: Vec3<f64>, look_at: Vec3<f64>, up: Vec3<f64>, film: (f64, f64), focal_distance: f64) -> Self {
        let forward = (look_at - position).unit();

        let up = if forward.cross(&up).len() < 1e-9 {
            let fallback = fallback_up(&forward);
            warn!("camera up {:?} is parallel to the view direction, using {:?}", up, fallback);
            fallback
        } else {
            up
        };

        let view = Matrix4x4::look_at(position, look_at, up);
        let to_world = view.inverse();

        debug!(
            "camera at {:?} looking at {:?}, film {}x{}, focal distance {}",
            position, look_at, film.0, film.1, focal_distance
        );

        Self {
            position,
            look_at,
            up,
            film,
            focal_distance,
            view,
            to_world,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3<f64> {
        self.position
    }

    #[inline]
    pub fn look_at(&self) -> Vec3<f64> {
        self.look_at
    }

    /// Up vector actually used for the basis, after the degenerate fallback.
    #[inline]
    pub fn up(&self) -> Vec3<f64> {
        self.up
    }

    #[inline]
    pub fn film(&self) -> (f64, f64) {
        self.film
    }

    /// World to camera space.
    #[inline]
    pub fn view_matrix(&self) -> Matrix4x4<f64> {
        self.view
    }

    /// The same camera expressed in its own space: at the origin, looking down
    /// -z. Pair with `Scene::bake(&camera.view_matrix())`.
    pub fn in_view_space(&self) -> Camera {
        Camera::new(
            Vec3::default(),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
            self.film,
            self.focal_distance,
        )
    }

    /// Ray from the camera through the film point of pixel `(x, y)`.
    pub fn primary_ray(&self, x: usize, y: usize, width: usize, height: usize) -> Ray {
        let (film_w, film_h) = self.film;

        let film_x = -film_w / 2.0 + x as f64 * (film_w / width as f64);
        let film_y = film_h / 2.0 - y as f64 * (film_h / height as f64);

        let target = self.to_world.transform_point(Vec3::new(film_x, film_y, -self.focal_distance));

        Ray::new(self.position, target - self.position)
    }

    /// Fills every cell of the raster exactly once. Rows are traced in
    /// parallel.
    pub fn render(&self, scene: &Scene, raster: &mut Raster) -> RenderStats {
        let (width, height) = (raster.width(), raster.height());
        let now = Instant::now();

        let stats = raster
            .pixels_mut()
            .par_chunks_mut(width.max(1))
            .enumerate()
            .map(|(y, row)| {
                let mut stats = RenderStats::default();
                for (x, pixel) in row.iter_mut().enumerate() {
                    let ray = self.primary_ray(x, y, width, height);
                    *pixel = self.trace(&ray, scene, &mut stats).to_rgba32();
                }
                stats
            })
            .reduce(RenderStats::default, |a, b| a + b);

        info!(
            "rendered {}x{} in {} ms: {} primary rays, {} hits, {} shadow rays, {} reflection rays",
            width,
            height,
            now.elapsed().as_millis(),
            stats.primary,
            stats.hits,
            stats.shadow,
            stats.reflection
        );

        stats
    }

    /// Color seen along a primary ray.
    pub fn trace(&self, ray: &Ray, scene: &Scene, stats: &mut RenderStats) -> Color {
        stats.primary += 1;

        match self.intersection(ray, None, scene) {
            Some((object, hit)) => {
                stats.hits += 1;
                let illumination = &scene.objects[object].illumination;
                self.calculate_light(&hit, illumination, &scene.lights, object, 0, scene, stats)
            }
            None => scene.background,
        }
    }

    /// Nearest object hit by the ray, skipping `exclude`.
    ///
    /// Hits are ranked by their parametric distance along this ray, so rays
    /// starting on a surface rank correctly too.
    pub fn intersection(&self, ray: &Ray, exclude: Option<usize>, scene: &Scene) -> Option<(usize, Intersection)> {
        let mut t = f64::INFINITY;
        let mut closest = None;

        for (index, model) in scene.objects.iter().enumerate() {
            if Some(index) == exclude {
                continue;
            }

            if let Some(intersection) = model.geometry.intersection(ray) {
                if intersection.distance() < t {
                    t = intersection.distance();
                    closest = Some((index, intersection));
                }
            }
        }

        closest
    }

    /// Local illumination from every light plus, while `depth < MAX_DEPTH`,
    /// the mirrored ray's color. Clamped to `[0, 1]`.
    #[allow(clippy::too_many_arguments)]
    pub fn calculate_light(
        &self,
        hit: &Intersection,
        illumination: &IlluminationModel,
        lights: &[Light],
        object: usize,
        depth: u32,
        scene: &Scene,
        stats: &mut RenderStats,
    ) -> Color {
        let mut color = Color::BLACK;
        for light in lights {
            let shadowed = self.in_shadow(hit, light, object, scene, stats);
            color += illumination.illuminate(hit, light, self.position, shadowed);
        }

        let reflection = illumination.reflection();
        if depth < MAX_DEPTH && reflection > 0.0 {
            stats.reflection += 1;
            stats.deepest = stats.deepest.max(depth + 1);

            let direction = hit.ray.direction().reflect(&hit.normal);
            let ray = Ray::new(hit.point, direction);

            let reflected = match self.intersection(&ray, Some(object), scene) {
                Some((index, next)) => {
                    let illumination = &scene.objects[index].illumination;
                    self.calculate_light(&next, illumination, lights, index, depth + 1, scene, stats)
                }
                None => scene.background,
            };

            color += reflected * reflection;
        }

        color.clamp()
    }

    /// Whether any other object lies on the ray from the hit point toward the
    /// light.
    ///
    /// The ray is not bounded at the light, so an occluder behind the light
    /// casts a shadow as well.
    pub fn in_shadow(&self, hit: &Intersection, light: &Light, object: usize, scene: &Scene, stats: &mut RenderStats) -> bool {
        stats.shadow += 1;

        let ray = Ray::new(hit.point, light.position - hit.point);

        scene
            .objects
            .iter()
            .enumerate()
            .any(|(index, model)| index != object && model.geometry.intersection(&ray).is_some())
    }
}

/// World axis least aligned with `forward`.
fn fallback_up(forward: &Vec3<f64>) -> Vec3<f64> {
    let (x, y, z) = (forward.x.abs(), forward.y.abs(), forward.z.abs());

    if x <= y && x <= z {
        Vec3::new(1.0, 0.0, 0.0)
    } else if y <= z {
        Vec3::new(0.0, 1.0, 0.0)
    } else {
        Vec3::new(0.0, 0.0, 1.0)
    }
}
