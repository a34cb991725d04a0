//! # Geometry helpers
//!
//! Bounding volumes and ray casting used by annotation bounds and marker
//! picking. Screen-to-ray unprojection mirrors the usual NDC round trip:
//! mouse pixels -> normalized device coordinates -> inverse view-projection
//! -> world-space ray.

use cgmath::{
    EuclideanSpace, InnerSpace, Matrix4, Point3, Rad, SquareMatrix, Vector3, Vector4, Zero,
};

/// Axis-aligned bounding box over `f64` coordinates.
///
/// A freshly created box is empty (`min > max` on every axis) and behaves as
/// the identity for [`Aabb::union`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl Aabb {
    /// Creates an empty bounding box.
    pub fn empty() -> Self {
        Self {
            min: Vector3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Vector3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn new(min: Vector3<f64>, max: Vector3<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grows the box to contain `point`.
    pub fn expand_by_point(&mut self, point: Vector3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Grows the box to contain `other`. Empty operands are ignored.
    pub fn union(&mut self, other: &Aabb) {
        if other.is_empty() {
            return;
        }
        self.expand_by_point(other.min);
        self.expand_by_point(other.max);
    }

    /// Center of the box, or the origin for an empty box.
    pub fn center(&self) -> Vector3<f64> {
        if self.is_empty() {
            return Vector3::zero();
        }
        (self.min + self.max) / 2.0
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

/// A 3D ray for intersection testing.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space.
    pub origin: Vector3<f64>,
    /// Ray direction (normalized).
    pub direction: Vector3<f64>,
}

impl Ray {
    pub fn new(origin: Vector3<f64>, direction: Vector3<f64>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point along the ray at distance `t`.
    pub fn point_at(&self, t: f64) -> Vector3<f64> {
        self.origin + self.direction * t
    }

    /// Ray-sphere intersection.
    ///
    /// Returns the distance to the nearest intersection in front of the
    /// origin, or `None` when the ray misses.
    pub fn intersect_sphere(&self, center: Vector3<f64>, radius: f64) -> Option<f64> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.dot(oc) - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let t_near = -b - sqrt_d;
        let t_far = -b + sqrt_d;
        if t_near >= 0.0 {
            Some(t_near)
        } else if t_far >= 0.0 {
            Some(t_far)
        } else {
            None
        }
    }
}

/// Converts screen pixel coordinates to a world-space ray.
///
/// `screen_pos` is in pixels with the origin at the top-left corner, matching
/// browser pointer coordinates. The projection is the standard right-handed
/// perspective camera looking from `eye` toward `target`.
#[allow(clippy::too_many_arguments)]
pub fn screen_to_ray(
    screen_pos: (f64, f64),
    screen_size: (f64, f64),
    eye: Vector3<f64>,
    target: Vector3<f64>,
    up: Vector3<f64>,
    fovy: Rad<f64>,
    znear: f64,
    zfar: f64,
) -> Ray {
    let (mouse_x, mouse_y) = screen_pos;
    let (screen_width, screen_height) = screen_size;
    let aspect = screen_width / screen_height.max(1.0);

    // Normalized device coordinates (-1 to 1), Y flipped.
    let ndc_x = (2.0 * mouse_x) / screen_width - 1.0;
    let ndc_y = 1.0 - (2.0 * mouse_y) / screen_height;

    let view_matrix = Matrix4::look_at_rh(
        Point3::from_vec(eye),
        Point3::from_vec(target),
        up,
    );
    let proj_matrix = cgmath::perspective(fovy, aspect, znear, zfar);

    let view_proj = proj_matrix * view_matrix;
    let inv_view_proj = view_proj.invert().unwrap_or_else(Matrix4::identity);

    // Unproject near and far plane points back to world space.
    let near_point = Vector4::new(ndc_x, ndc_y, -1.0, 1.0);
    let far_point = Vector4::new(ndc_x, ndc_y, 1.0, 1.0);

    let world_near = inv_view_proj * near_point;
    let world_far = inv_view_proj * far_point;

    let near_3d = world_near.truncate() / world_near.w;
    let far_3d = world_far.truncate() / world_far.w;

    Ray::new(near_3d, far_3d - near_3d)
}
