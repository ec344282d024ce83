//! Point versus oriented bounding box testing
//!
//! The box is stored in MODEL SPACE as base half-extents only. Its world-space
//! geometry (center, axes, per-axis bounds) is derived from the current
//! transform at test time and never cached, so a moved box can never be tested
//! against stale bounds.
//!
//! The test moves the point into a frame centered on the box, takes the scalar
//! projection onto each of the box's local axes and checks it against that
//! axis' scaled bounds. Axes are visited in X, Y, Z order and the first axis
//! that rejects the point ends the test.

use crate::foundation::math::{Mat3, Vec3};

/// One of the box's three local axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Local X (rotation column 0)
    X,
    /// Local Y (rotation column 1)
    Y,
    /// Local Z (rotation column 2)
    Z,
}

impl Axis {
    /// All axes in test order
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Column / component index of this axis
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Box collider described by its untransformed dimensions
///
/// Half-extents must be strictly positive. This is a caller contract and is
/// not checked at test time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObbCollider {
    /// Half width, half height and half depth in the box's local space
    pub half_extents: Vec3,
}

impl Default for ObbCollider {
    /// Box spanning -1.0 to 1.0 on each axis
    fn default() -> Self {
        Self::new(2.0, 2.0, 2.0)
    }
}

impl ObbCollider {
    /// Create a collider from full width, height and depth
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            half_extents: Vec3::new(width * 0.5, height * 0.5, depth * 0.5),
        }
    }

    /// Create a collider directly from half-extents
    pub fn from_half_extents(half_extents: Vec3) -> Self {
        Self { half_extents }
    }

    /// Size the collider to the local-space extents of a vertex cloud
    ///
    /// The cloud is assumed to be centered on the origin, as the box meshes
    /// used by the scene are. Returns `None` for an empty slice.
    pub fn from_vertices(positions: &[Vec3]) -> Option<Self> {
        let first = positions.first()?;
        let (min, max) = positions.iter().fold((*first, *first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        });
        let size = max - min;
        Some(Self::new(size.x, size.y, size.z))
    }
}

/// World-space view of an [`ObbCollider`] under a particular transform
///
/// Temporary, built per query by [`WorldSpaceObb::from_transform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldSpaceObb {
    /// Box center (the transform's translation)
    pub center: Vec3,
    /// Local axes as matrix columns (the transform's rotation)
    pub axes: Mat3,
    /// Lower bound per local axis (`scale ⊙ -half_extents`)
    pub min: Vec3,
    /// Upper bound per local axis (`scale ⊙ half_extents`)
    pub max: Vec3,
}

impl WorldSpaceObb {
    /// Derive world-space geometry from base extents and the current transform
    ///
    /// Scale is applied componentwise to the bounds, matching how the box
    /// mesh itself is scaled before being rotated and translated.
    pub fn from_transform(
        collider: &ObbCollider,
        translation: Vec3,
        rotation: &Mat3,
        scale: Vec3,
    ) -> Self {
        Self {
            center: translation,
            axes: *rotation,
            min: scale.component_mul(&(-collider.half_extents)),
            max: scale.component_mul(&collider.half_extents),
        }
    }

    /// Signed distance of `point` from the center along one local axis
    pub fn project(&self, axis: Axis, point: &Vec3) -> f32 {
        let local = point - self.center;
        self.axes.column(axis.index()).dot(&local)
    }

    /// First local axis whose bounds reject `point`, or `None` if every axis
    /// accepts it
    ///
    /// Bounds are inclusive on both ends and no tolerance is applied. Later
    /// axes are not projected once an earlier one rejects.
    pub fn first_separating_axis(&self, point: &Vec3) -> Option<Axis> {
        Axis::ALL.into_iter().find(|&axis| {
            let i = axis.index();
            let projection = self.project(axis, point);
            !(self.min[i] <= projection && projection <= self.max[i])
        })
    }

    /// Whether `point` lies inside or on the surface of the box
    pub fn contains_point(&self, point: &Vec3) -> bool {
        self.first_separating_axis(point).is_none()
    }
}

/// Find the first box axis that separates the point from the box
///
/// See [`WorldSpaceObb::first_separating_axis`].
pub fn first_separating_axis(
    collider: &ObbCollider,
    translation: Vec3,
    rotation: &Mat3,
    scale: Vec3,
    point: Vec3,
) -> Option<Axis> {
    WorldSpaceObb::from_transform(collider, translation, rotation, scale).first_separating_axis(&point)
}

/// Test a world-space point against an oriented bounding box
///
/// `rotation` must be orthonormal and the collider's half-extents positive;
/// malformed input gives a meaningless answer rather than an error.
/// A point exactly on a face collides.
pub fn test_collision(
    collider: &ObbCollider,
    translation: Vec3,
    rotation: &Mat3,
    scale: Vec3,
    point: Vec3,
) -> bool {
    first_separating_axis(collider, translation, rotation, scale, point).is_none()
}
