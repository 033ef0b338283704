//! The six faces of a box: the [`Face6`] type.
//! This module is private but reexported by its parent.

use euclid::{Point3D, Vector3D};

use crate::math::{Axis, FreeCoordinate, FreeVector, UnitPoint};

/// Identifies one of the six faces of a box.
///
/// The discriminants are the face indices used by editing tools and stored in their
/// state; they are not in axis order. Use [`Face6::from_index()`] to convert back.
///
/// | index | face            |
/// |-------|-----------------|
/// | 0     | [`NY`](Self::NY) |
/// | 1     | [`PY`](Self::PY) |
/// | 2     | [`NZ`](Self::NZ) |
/// | 3     | [`PZ`](Self::PZ) |
/// | 4     | [`PX`](Self::PX) |
/// | 5     | [`NX`](Self::NX) |
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Face6 {
    /// Negative Y; the face whose outward normal is `(0, -1, 0)`.
    NY = 0,
    /// Positive Y; the face whose outward normal is `(0, 1, 0)`.
    PY = 1,
    /// Negative Z; the face whose outward normal is `(0, 0, -1)`.
    NZ = 2,
    /// Positive Z; the face whose outward normal is `(0, 0, 1)`.
    PZ = 3,
    /// Positive X; the face whose outward normal is `(1, 0, 0)`.
    PX = 4,
    /// Negative X; the face whose outward normal is `(-1, 0, 0)`.
    NX = 5,
}

impl Face6 {
    /// All the values of [`Face6`], in index order.
    pub const ALL: [Face6; 6] = [
        Face6::NY,
        Face6::PY,
        Face6::NZ,
        Face6::PZ,
        Face6::PX,
        Face6::NX,
    ];

    /// Returns the face index of this face.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Face6::index()`]. Returns [`None`] if `index` is 6 or greater.
    ///
    /// ```
    /// use editbox::math::Face6;
    ///
    /// assert_eq!(Face6::from_index(4), Some(Face6::PX));
    /// assert_eq!(Face6::from_index(6), None);
    /// ```
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::NY),
            1 => Some(Self::PY),
            2 => Some(Self::NZ),
            3 => Some(Self::PZ),
            4 => Some(Self::PX),
            5 => Some(Self::NX),
            _ => None,
        }
    }

    /// Returns which axis this face's normal vector is parallel to.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::NX | Self::PX => Axis::X,
            Self::NY | Self::PY => Axis::Y,
            Self::NZ | Self::PZ => Axis::Z,
        }
    }

    /// Returns whether this face's normal vector points in the positive direction
    /// of its axis.
    #[inline]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::PX | Self::PY | Self::PZ)
    }

    /// Returns the face on the other side of the box.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Face6 {
        match self {
            Face6::NY => Face6::PY,
            Face6::PY => Face6::NY,
            Face6::NZ => Face6::PZ,
            Face6::PZ => Face6::NZ,
            Face6::PX => Face6::NX,
            Face6::NX => Face6::PX,
        }
    }

    /// Returns the outward unit normal of this face.
    #[inline]
    pub fn normal_vector(self) -> FreeVector {
        let sign: FreeCoordinate = if self.is_positive() { 1.0 } else { -1.0 };
        let mut v = Vector3D::zero();
        v[self.axis()] = sign;
        v
    }

    /// Returns the four corners of this face of the canonical cube `[-1, 1]³`.
    ///
    /// The corners are listed in order around the perimeter of the face, so consecutive
    /// corners (and the last and first) share an edge.
    #[inline]
    pub const fn unit_corners(self) -> [UnitPoint; 4] {
        const fn p(x: FreeCoordinate, y: FreeCoordinate, z: FreeCoordinate) -> UnitPoint {
            Point3D::new(x, y, z)
        }
        match self {
            Face6::NY => [p(-1., -1., -1.), p(1., -1., -1.), p(1., -1., 1.), p(-1., -1., 1.)],
            Face6::PY => [p(1., 1., -1.), p(-1., 1., -1.), p(-1., 1., 1.), p(1., 1., 1.)],
            Face6::NZ => [p(-1., -1., -1.), p(-1., 1., -1.), p(1., 1., -1.), p(1., -1., -1.)],
            Face6::PZ => [p(1., -1., 1.), p(1., 1., 1.), p(-1., 1., 1.), p(-1., -1., 1.)],
            Face6::PX => [p(1., -1., -1.), p(1., 1., -1.), p(1., 1., 1.), p(1., -1., 1.)],
            Face6::NX => [p(-1., -1., -1.), p(-1., -1., 1.), p(-1., 1., 1.), p(-1., 1., -1.)],
        }
    }
}

impl From<Face6> for usize {
    #[inline]
    fn from(value: Face6) -> Self {
        value.index()
    }
}
