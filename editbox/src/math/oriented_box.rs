//! [`OrientedBox`], the general box representation.
//! This module is private but reexported by its parent.

use core::fmt;

use euclid::{Point3D, Size3D, Transform3D, Vector3D};

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::FloatCore as _;

use crate::math::{
    AlignedBox, Axis, FreeCoordinate, FreePoint, FreeVector, UnitCube, UnitPoint, World,
};

/// The corners of the canonical cube, in the order [`OrientedBox::vertices()`] reports them:
/// first the four corners of the +Z face, then the four corners of the −Z face, each going
/// counterclockwise as seen from +Z starting at −X −Y.
pub const UNIT_CUBE_VERTICES: [UnitPoint; 8] = [
    Point3D::new(-1., -1., 1.),
    Point3D::new(1., -1., 1.),
    Point3D::new(1., 1., 1.),
    Point3D::new(-1., 1., 1.),
    Point3D::new(-1., -1., -1.),
    Point3D::new(1., -1., -1.),
    Point3D::new(1., 1., -1.),
    Point3D::new(-1., 1., -1.),
];

/// A box of arbitrary position, orientation, and shape: the image of the cube
/// `[-1, 1]³` under an affine transformation.
///
/// The box is stored as the 4×4 matrix of that transformation, in columns:
///
/// * columns 0, 1, and 2 are the *half-extent* vectors: the images of the unit X, Y, and Z
///   vectors, each pointing from the center of the box to the center of a face, with a
///   homogeneous component that is 0 for any well-formed box;
/// * column 3 is the center of the box, with a homogeneous component of 1.
///
/// The same storage may be read and written as a matrix ([`OrientedBox::from_arrays()`],
/// [`OrientedBox::to_arrays()`], [`OrientedBox::to_transform()`]) or by name
/// ([`OrientedBox::half_extent()`], [`OrientedBox::center()`], and their `with_` setters).
///
/// The all-zero matrix, [`OrientedBox::NULL`], stands for “no box”.
/// Boxes whose transformation has no rotation or shear can be converted into
/// [`AlignedBox`], which offers further operations.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct OrientedBox {
    columns: [[FreeCoordinate; 4]; 4],
}

impl OrientedBox {
    /// The null box, whose every matrix entry is zero.
    ///
    /// Any box whose center has a homogeneous component of zero is considered null;
    /// see [`OrientedBox::is_null()`].
    pub const NULL: Self = Self {
        columns: [[0.0; 4]; 4],
    };

    /// The canonical cube `[-1, 1]³` itself, whose matrix is the identity.
    pub const UNIT: Self = Self {
        columns: [
            [1., 0., 0., 0.],
            [0., 1., 0., 0.],
            [0., 0., 1., 0.],
            [0., 0., 0., 1.],
        ],
    };

    /// Constructs a box from its three half-extent vectors and its center.
    ///
    /// ```
    /// use editbox::math::{OrientedBox, FreePoint, FreeVector};
    ///
    /// // A box rotated 90° about Z.
    /// let b = OrientedBox::new(
    ///     FreeVector::new(0.0, 1.0, 0.0),
    ///     FreeVector::new(-2.0, 0.0, 0.0),
    ///     FreeVector::new(0.0, 0.0, 1.0),
    ///     FreePoint::new(10.0, 0.0, 0.0),
    /// );
    /// assert!(!b.is_axis_aligned());
    /// assert_eq!(b.volume(), 16.0);
    /// ```
    #[inline]
    pub fn new(
        half_width: FreeVector,
        half_height: FreeVector,
        half_depth: FreeVector,
        center: FreePoint,
    ) -> Self {
        Self::UNIT
            .with_half_extent(Axis::X, half_width)
            .with_half_extent(Axis::Y, half_height)
            .with_half_extent(Axis::Z, half_depth)
            .with_center(center)
    }

    /// Constructs a box from its matrix, as four columns of four elements.
    ///
    /// No validation is performed; a matrix with nonzero homogeneous components in the
    /// first three columns describes a projective shape that most operations will treat
    /// as if those components were zero.
    #[inline]
    pub const fn from_arrays(columns: [[FreeCoordinate; 4]; 4]) -> Self {
        Self { columns }
    }

    /// Returns the matrix of this box, as four columns of four elements.
    #[inline]
    pub const fn to_arrays(self) -> [[FreeCoordinate; 4]; 4] {
        self.columns
    }

    /// Constructs a box from the transformation of the canonical cube into world space.
    #[inline]
    pub fn from_transform(transform: &Transform3D<FreeCoordinate, UnitCube, World>) -> Self {
        // euclid transforms row vectors, so its rows are our columns.
        Self::from_arrays(transform.to_arrays())
    }

    /// Returns the transformation of the canonical cube into world space.
    #[inline]
    #[rustfmt::skip]
    pub fn to_transform(&self) -> Transform3D<FreeCoordinate, UnitCube, World> {
        let [x, y, z, w] = self.columns;
        Transform3D::new(
            x[0], x[1], x[2], x[3],
            y[0], y[1], y[2], y[3],
            z[0], z[1], z[2], z[3],
            w[0], w[1], w[2], w[3],
        )
    }

    /// Returns the half-extent vector of the box along its local `axis`:
    /// the displacement from the center of the box to the center of its face in that
    /// direction.
    #[inline]
    pub fn half_extent(&self, axis: Axis) -> FreeVector {
        let [x, y, z, _] = self.columns[axis.index()];
        Vector3D::new(x, y, z)
    }

    /// Returns the center of the box.
    #[inline]
    pub fn center(&self) -> FreePoint {
        let [x, y, z, _] = self.columns[3];
        Point3D::new(x, y, z)
    }

    /// Returns a copy of this box with the half-extent vector for `axis` replaced.
    /// The homogeneous component of that column is unchanged.
    #[inline]
    #[must_use]
    pub fn with_half_extent(mut self, axis: Axis, half_extent: FreeVector) -> Self {
        self.set_column_xyz(axis.index(), half_extent.to_array());
        self
    }

    /// Returns a copy of this box with its center replaced.
    /// The homogeneous component of that column is unchanged.
    #[inline]
    #[must_use]
    pub fn with_center(mut self, center: FreePoint) -> Self {
        self.set_column_xyz(3, center.to_array());
        self
    }

    /// All writes to the named view go through here.
    #[inline(always)]
    fn set_column_xyz(&mut self, column: usize, [x, y, z]: [FreeCoordinate; 3]) {
        let c = &mut self.columns[column];
        c[0] = x;
        c[1] = y;
        c[2] = z;
    }

    /// Returns whether this is a null box, that is, whether the homogeneous component of
    /// its center column is zero.
    ///
    /// ```
    /// use editbox::math::OrientedBox;
    ///
    /// assert!(OrientedBox::NULL.is_null());
    /// assert!(!OrientedBox::UNIT.is_null());
    /// ```
    #[inline]
    pub fn is_null(&self) -> bool {
        self.columns[3][3] == 0.0
    }

    /// Returns whether this box has no rotation or shear: every entry of the half-extent
    /// columns that is zero in the identity matrix is also zero here.
    /// The center column may hold any value.
    ///
    /// Negative half-extents (reflections) and zero half-extents are permitted.
    #[inline]
    pub fn is_axis_aligned(&self) -> bool {
        (0..3).all(|i| (0..4).all(|j| i == j || self.columns[i][j] == 0.0))
    }

    /// Transforms a point from the canonical cube frame to world space.
    ///
    /// The homogeneous components are ignored; no perspective division is performed.
    #[inline]
    pub fn transform_point(&self, point: UnitPoint) -> FreePoint {
        Point3D::from(affine_transform(&self.columns, point.to_array()))
    }

    /// Returns the eight corners of the box, in the order of [`UNIT_CUBE_VERTICES`].
    ///
    /// ```
    /// use editbox::math::{AlignedBox, FreePoint};
    ///
    /// let b = AlignedBox::from_center_half_extents([0.0, 0.0, 0.0], 1.0, 2.0, 3.0);
    /// assert_eq!(b.as_oriented().vertices()[0], FreePoint::new(-1.0, -2.0, 3.0));
    /// ```
    #[inline]
    pub fn vertices(&self) -> [FreePoint; 8] {
        UNIT_CUBE_VERTICES.map(|corner| self.transform_point(corner))
    }

    /// Returns the volume of the box.
    ///
    /// This is the absolute determinant of the linear part of the matrix, times 8 for the
    /// volume of the canonical cube. It is never negative.
    #[inline]
    #[allow(clippy::suboptimal_flops)]
    pub fn volume(&self) -> FreeCoordinate {
        let [a, b, c, _] = self.columns[0];
        let [d, e, f, _] = self.columns[1];
        let [g, h, i, _] = self.columns[2];
        8.0 * (a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h).abs()
    }

    /// Returns, for each local axis of the box, the world-space length of the unit vector
    /// along that axis after transformation: the distance from the center of the box to
    /// the center of the face on that axis.
    ///
    /// Because the canonical cube spans from −1 to +1, the edge length of the box along each
    /// axis is twice this value. Unlike the raw entries of [`OrientedBox::half_extent()`],
    /// this is correct for rotated and sheared boxes.
    ///
    /// ```
    /// use editbox::math::{OrientedBox, FreePoint, FreeVector};
    /// use editbox::euclid::size3;
    ///
    /// let b = OrientedBox::new(
    ///     FreeVector::new(3.0, 4.0, 0.0),
    ///     FreeVector::new(0.0, 0.0, 2.0),
    ///     FreeVector::new(-4.0, 3.0, 0.0),
    ///     FreePoint::origin(),
    /// );
    /// assert_eq!(b.size(), size3(5.0, 2.0, 5.0));
    /// ```
    #[inline]
    pub fn size(&self) -> Size3D<FreeCoordinate, World> {
        let transform = self.to_transform();
        let mut size = Size3D::zero();
        for axis in Axis::ALL {
            let mut basis = Vector3D::zero();
            basis[axis] = 1.0;
            size[axis] = transform.transform_vector3d(basis).length();
        }
        size
    }

    /// Returns the smallest [`AlignedBox`] containing this box.
    ///
    /// If this box is already axis-aligned (and not null), the result describes the same
    /// region, with any negative half-extents made positive.
    #[inline]
    pub fn enclosing_aab(&self) -> AlignedBox {
        AlignedBox::from_point_cloud(self.vertices())
    }

    /// Returns whether `other` lies entirely within this box, boundary included.
    ///
    /// Each corner of `other` is mapped into the canonical frame of `self`, where it must
    /// lie within `[-1, 1]` on every axis. This is valid for boxes of any orientation.
    /// If `self` is degenerate (its matrix cannot be inverted), it contains nothing.
    ///
    /// ```
    /// use editbox::math::{AlignedBox, OrientedBox, FreePoint, FreeVector};
    ///
    /// // A square rotated 45° about Z, with its corners 2 units from the center.
    /// let diamond = OrientedBox::new(
    ///     FreeVector::new(1.0, 1.0, 0.0),
    ///     FreeVector::new(-1.0, 1.0, 0.0),
    ///     FreeVector::new(0.0, 0.0, 1.0),
    ///     FreePoint::origin(),
    /// );
    /// let small = AlignedBox::from_center_half_extents([0.0, 0.0, 0.0], 0.5, 0.5, 0.5);
    /// let wide = AlignedBox::from_center_half_extents([0.0, 0.0, 0.0], 1.5, 1.0, 0.5);
    /// assert!(diamond.contains_box(small.as_oriented()));
    /// assert!(!diamond.contains_box(wide.as_oriented()));
    /// ```
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn contains_box(&self, other: &OrientedBox) -> bool {
        let Some(inverse) = self.to_transform().inverse() else {
            log::debug!("containment test against non-invertible box {self:?}");
            return false;
        };
        let inverse = inverse.to_arrays();
        other.vertices().into_iter().all(|vertex| {
            affine_transform(&inverse, vertex.to_array())
                .into_iter()
                .all(|c| (-1.0..=1.0).contains(&c))
        })
    }

    /// Returns a copy of this box with `dx`, `dy`, and `dz` added to the diagonal entries
    /// of its matrix, that is, to the X component of the first half-extent vector, the Y
    /// component of the second, and the Z component of the third.
    ///
    /// For an axis-aligned box with positive half-extents, this moves every face outward
    /// by the given distance on its axis, or inward if negative.
    #[inline]
    #[must_use]
    pub fn grow(mut self, dx: FreeCoordinate, dy: FreeCoordinate, dz: FreeCoordinate) -> Self {
        self.columns[0][0] += dx;
        self.columns[1][1] += dy;
        self.columns[2][2] += dz;
        self
    }

    /// Relabels the local axes of the box: the new X half-extent column is the old
    /// column `axes[0]`, and likewise for Y and Z. The region of space the box occupies
    /// does not change, though its handedness may.
    ///
    /// Panics if `axes` does not name each axis exactly once.
    ///
    /// ```
    /// use editbox::math::{AlignedBox, Axis::*};
    ///
    /// let b = AlignedBox::from_center_half_extents([0.0, 0.0, 0.0], 1.0, 2.0, 3.0);
    /// let swapped = b.as_oriented().swap_axes([Y, X, Z]);
    /// assert_eq!(swapped.half_extent(X), b.as_oriented().half_extent(Y));
    /// assert_eq!(swapped.volume(), b.as_oriented().volume());
    /// ```
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn swap_axes(self, axes: [Axis; 3]) -> Self {
        assert!(
            Axis::is_permutation(axes),
            "OrientedBox::swap_axes: {axes:?} is not a permutation of the axes"
        );
        let old = self.columns;
        let mut columns = old;
        for (new_index, old_axis) in axes.into_iter().enumerate() {
            columns[new_index] = old[old_axis.index()];
        }
        Self { columns }
    }
}

impl fmt::Debug for OrientedBox {
    #[mutants::skip]
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::NULL {
            return f.write_str("OrientedBox::NULL");
        }
        let [x, y, z, w] = self.columns;
        f.debug_struct("OrientedBox")
            .field("half_width", &x)
            .field("half_height", &y)
            .field("half_depth", &z)
            .field("center", &w)
            .finish()
    }
}

impl Default for OrientedBox {
    /// Returns [`OrientedBox::NULL`].
    #[inline]
    fn default() -> Self {
        Self::NULL
    }
}

/// Applies the affine part of a column-major 4×4 matrix to a point.
#[inline(always)]
#[allow(clippy::suboptimal_flops)]
fn affine_transform(
    columns: &[[FreeCoordinate; 4]; 4],
    [x, y, z]: [FreeCoordinate; 3],
) -> [FreeCoordinate; 3] {
    let [cx, cy, cz, cw] = columns;
    core::array::from_fn(|j| cx[j] * x + cy[j] * y + cz[j] * z + cw[j])
}
