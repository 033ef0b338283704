//! [`AlignedBox`], boxes without rotation or shear.
//! This module is private but reexported by its parent.

use core::fmt;

use euclid::Vector3D;

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::FloatCore as _;

use crate::math::{
    Axis, Face6, FreeCoordinate, FreePoint, FreeVector, GridAab, GridCoordinate, GridRangeError,
    OrientedBox,
};

/// An [`OrientedBox`] known to have no rotation or shear: its matrix is zero everywhere except
/// the diagonal and the translation column.
///
/// This guarantee makes per-axis operations valid: intersection, union, containment of
/// points and boxes, conversion to and from [`GridAab`], and [`AlignedBox::move_face()`].
/// Use [`AlignedBox::as_oriented()`] for the operations that apply to all boxes, such as
/// [`OrientedBox::volume()`].
///
/// An [`AlignedBox`] is never null. Its half-extents are normally non-negative, but
/// [`AlignedBox::from_center_half_extents()`] and [`AlignedBox::grow()`] do not check this.
#[derive(Clone, Copy, PartialEq)]
pub struct AlignedBox(OrientedBox);

impl AlignedBox {
    /// Constructs a box from its center and its half-extents along X, Y, and Z.
    ///
    /// ```
    /// use editbox::math::{AlignedBox, FreePoint};
    ///
    /// let b = AlignedBox::from_center_half_extents([1.0, 0.0, 0.0], 1.0, 2.0, 3.0);
    /// assert_eq!(b.lower_bounds(), FreePoint::new(0.0, -2.0, -3.0));
    /// assert_eq!(b.upper_bounds(), FreePoint::new(2.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub fn from_center_half_extents(
        center: impl Into<FreePoint>,
        half_width: FreeCoordinate,
        half_height: FreeCoordinate,
        half_depth: FreeCoordinate,
    ) -> Self {
        Self(OrientedBox::new(
            Vector3D::new(half_width, 0., 0.),
            Vector3D::new(0., half_height, 0.),
            Vector3D::new(0., 0., half_depth),
            center.into(),
        ))
    }

    /// Box spanning exactly the given corners, which must already be ordered.
    #[inline]
    fn fit(lower: FreePoint, upper: FreePoint) -> Self {
        let center = lower.lerp(upper, 0.5);
        let half = (upper - lower) / 2.0;
        Self::from_center_half_extents(center, half.x, half.y, half.z)
    }

    /// Constructs the smallest box containing both points.
    ///
    /// ```
    /// use editbox::math::{AlignedBox, FreePoint};
    ///
    /// let b = AlignedBox::from_points([3.0, 0.0, 1.0], [1.0, 2.0, 1.0]);
    /// assert_eq!(b.center(), FreePoint::new(2.0, 1.0, 1.0));
    /// assert_eq!(b.as_oriented().volume(), 0.0);
    /// ```
    #[inline]
    pub fn from_points(a: impl Into<FreePoint>, b: impl Into<FreePoint>) -> Self {
        let a = a.into();
        let b = b.into();
        Self::fit(a.min(b), a.max(b))
    }

    /// Constructs the smallest box containing all of the given points.
    ///
    /// Panics if there are no points. Use [`AlignedBox::checked_from_point_cloud()`] to avoid
    /// panics.
    #[track_caller]
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_point_cloud(points: impl IntoIterator<Item = FreePoint>) -> Self {
        match Self::checked_from_point_cloud(points) {
            Some(b) => b,
            None => panic!("AlignedBox::from_point_cloud: no points were given"),
        }
    }

    /// Constructs the smallest box containing all of the given points,
    /// or returns [`None`] if there are no points.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn checked_from_point_cloud(points: impl IntoIterator<Item = FreePoint>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (lower, upper) = points.fold((first, first), |(lower, upper), point| {
            (lower.min(point), upper.max(point))
        });
        Some(Self::fit(lower, upper))
    }

    /// Constructs the box occupying exactly the cells of `grid`.
    ///
    /// ```
    /// use editbox::math::{AlignedBox, FreePoint, GridAab};
    ///
    /// let b = AlignedBox::from_grid(GridAab::from_lower_upper([0, 0, 0], [3, 2, 2]));
    /// assert_eq!(b.center(), FreePoint::new(1.5, 1.0, 1.0));
    /// assert_eq!(b.as_oriented().volume(), 12.0);
    /// ```
    #[inline]
    pub fn from_grid(grid: GridAab) -> Self {
        let lower = grid.lower_bounds().map(FreeCoordinate::from);
        let upper = grid.upper_bounds().map(FreeCoordinate::from);
        let center = ((lower.to_vector() + upper.to_vector()) / 2.0).to_point();
        let half = (upper - lower) / 2.0;
        Self::from_center_half_extents(center, half.x, half.y, half.z)
    }

    /// Converts the box to a range of grid cells by rounding each bound to the nearest
    /// integer (halves round away from zero). Inverse of [`AlignedBox::from_grid()`].
    ///
    /// Bounds beyond the range of [`GridCoordinate`] are clamped.
    /// Returns [`Err`] if the box has a negative half-extent large enough that its rounded
    /// lower bound exceeds its rounded upper bound.
    ///
    /// ```
    /// use editbox::math::{AlignedBox, GridAab};
    ///
    /// let b = AlignedBox::from_center_half_extents([0.25, 0.0, 10.0], 1.0, 0.5, 0.5);
    /// assert_eq!(
    ///     b.round_to_grid(),
    ///     Ok(GridAab::from_lower_upper([-1, -1, 10], [1, 1, 11])),
    /// );
    /// ```
    #[inline]
    pub fn round_to_grid(&self) -> Result<GridAab, GridRangeError> {
        let round = |c: FreeCoordinate| c.round() as GridCoordinate;
        GridAab::checked_from_lower_upper(
            self.lower_bounds().map(round),
            self.upper_bounds().map(round),
        )
    }

    /// Returns this box as an [`OrientedBox`].
    #[inline]
    pub const fn as_oriented(&self) -> &OrientedBox {
        &self.0
    }

    /// Returns the center of the box.
    #[inline]
    pub fn center(&self) -> FreePoint {
        self.0.center()
    }

    /// Returns the half-extents of the box along X, Y, and Z.
    #[inline]
    pub fn half_extents(&self) -> FreeVector {
        let mut half_extents = Vector3D::zero();
        for axis in Axis::ALL {
            half_extents[axis] = self.0.half_extent(axis)[axis];
        }
        half_extents
    }

    /// The most negative corner of the box (if its half-extents are not negative).
    #[inline]
    pub fn lower_bounds(&self) -> FreePoint {
        self.center() - self.half_extents()
    }

    /// The most positive corner of the box (if its half-extents are not negative).
    #[inline]
    pub fn upper_bounds(&self) -> FreePoint {
        self.center() + self.half_extents()
    }

    /// Returns the region both boxes occupy, or [`None`] if they do not overlap.
    ///
    /// Boxes which only touch count as overlapping on the Y and Z axes, producing a box of
    /// zero thickness, but not on the X axis. Boxes with NaN bounds intersect nothing.
    ///
    /// ```
    /// use editbox::math::{AlignedBox, FreePoint};
    ///
    /// let a = AlignedBox::from_center_half_extents([0.0, 0.0, 0.0], 1.0, 1.0, 1.0);
    /// let b = AlignedBox::from_center_half_extents([1.0, 0.0, 0.0], 1.0, 1.0, 1.0);
    /// let c = AlignedBox::from_center_half_extents([3.0, 0.0, 0.0], 1.0, 1.0, 1.0);
    ///
    /// let ab = a.intersection(b).unwrap();
    /// assert_eq!(ab.center(), FreePoint::new(0.5, 0.0, 0.0));
    /// assert_eq!(a.intersection(c), None);
    /// ```
    #[inline]
    pub fn intersection(self, other: Self) -> Option<Self> {
        let (al, au) = (self.lower_bounds(), self.upper_bounds());
        let (bl, bu) = (other.lower_bounds(), other.upper_bounds());
        // Every lower bound must be below every upper bound. Comparisons are written
        // positively so that NaN bounds fail them.
        let nonempty = Axis::ALL.into_iter().all(|axis| {
            [(al, au), (al, bu), (bl, au), (bl, bu)]
                .into_iter()
                .all(|(l, u)| match axis {
                    Axis::X => l[axis] < u[axis],
                    Axis::Y | Axis::Z => l[axis] <= u[axis],
                })
        });
        if !nonempty {
            return None;
        }
        Some(Self::fit(al.max(bl), au.min(bu)))
    }

    /// Returns whether the boxes overlap or touch on every axis.
    ///
    /// This is cheaper than [`AlignedBox::intersection()`], and differs from it for boxes
    /// that touch on the X axis only at their boundaries: those intersect but have no
    /// intersection.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        let (al, au) = (self.lower_bounds(), self.upper_bounds());
        let (bl, bu) = (other.lower_bounds(), other.upper_bounds());
        Axis::ALL
            .into_iter()
            .all(|axis| al[axis] <= bu[axis] && bl[axis] <= au[axis])
    }

    /// Returns whether `other` lies entirely within this box, boundaries included.
    ///
    /// For boxes of any orientation, use [`OrientedBox::contains_box()`].
    #[inline]
    pub fn contains_box(self, other: Self) -> bool {
        let (al, au) = (self.lower_bounds(), self.upper_bounds());
        let (bl, bu) = (other.lower_bounds(), other.upper_bounds());
        Axis::ALL
            .into_iter()
            .all(|axis| al[axis] <= bl[axis] && bu[axis] <= au[axis])
    }

    /// Returns whether the point lies within the box, where each axis's lower bound is
    /// inclusive and its upper bound is exclusive.
    ///
    /// Boxes that share a face therefore never both contain a point on that face, so that,
    /// in particular, the boxes of adjacent grid cells divide space between them.
    ///
    /// ```
    /// use editbox::math::AlignedBox;
    ///
    /// let b = AlignedBox::from_points([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
    /// assert!(b.contains_point([0.0, 0.5, 0.5].into()));
    /// assert!(!b.contains_point([1.0, 0.5, 0.5].into()));
    /// ```
    #[inline]
    pub fn contains_point(self, point: FreePoint) -> bool {
        let (lower, upper) = (self.lower_bounds(), self.upper_bounds());
        Axis::ALL
            .into_iter()
            .all(|axis| lower[axis] <= point[axis] && point[axis] < upper[axis])
    }

    /// Returns the smallest box containing both boxes.
    #[inline]
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::fit(
            self.lower_bounds().min(other.lower_bounds()),
            self.upper_bounds().max(other.upper_bounds()),
        )
    }

    /// Moves each face outward by the distance given for its axis, or inward if negative.
    ///
    /// See [`OrientedBox::grow()`].
    #[inline]
    #[must_use]
    pub fn grow(self, dx: FreeCoordinate, dy: FreeCoordinate, dz: FreeCoordinate) -> Self {
        Self(self.0.grow(dx, dy, dz))
    }

    /// Drags one face of the box so that it reaches `target`, keeping the opposite face
    /// in place.
    ///
    /// The result is the smallest box containing the four corners of the face opposite
    /// `face`, and `target`. If `target` is beyond the opposite face, the box turns inside
    /// out and `face` ends up on the other side; if `target` lies off to the side, the box
    /// widens to include it.
    ///
    /// ```
    /// use editbox::math::{AlignedBox, Face6, FreePoint, FreeVector};
    ///
    /// let unit = AlignedBox::from_center_half_extents([0.0, 0.0, 0.0], 1.0, 1.0, 1.0);
    /// let dragged = unit.move_face(Face6::PX, [5.0, 0.0, 0.0]);
    /// assert_eq!(dragged.center(), FreePoint::new(2.0, 0.0, 0.0));
    /// assert_eq!(dragged.half_extents(), FreeVector::new(3.0, 1.0, 1.0));
    /// ```
    #[allow(clippy::missing_inline_in_public_items)]
    #[must_use]
    pub fn move_face(self, face: Face6, target: impl Into<FreePoint>) -> Self {
        let target = target.into();
        let anchors = face
            .opposite()
            .unit_corners()
            .map(|corner| self.0.transform_point(corner));
        let moved = Self::from_point_cloud(anchors.into_iter().chain([target]));
        if moved.0.volume() == 0.0 {
            log::trace!("moving {face:?} of {self:?} to {target:?} flattened the box");
        }
        moved
    }
}

impl From<AlignedBox> for OrientedBox {
    #[inline]
    fn from(value: AlignedBox) -> Self {
        value.0
    }
}

impl TryFrom<OrientedBox> for AlignedBox {
    type Error = AlignedBoxError;

    /// Succeeds if the box is axis-aligned and not null.
    #[inline]
    fn try_from(value: OrientedBox) -> Result<Self, Self::Error> {
        if value.is_null() {
            Err(AlignedBoxError::Null)
        } else if !value.is_axis_aligned() {
            Err(AlignedBoxError::NotAxisAligned)
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Debug for AlignedBox {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = self.lower_bounds();
        let u = self.upper_bounds();
        f.debug_tuple("AlignedBox")
            .field(&(l.x..=u.x))
            .field(&(l.y..=u.y))
            .field(&(l.z..=u.z))
            .finish()
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for AlignedBox {
    #[allow(clippy::missing_inline_in_public_items)]
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let center: [FreeCoordinate; 3] = u.arbitrary()?;
        let [hw, hh, hd]: [FreeCoordinate; 3] = u.arbitrary()?;
        Ok(Self::from_center_half_extents(center, hw.abs(), hh.abs(), hd.abs()))
    }

    #[allow(clippy::missing_inline_in_public_items)]
    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[FreeCoordinate; 6] as arbitrary::Arbitrary<'a>>::size_hint(depth)
    }
}

/// Error when an [`OrientedBox`] cannot be converted to an [`AlignedBox`].
#[derive(Clone, Copy, Debug, displaydoc::Display, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum AlignedBoxError {
    /// The box has rotation or shear.
    #[displaydoc("box is not axis-aligned")]
    NotAxisAligned,
    /// The box is the null box.
    #[displaydoc("box is null")]
    Null,
}

impl core::error::Error for AlignedBoxError {}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::{point3, vec3};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng as _;
    use rstest::rstest;
    use std::string::ToString as _;

    fn cube(center: [FreeCoordinate; 3], half: FreeCoordinate) -> AlignedBox {
        AlignedBox::from_center_half_extents(center, half, half, half)
    }

    /// Boxes with small integer centers and half-extents, so all arithmetic is exact.
    fn random_box(rng: &mut impl rand::Rng) -> AlignedBox {
        let mut c = |range: core::ops::RangeInclusive<i32>| {
            FreeCoordinate::from(rng.random_range(range))
        };
        let center = [c(-8..=8), c(-8..=8), c(-8..=8)];
        AlignedBox::from_center_half_extents(center, c(0..=4), c(0..=4), c(0..=4))
    }

    fn rng() -> rand_xoshiro::Xoshiro256Plus {
        rand_xoshiro::Xoshiro256Plus::seed_from_u64(0x5eed)
    }

    #[test]
    fn from_center_half_extents_matrix() {
        let b = AlignedBox::from_center_half_extents([1., 2., 3.], 4., 5., 6.);
        assert_eq!(
            b.as_oriented().to_arrays(),
            [
                [4., 0., 0., 0.],
                [0., 5., 0., 0.],
                [0., 0., 6., 0.],
                [1., 2., 3., 1.],
            ]
        );
        assert!(b.as_oriented().is_axis_aligned());
    }

    #[test]
    fn from_points_orders_corners() {
        let b = AlignedBox::from_points([2., -1., 0.], [0., 1., 4.]);
        assert_eq!(b.lower_bounds(), point3(0., -1., 0.));
        assert_eq!(b.upper_bounds(), point3(2., 1., 4.));
    }

    #[test]
    fn from_point_cloud_single_point() {
        let b = AlignedBox::from_point_cloud([point3(1., 2., 3.)]);
        assert_eq!(b.center(), point3(1., 2., 3.));
        assert_eq!(b.half_extents(), vec3(0., 0., 0.));
    }

    #[test]
    fn from_point_cloud_many() {
        let b = AlignedBox::from_point_cloud([
            point3(0., 0., 0.),
            point3(-2., 1., 0.),
            point3(1., 5., -1.),
            point3(0., 0., 3.),
        ]);
        assert_eq!(b.lower_bounds(), point3(-2., 0., -1.));
        assert_eq!(b.upper_bounds(), point3(1., 5., 3.));
    }

    #[test]
    #[should_panic = "AlignedBox::from_point_cloud: no points were given"]
    fn from_point_cloud_empty() {
        let _ = AlignedBox::from_point_cloud([]);
    }

    #[test]
    fn checked_from_point_cloud_empty() {
        assert_eq!(AlignedBox::checked_from_point_cloud([]), None);
    }

    #[rstest]
    #[case([0, 0, 0], [1, 1, 1])]
    #[case([-5, 3, 7], [5, 3, 8])]
    #[case([-3, -3, -3], [-2, 0, 4])]
    #[case([GridCoordinate::MIN, 0, 0], [GridCoordinate::MAX, 1, 1])]
    fn grid_round_trip(#[case] lower: [GridCoordinate; 3], #[case] upper: [GridCoordinate; 3]) {
        let grid = GridAab::from_lower_upper(lower, upper);
        assert_eq!(AlignedBox::from_grid(grid).round_to_grid(), Ok(grid));
    }

    #[test]
    fn grid_round_trip_exhaustive_small() {
        for (l, size) in itertools::iproduct!(-3..3, 0..4) {
            let grid = GridAab::from_lower_upper([l, -l, 0], [l + size, -l + size, size]);
            assert_eq!(AlignedBox::from_grid(grid).round_to_grid(), Ok(grid));
        }
    }

    #[test]
    fn from_grid_odd_size() {
        // Odd sizes put the center on a half-integer.
        let b = AlignedBox::from_grid(GridAab::from_lower_upper([0, 0, 0], [1, 3, 5]));
        assert_eq!(b.center(), point3(0.5, 1.5, 2.5));
        assert_eq!(b.half_extents(), vec3(0.5, 1.5, 2.5));
    }

    #[test]
    fn round_to_grid_rounds_half_away_from_zero() {
        let b = AlignedBox::from_center_half_extents([0., 0., 0.], 0.5, 1.5, 2.5);
        assert_eq!(
            b.round_to_grid(),
            Ok(GridAab::from_lower_upper([-1, -2, -3], [1, 2, 3]))
        );
    }

    #[test]
    fn round_to_grid_inverted() {
        let b = AlignedBox::from_center_half_extents([0., 0., 0.], 1., 1., 1.).grow(-3., 0., 0.);
        let error = b.round_to_grid().unwrap_err();
        assert_eq!(
            error.to_string(),
            "grid range lower bounds (2, -1, -1) were greater than upper bounds (-2, 1, 1)"
        );
    }

    #[test]
    fn intersection_overlapping() {
        let i = cube([0., 0., 0.], 1.).intersection(cube([1., 0., 0.], 1.));
        assert_eq!(
            i,
            Some(AlignedBox::from_center_half_extents([0.5, 0., 0.], 0.5, 1., 1.))
        );
    }

    #[test]
    fn intersection_disjoint() {
        assert_eq!(cube([0., 0., 0.], 1.).intersection(cube([3., 0., 0.], 1.)), None);
        assert_eq!(cube([0., 0., 0.], 1.).intersection(cube([0., 0., -3.], 1.)), None);
    }

    /// Touching boxes have an intersection on the Y and Z axes but not on X.
    #[rstest]
    #[case::x([2., 0., 0.], None)]
    #[case::y([0., 2., 0.], Some(AlignedBox::from_center_half_extents([0., 1., 0.], 1., 0., 1.)))]
    #[case::z([0., 0., 2.], Some(AlignedBox::from_center_half_extents([0., 0., 1.], 1., 1., 0.)))]
    fn intersection_touching(
        #[case] other_center: [FreeCoordinate; 3],
        #[case] expected: Option<AlignedBox>,
    ) {
        let a = cube([0., 0., 0.], 1.);
        let b = cube(other_center, 1.);
        assert!(a.intersects(b));
        assert_eq!(a.intersection(b), expected);
    }

    #[rstest]
    #[case::center([FreeCoordinate::NAN, 0., 0.], 1.)]
    #[case::half_extent([0., 0., 0.], FreeCoordinate::NAN)]
    fn intersection_nan_is_none(
        #[case] center: [FreeCoordinate; 3],
        #[case] half_height: FreeCoordinate,
    ) {
        let a = AlignedBox::from_center_half_extents(center, 1., half_height, 1.);
        let b = cube([0., 0., 0.], 1.);
        assert!(!a.intersects(b));
        assert_eq!(a.intersection(b), None);
        assert_eq!(b.intersection(a), None);
    }

    #[test]
    fn intersects_agrees_with_intersection() {
        let mut rng = rng();
        for _ in 0..1000 {
            let a = random_box(&mut rng);
            let b = random_box(&mut rng);
            let touching_on_x = a.lower_bounds().x.max(b.lower_bounds().x)
                == a.upper_bounds().x.min(b.upper_bounds().x);
            if touching_on_x {
                assert!(a.intersection(b).is_none(), "{a:?} {b:?}");
            } else {
                assert_eq!(a.intersects(b), a.intersection(b).is_some(), "{a:?} {b:?}");
            }
        }
    }

    #[test]
    fn intersection_is_contained_in_both() {
        let mut rng = rng();
        for _ in 0..1000 {
            let a = random_box(&mut rng);
            let b = random_box(&mut rng);
            if let Some(i) = a.intersection(b) {
                assert!(a.contains_box(i), "{a:?} {b:?} {i:?}");
                assert!(b.contains_box(i), "{a:?} {b:?} {i:?}");
            }
        }
    }

    #[test]
    fn union_contains_both() {
        let mut rng = rng();
        for _ in 0..1000 {
            let a = random_box(&mut rng);
            let b = random_box(&mut rng);
            let u = a.union(b);
            assert!(u.contains_box(a), "{a:?} {b:?} {u:?}");
            assert!(u.contains_box(b), "{a:?} {b:?} {u:?}");
            assert_eq!(u, b.union(a));
        }
    }

    #[test]
    fn union_example() {
        let u = cube([0., 0., 0.], 1.).union(cube([4., 1., 0.], 0.5));
        assert_eq!(u.lower_bounds(), point3(-1., -1., -1.));
        assert_eq!(u.upper_bounds(), point3(4.5, 1.5, 1.));
    }

    #[test]
    fn contains_box_inclusive() {
        let outer = cube([0., 0., 0.], 2.);
        assert!(outer.contains_box(outer));
        assert!(outer.contains_box(cube([1., 1., 1.], 1.)));
        assert!(!outer.contains_box(cube([1.5, 0., 0.], 1.)));
        assert!(!cube([1., 1., 1.], 1.).contains_box(outer));
    }

    #[test]
    fn aligned_and_oriented_containment_agree() {
        // Power-of-two half-extents keep the inverse matrix exact.
        fn pow2_box(rng: &mut impl rand::Rng) -> AlignedBox {
            let mut c = || FreeCoordinate::from(rng.random_range(-8i32..=8));
            let center = [c(), c(), c()];
            let mut h = || [1.0, 2.0, 4.0][rng.random_range(0..3usize)];
            AlignedBox::from_center_half_extents(center, h(), h(), h())
        }
        let mut rng = rng();
        for _ in 0..1000 {
            let a = pow2_box(&mut rng);
            let b = pow2_box(&mut rng);
            assert_eq!(
                a.contains_box(b),
                a.as_oriented().contains_box(b.as_oriented()),
                "{a:?} {b:?}"
            );
        }
    }

    #[test]
    fn contains_point_partitions_grid_cells() {
        let cells = [
            AlignedBox::from_grid(GridAab::from_lower_upper([0, 0, 0], [1, 1, 1])),
            AlignedBox::from_grid(GridAab::from_lower_upper([1, 0, 0], [2, 1, 1])),
        ];
        for x in [0.0, 0.5, 1.0, 1.5] {
            let point = point3(x, 0.5, 0.5);
            let count = cells.iter().filter(|cell| cell.contains_point(point)).count();
            assert_eq!(count, 1, "{point:?}");
        }
        assert!(!cells[1].contains_point(point3(2.0, 0.5, 0.5)));
        assert!(!cells[0].contains_point(point3(0.5, 1.0, 0.5)));
        assert!(!cells[0].contains_point(point3(0.5, 0.5, 1.0)));
    }

    #[test]
    fn enclosing_aab_of_aligned_is_identity() {
        let b = AlignedBox::from_center_half_extents([1.5, -2., 3.], 0.5, 2., 4.);
        assert_eq!(b.as_oriented().enclosing_aab(), b);
        let mut rng = rng();
        for _ in 0..100 {
            let b = random_box(&mut rng);
            assert_eq!(b.as_oriented().enclosing_aab(), b);
        }
    }

    #[test]
    fn vertices_are_contained() {
        let mut rng = rng();
        for _ in 0..100 {
            let b = random_box(&mut rng);
            for vertex in b.as_oriented().vertices() {
                let point = AlignedBox::from_points(vertex, vertex);
                assert!(b.contains_box(point), "{b:?} {vertex:?}");
            }
        }
    }

    #[test]
    fn move_face_positive_x() {
        let moved = cube([0., 0., 0.], 1.).move_face(Face6::PX, [5., 0., 0.]);
        assert_eq!(moved.center(), point3(2., 0., 0.));
        assert_eq!(moved.half_extents(), vec3(3., 1., 1.));
    }

    #[rstest]
    fn move_face_keeps_opposite_face(
        #[values(Face6::NY, Face6::PY, Face6::NZ, Face6::PZ, Face6::PX, Face6::NX)] face: Face6,
    ) {
        let original = AlignedBox::from_center_half_extents([10., 20., 30.], 1., 2., 3.);
        let axis = face.axis();
        let sign = if face.is_positive() { 1.0 } else { -1.0 };
        let mut target = original.center();
        target[axis] += sign * 10.0;

        let moved = original.move_face(face, target);

        let (kept_before, kept_after) = if face.is_positive() {
            (original.lower_bounds()[axis], moved.lower_bounds()[axis])
        } else {
            (original.upper_bounds()[axis], moved.upper_bounds()[axis])
        };
        assert_eq!(kept_after, kept_before);
        assert_eq!(
            moved.half_extents()[axis],
            (10.0 + original.half_extents()[axis]) / 2.0
        );
        for other_axis in Axis::ALL.into_iter().filter(|&a| a != axis) {
            assert_eq!(moved.lower_bounds()[other_axis], original.lower_bounds()[other_axis]);
            assert_eq!(moved.upper_bounds()[other_axis], original.upper_bounds()[other_axis]);
        }
    }

    #[test]
    fn move_face_past_opposite_face() {
        let moved = cube([0., 0., 0.], 1.).move_face(Face6::PY, [0., -3., 0.]);
        assert_eq!(moved.lower_bounds(), point3(-1., -3., -1.));
        assert_eq!(moved.upper_bounds(), point3(1., -1., 1.));
    }

    #[test]
    fn move_face_onto_opposite_face_flattens() {
        let moved = cube([0., 0., 0.], 1.).move_face(Face6::NZ, [0., 0., 1.]);
        assert_eq!(moved.as_oriented().volume(), 0.0);
        assert_eq!(moved.center(), point3(0., 0., 1.));
    }

    #[test]
    fn grow_moves_faces() {
        let grown = cube([0., 0., 0.], 1.).grow(1., 0., -0.5);
        assert_eq!(grown.lower_bounds(), point3(-2., -1., -0.5));
        assert_eq!(grown.upper_bounds(), point3(2., 1., 0.5));
    }

    #[test]
    fn try_from_oriented() {
        let b = cube([1., 2., 3.], 1.);
        assert_eq!(AlignedBox::try_from(OrientedBox::from(b)), Ok(b));
        assert_eq!(
            AlignedBox::try_from(OrientedBox::NULL),
            Err(AlignedBoxError::Null)
        );
        let rotated = b.as_oriented().swap_axes([Axis::Y, Axis::X, Axis::Z]);
        assert_eq!(
            AlignedBox::try_from(rotated),
            Err(AlignedBoxError::NotAxisAligned)
        );
        assert_eq!(
            AlignedBoxError::NotAxisAligned.to_string(),
            "box is not axis-aligned"
        );
    }

    #[test]
    fn debug() {
        let b = AlignedBox::from_points([1., 2., 3.], [2., 4., 6.]);
        assert_eq!(
            format!("{b:?}"),
            "AlignedBox(1.0..=2.0, 2.0..=4.0, 3.0..=6.0)"
        );
    }
}
