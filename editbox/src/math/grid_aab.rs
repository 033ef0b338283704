//! Axis-aligned integer-coordinate ranges of voxel cells ([`GridAab`]).

use core::fmt;

use euclid::Size3D;

use crate::math::{Axis, GridPoint, GridSize};

/// An axis-aligned box with integer coordinates, as used to address ranges of voxel cells.
///
/// The box spans from `lower_bounds` to `upper_bounds` in continuous coordinates.
/// Seen as a set of cells, each identified by its most negative corner, the lower bound is
/// inclusive and the upper bound is exclusive; for example, lower bound 5 and upper bound 10
/// on an axis covers cells 5 through 9.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct GridAab {
    lower_bounds: GridPoint,
    /// Constructor checks ensure this is not smaller than `lower_bounds`.
    upper_bounds: GridPoint,
}

impl GridAab {
    /// Constructs a [`GridAab`] from lower and upper bounds.
    ///
    /// Panics if any of the `upper_bounds` are less than the `lower_bounds`.
    /// Use [`GridAab::checked_from_lower_upper`] to avoid panics.
    #[track_caller]
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_lower_upper(
        lower_bounds: impl Into<GridPoint>,
        upper_bounds: impl Into<GridPoint>,
    ) -> Self {
        match Self::checked_from_lower_upper(lower_bounds, upper_bounds) {
            Ok(aab) => aab,
            Err(error) => panic!("GridAab::from_lower_upper: {error}"),
        }
    }

    /// Constructs a [`GridAab`] from lower and upper bounds.
    ///
    /// Returns [`Err`] if any of the `upper_bounds` are less than the `lower_bounds`.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn checked_from_lower_upper(
        lower_bounds: impl Into<GridPoint>,
        upper_bounds: impl Into<GridPoint>,
    ) -> Result<Self, GridRangeError> {
        let lower_bounds = lower_bounds.into();
        let upper_bounds = upper_bounds.into();
        if Axis::ALL
            .into_iter()
            .any(|axis| upper_bounds[axis] < lower_bounds[axis])
        {
            return Err(GridRangeError {
                lower_bounds,
                upper_bounds,
            });
        }
        Ok(GridAab {
            lower_bounds,
            upper_bounds,
        })
    }

    /// The most negative corner of the range.
    #[inline]
    pub const fn lower_bounds(&self) -> GridPoint {
        self.lower_bounds
    }

    /// The most positive corner of the range.
    #[inline]
    pub const fn upper_bounds(&self) -> GridPoint {
        self.upper_bounds
    }

    /// Size of the range in each axis; equivalent to `upper_bounds() - lower_bounds()`,
    /// except that the result cannot overflow.
    #[inline]
    pub fn size(&self) -> GridSize {
        let l = self.lower_bounds;
        let u = self.upper_bounds;
        Size3D::new(u.x.abs_diff(l.x), u.y.abs_diff(l.y), u.z.abs_diff(l.z))
    }

    /// Number of cells in the range, or [`None`] if that number does not fit in `usize`.
    ///
    /// ```
    /// use editbox::math::GridAab;
    ///
    /// let range = GridAab::from_lower_upper([-1, 0, 0], [1, 3, 5]);
    /// assert_eq!(range.volume(), Some(30));
    /// ```
    #[inline]
    pub fn volume(&self) -> Option<usize> {
        let size = self.size();
        let mut volume: usize = 1;
        for axis in Axis::ALL {
            volume = volume.checked_mul(usize::try_from(size[axis]).ok()?)?;
        }
        Some(volume)
    }

    /// Returns whether the range includes the cell whose most negative corner is `cube`.
    ///
    /// ```
    /// use editbox::math::{GridAab, GridPoint};
    ///
    /// let range = GridAab::from_lower_upper([0, 0, 0], [2, 2, 2]);
    /// assert!(range.contains_cube(GridPoint::new(1, 1, 1)));
    /// assert!(!range.contains_cube(GridPoint::new(2, 1, 1)));
    /// ```
    #[inline]
    pub fn contains_cube(&self, cube: GridPoint) -> bool {
        Axis::ALL.into_iter().all(|axis| {
            self.lower_bounds[axis] <= cube[axis] && cube[axis] < self.upper_bounds[axis]
        })
    }
}

impl fmt::Debug for GridAab {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let GridAab {
            lower_bounds: l,
            upper_bounds: u,
        } = *self;
        f.debug_tuple("GridAab")
            .field(&(l.x..u.x))
            .field(&(l.y..u.y))
            .field(&(l.z..u.z))
            .finish()
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for GridAab {
    #[allow(clippy::missing_inline_in_public_items)]
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut lower: [i32; 3] = u.arbitrary()?;
        let mut upper: [i32; 3] = u.arbitrary()?;
        for axis in Axis::ALL {
            crate::math::sort_two(&mut lower[axis], &mut upper[axis]);
        }
        Ok(GridAab::from_lower_upper(lower, upper))
    }

    #[allow(clippy::missing_inline_in_public_items)]
    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[i32; 6] as arbitrary::Arbitrary<'a>>::size_hint(depth)
    }
}

/// Error when a [`GridAab`] cannot be constructed because its bounds are inverted.
#[derive(Clone, Copy, Debug, displaydoc::Display, Eq, PartialEq)]
#[displaydoc("grid range lower bounds {lower_bounds:?} were greater than upper bounds {upper_bounds:?}")]
pub struct GridRangeError {
    lower_bounds: GridPoint,
    upper_bounds: GridPoint,
}

impl core::error::Error for GridRangeError {}
