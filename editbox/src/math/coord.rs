//! Numeric types used for coordinates and related quantities.

use euclid::{Point3D, Size3D, Vector3D};

/// Unit of measure for world space, in which boxes and grid cells are placed.
#[allow(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum World {}

/// Unit of measure for the canonical frame of a box, in which every box is the cube
/// spanning −1 to +1 on each axis.
#[allow(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum UnitCube {}

/// Coordinates that are locked to the voxel grid.
pub type GridCoordinate = i32;

/// Numeric type in a [`GridSize`].
pub type GridSizeCoord = u32;

/// Positions that are locked to the voxel grid.
pub type GridPoint = Point3D<GridCoordinate, World>;

/// Sizes of grid-aligned ranges.
pub type GridSize = Size3D<GridSizeCoord, World>;

/// Coordinates that are not locked to the voxel grid.
///
/// Because `GridCoordinate = i32` and `FreeCoordinate = f64`, which has more than 32 bits of
/// mantissa, every grid coordinate converts exactly (`From<GridCoordinate>`).
pub type FreeCoordinate = f64;

/// Positions in world space.
pub type FreePoint = Point3D<FreeCoordinate, World>;

/// Displacements in world space, including the half-extent axes of boxes.
pub type FreeVector = Vector3D<FreeCoordinate, World>;

/// Positions in the canonical frame of a box.
pub type UnitPoint = Point3D<FreeCoordinate, UnitCube>;
