//! Box geometry for interactive voxel editing.
//!
//! Every box in this library is an affine image of the canonical cube `[-1, 1]³`, stored as
//! the 4×4 matrix performing that mapping. Two types share this representation:
//!
//! * [`OrientedBox`](math::OrientedBox) may be rotated, sheared, or degenerate.
//! * [`AlignedBox`](math::AlignedBox) is guaranteed to have no rotation or shear, and
//!   therefore supports the cheap per-axis operations: intersection, union, point and box
//!   containment, conversion to and from integer [`GridAab`](math::GridAab) ranges, and
//!   dragging one face to a new position.
//!
//! All operations are pure functions of `Copy` values.

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(any(test, feature = "arbitrary")),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]
#![warn(clippy::missing_inline_in_public_items)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;

pub mod math;

// reexport for convenience of our tests and dependents
#[doc(hidden)]
pub use euclid;
