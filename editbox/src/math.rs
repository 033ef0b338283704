//! Box types, the integer ranges they convert to, and their supporting coordinate types.

mod aligned_box;
pub use aligned_box::*;
mod axis;
pub use axis::*;
mod coord;
pub use coord::*;
mod face;
pub use face::*;
mod grid_aab;
pub use grid_aab::*;
mod oriented_box;
pub use oriented_box::*;

/// Sort exactly two items; swap them if `a > b`.
#[inline]
#[doc(hidden)]
pub fn sort_two<T: PartialOrd>(a: &mut T, b: &mut T) {
    if *a > *b {
        core::mem::swap(a, b);
    }
}
