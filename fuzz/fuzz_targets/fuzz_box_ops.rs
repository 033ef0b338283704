#![no_main]
use libfuzzer_sys::fuzz_target;
extern crate editbox;

use editbox::math::{AlignedBox, Axis, Face6, OrientedBox};

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    a: AlignedBox,
    b: AlignedBox,
    oriented: OrientedBox,
    face: Face6,
    target: [f64; 3],
    axes: [Axis; 3],
}

fuzz_target!(|input: Input| {
    let Input {
        a,
        b,
        oriented,
        face,
        target,
        axes,
    } = input;

    if let Some(i) = a.intersection(b) {
        assert!(a.intersects(b), "{a:?} {b:?} {i:?}");
    }
    let _ = a.union(b);
    let _ = a.contains_box(b);
    let _ = a.round_to_grid();
    let _ = a.move_face(face, target);

    let _ = oriented.volume();
    let _ = oriented.size();
    let _ = oriented.enclosing_aab();
    let _ = oriented.contains_box(a.as_oriented());
    if Axis::is_permutation(axes) {
        let _ = oriented.swap_axes(axes);
    }
    if let Ok(aligned) = AlignedBox::try_from(oriented) {
        assert!(aligned.as_oriented().is_axis_aligned());
        assert!(!aligned.as_oriented().is_null());
    }
});
