//! Minimal end-to-end example: give a speed a heading and integrate it over time.

use spacetime::{DVec2, Difference2, Direction2, Duration, Speed, Unit, Velocity2};

fn main() {
    let heading = Direction2::of(DVec2::new(3.0, 4.0));
    let v: Velocity2 = Speed::new(10.0) * heading;
    assert!((v.length().value() - 10.0).abs() < 1e-12);

    let moved: Difference2 = v * Duration::new(2.0);
    assert!((moved.x().value() - 12.0).abs() < 1e-12);
    assert!((moved.y().value() - 16.0).abs() < 1e-12);

    let back: Velocity2 = moved / Duration::new(2.0);
    assert!((back.value() - v.value()).length() < 1e-12);

    println!("moved {} in 2 s ({} total)", moved, moved.length());
    assert!(moved.length() > Unit::new(19.0));
}
