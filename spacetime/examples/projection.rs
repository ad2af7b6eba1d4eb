//! Splitting a velocity into along-track and cross-track components.

use spacetime::{DVec2, Difference2, Direction2, Speed, Velocity2};

fn main() {
    let track = Difference2::from_xy(100.0, 100.0);
    let wind = Velocity2::from_xy(5.0, -3.0);

    let along: Speed = wind.projected_on(track);
    let cross: Speed = wind.projected_on(track.direction().perpendicular());
    println!("along-track {along}, cross-track {cross}");

    let rebuilt = along * track.direction() + cross * track.direction().perpendicular();
    assert!((rebuilt.value() - wind.value()).length() < 1e-12);

    // A degenerate axis contributes nothing.
    assert_eq!(wind.projected_on(DVec2::ZERO), Speed::ZERO);
    assert_eq!(Difference2::ZERO.direction(), Direction2::FALLBACK);
}
