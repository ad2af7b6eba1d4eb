//! Fixed-step integration of a projectile under standard gravity.

use spacetime::{
    Acceleration2, Difference2, Direction2, Duration, Speed, Unit, Velocity2, STANDARD_GRAVITY,
};

fn main() {
    let dt = Duration::new(0.001);
    let gravity: Acceleration2 = STANDARD_GRAVITY * -Direction2::UNIT_Y;

    let mut velocity: Velocity2 = Speed::new(20.0) * Direction2::from_radians(0.6);
    let mut position = Difference2::ZERO;
    let mut elapsed = Duration::ZERO;

    loop {
        velocity += gravity * dt;
        position += velocity * dt;
        elapsed += dt;
        if position.y() < Unit::ZERO {
            break;
        }
    }

    println!("landed after {} at x = {}", elapsed, position.x());
    println!("impact speed {}", velocity.length());

    // Closed form: range = v² · sin(2θ) / g
    let expected = 400.0 * (1.2f64).sin() / STANDARD_GRAVITY.value();
    assert!((position.x().value() - expected).abs() < 0.1);
}
