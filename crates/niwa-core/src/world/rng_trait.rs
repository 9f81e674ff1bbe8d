//! RNG trait abstraction for rule sets
//!
//! Rules only ever ask for coin flips, unit floats and probability checks, so
//! tests can drive them with scripted sources while the scheduler threads a
//! seeded generator through every tick.

/// Random number generator trait for the simulation
pub trait WorldRng {
    /// Generate random boolean with 50% probability
    fn gen_bool(&mut self) -> bool;

    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }

    /// Uniformly random horizontal direction, -1 or +1
    fn gen_direction(&mut self) -> i32 {
        if self.gen_bool() { -1 } else { 1 }
    }
}

// Blanket implementation for any type implementing rand::Rng
impl<T: ?Sized + rand::Rng> WorldRng for T {
    fn gen_bool(&mut self) -> bool {
        rand::Rng::r#gen(self)
    }

    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}
