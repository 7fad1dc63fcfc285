use roadwatch_core::UniformSource;

/// `Math.random()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl UniformSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
