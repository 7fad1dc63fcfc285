use rand::Rng;

use crate::Outcome;

/// Yields uniform values in [0, 1).
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapts any `rand` generator into a [`UniformSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Stand-in for a classification service: a fair coin.
pub struct CoinFlip<S> {
    source: S,
}

impl<S: UniformSource> CoinFlip<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn flip(&mut self) -> Outcome {
        Outcome::from_sample(self.source.next_unit())
    }
}
