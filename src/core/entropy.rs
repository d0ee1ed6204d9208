use rand::Rng;
use std::sync::Mutex;

/// Source of the uniform draws used for template selection and jitter.
pub trait Entropy: Send + Sync {
    /// Uniform value in `[0, 1)`.
    fn unit(&self) -> f64;

    /// Uniform index in `[0, len)`. Returns 0 for an empty range.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let scaled = (self.unit() * len as f64).floor() as usize;
        scaled.min(len - 1)
    }
}

/// Thread-local OS-seeded generator; concurrent callers never share state.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn unit(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Replays a fixed cycle of unit values. Values are clamped into `[0, 1)`.
#[derive(Debug)]
pub struct ScriptedEntropy {
    values: Vec<f64>,
    cursor: Mutex<usize>,
}

impl ScriptedEntropy {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values: Vec<f64> = values
            .into()
            .into_iter()
            .map(|v| if v.is_finite() { v.clamp(0.0, 0.999_999) } else { 0.0 })
            .collect();
        Self {
            values,
            cursor: Mutex::new(0),
        }
    }

    /// Always returns the same value.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl Entropy for ScriptedEntropy {
    fn unit(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let mut cursor = self
            .cursor
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let value = self.values[*cursor % self.values.len()];
        *cursor = (*cursor + 1) % self.values.len();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_entropy_stays_in_unit_interval() {
        let entropy = ThreadEntropy;
        for _ in 0..1_000 {
            let v = entropy.unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn index_never_reaches_len() {
        let entropy = ScriptedEntropy::constant(1.0);
        assert_eq!(entropy.index(4), 3);
        assert_eq!(entropy.index(1), 0);
        assert_eq!(entropy.index(0), 0);
    }

    #[test]
    fn index_maps_unit_value_onto_buckets() {
        let entropy = ScriptedEntropy::new(vec![0.0, 0.25, 0.5, 0.99]);
        let picks: Vec<usize> = (0..4).map(|_| entropy.index(4)).collect();
        assert_eq!(picks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn scripted_entropy_cycles() {
        let entropy = ScriptedEntropy::new(vec![0.1, 0.2]);
        let draws: Vec<f64> = (0..5).map(|_| entropy.unit()).collect();
        assert_eq!(draws, vec![0.1, 0.2, 0.1, 0.2, 0.1]);
    }

    #[test]
    fn empty_script_yields_zero() {
        let entropy = ScriptedEntropy::new(Vec::new());
        assert!(entropy.unit().abs() < f64::EPSILON);
    }
}
