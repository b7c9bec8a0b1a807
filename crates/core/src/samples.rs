use thiserror::Error;

/// Errors that can occur when pairing inputs with targets.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DataError {
    #[error("no samples to fit")]
    Empty,

    #[error("inputs and targets differ in length ({inputs} inputs, {targets} targets)")]
    LengthMismatch { inputs: usize, targets: usize },
}

/// Paired observations: one target per input.
///
/// Construction guarantees both slices have the same, non-zero length, so
/// means over the samples are always defined.
#[derive(Debug, Clone, Copy)]
pub struct Samples<'a> {
    inputs: &'a [f64],
    targets: &'a [f64],
}

impl<'a> Samples<'a> {
    /// Pairs `inputs` with `targets`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::LengthMismatch`] if the slices differ in length,
    /// or [`DataError::Empty`] if both are empty.
    pub fn new(inputs: &'a [f64], targets: &'a [f64]) -> Result<Self, DataError> {
        if inputs.len() != targets.len() {
            return Err(DataError::LengthMismatch {
                inputs: inputs.len(),
                targets: targets.len(),
            });
        }
        if inputs.is_empty() {
            return Err(DataError::Empty);
        }
        Ok(Self { inputs, targets })
    }

    #[must_use]
    pub fn inputs(&self) -> &'a [f64] {
        self.inputs
    }

    #[must_use]
    pub fn targets(&self) -> &'a [f64] {
        self.targets
    }

    /// Returns the number of samples, which is never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_equal_length_slices() {
        let inputs = [1.0, 2.0, 3.0];
        let targets = [2.0, 4.0, 5.0];

        let samples = Samples::new(&inputs, &targets).expect("should pair");

        assert_eq!(samples.len(), 3);
        assert!(!samples.is_empty());
        assert_eq!(samples.inputs(), &inputs);
        assert_eq!(samples.targets(), &targets);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Samples::new(&[], &[]).unwrap_err(), DataError::Empty);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = Samples::new(&[1.0, 2.0], &[1.0]).unwrap_err();

        assert_eq!(
            err,
            DataError::LengthMismatch {
                inputs: 2,
                targets: 1
            }
        );
    }

    #[test]
    fn mismatch_is_reported_before_emptiness() {
        let err = Samples::new(&[], &[1.0]).unwrap_err();

        assert!(matches!(err, DataError::LengthMismatch { inputs: 0, .. }));
    }

    #[test]
    fn error_messages_name_the_lengths() {
        let err = DataError::LengthMismatch {
            inputs: 4,
            targets: 3,
        };

        assert_eq!(
            err.to_string(),
            "inputs and targets differ in length (4 inputs, 3 targets)"
        );
    }
}
