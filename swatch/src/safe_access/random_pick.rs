// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Uniform random element selection.

use rand::{Rng, rngs::ThreadRng};

/// Error from [`RandomElementPick::random_element`]: the one safe-access operation
/// whose contract requires at least one element, so the empty case is a named failure
/// rather than an absent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("can not pick a random element from an empty sequence")]
#[diagnostic(
    code(swatch::safe_access::empty_sequence),
    help("check is_empty() first, or provide at least one element")
)]
pub struct EmptySequenceError;

/// Uniform-by-index random selection from a sequence.
pub trait RandomElementPick {
    type Item;

    /// Returns a reference to an element chosen uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] when the sequence has no elements.
    fn random_element(&self) -> Result<&Self::Item, EmptySequenceError>;
}

impl<T> RandomElementPick for [T] {
    type Item = T;

    fn random_element(&self) -> Result<&T, EmptySequenceError> {
        if self.is_empty() {
            return Err(EmptySequenceError);
        }
        let mut rng: ThreadRng = rand::rng();
        let index = rng.random_range(0..self.len());
        Ok(&self[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_random_element_empty() {
        let xs: [i32; 0] = [];
        assert_eq2!(xs.random_element(), Err(EmptySequenceError));
    }

    #[test]
    fn test_random_element_single() {
        let xs = [42];
        assert_eq2!(xs.random_element(), Ok(&42));
    }

    #[test]
    fn test_random_element_only_returns_members() {
        let xs = [1, 2, 3, 4, 5];
        for _ in 0..100 {
            let picked = xs.random_element().unwrap();
            assert!(xs.contains(picked));
        }
    }
}
