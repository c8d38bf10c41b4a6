//! Numeric constraints checked once at construction.
//!
//! Model parameters (the Barbero-Immirzi parameter, sampling counts, output
//! resolution) are validated when they enter the crate and carried around in
//! a [`Constrained<T, C>`] wrapper afterwards, so downstream formulas never
//! re-check them.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: greater than zero
//! - [`NonZero`]: not equal to zero
//! - [`Finite`]: neither infinite nor `NaN`
//!
//! Constraints with no marker of their own can be added by implementing
//! [`Constraint<T>`] for a zero-sized type.

use std::{cmp::Ordering, marker::PhantomData};

use num_traits::{Float, Zero};
use thiserror::Error;

/// A numeric invariant checked at construction time.
pub trait Constraint<T> {
    /// Checks that `value` satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use lqg_thermo::support::constraint::{Constrained, StrictlyPositive};
///
/// let gamma = Constrained::<_, StrictlyPositive>::new(0.2375).unwrap();
/// assert_eq!(gamma.into_inner(), 0.2375);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Marker for values greater than zero.
///
/// `NaN` is rejected.
///
/// ```
/// use lqg_thermo::support::constraint::StrictlyPositive;
///
/// assert!(StrictlyPositive::new(0.2375).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or `NaN`.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker for values not equal to zero.
///
/// Used for sample counts, where an empty grid has no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or `NaN`.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker for floating-point values that are neither infinite nor `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finite;

impl Finite {
    /// Constructs a [`Constrained<T, Finite>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is infinite or `NaN`.
    pub fn new<T: Float>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_positive_floats() {
        assert!(StrictlyPositive::new(0.2375).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-1.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
        assert!(StrictlyPositive::new(f64::INFINITY).is_ok());
    }

    #[test]
    fn non_zero_counts() {
        let n = NonZero::new(1000_usize).unwrap();
        assert_eq!(*n.as_ref(), 1000);
        assert_eq!(NonZero::new(0_usize), Err(ConstraintError::Zero));
    }

    #[test]
    fn finite_floats() {
        assert!(Finite::new(-4.455).is_ok());
        assert_eq!(Finite::new(f64::INFINITY), Err(ConstraintError::Infinite));
        assert_eq!(
            Finite::new(f64::NEG_INFINITY),
            Err(ConstraintError::Infinite)
        );
        assert_eq!(Finite::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
