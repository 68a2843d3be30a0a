//! Miscellaneous utility structs and functions.

use std::cmp::Ordering;
use std::fmt::Debug;

use cgmath::num_traits::Float;
use serde::{Deserialize, Serialize};

/// Tolerance used when comparing stations and times.
pub const EPSILON: f64 = 1e-6;

/// An interval on the real number line.
#[derive(Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: std::cmp::PartialOrd> Interval<T> {
    /// Returns true if this interval contains the value.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

impl<T: std::ops::Sub<T, Output = T> + Copy> Interval<T> {
    /// Gets the magnitude of the interval.
    pub fn length(&self) -> T {
        self.max - self.min
    }
}

impl<T: Float> Interval<T> {
    /// Clamps both ends of the interval so they do not exceed `limit`.
    pub fn clip_max(&self, limit: T) -> Self {
        Self {
            min: T::min(self.min, limit),
            max: T::min(self.max, limit),
        }
    }
}

impl Interval<f64> {
    /// Whether `min` is strictly less than `max`, allowing for floating point noise.
    pub fn is_proper(&self) -> bool {
        fuzzy_cmp(self.min, self.max) == Ordering::Less
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}

/// Compares two values, treating them as equal when they are within [EPSILON].
pub fn fuzzy_cmp(a: f64, b: f64) -> Ordering {
    if (a - b).abs() < EPSILON {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}
