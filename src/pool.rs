//! The pool module contains the bag of numbered barrels that both the game and the card generator
//! draw from.
//!
//! A pool starts with every number from one up to a given count and shrinks by exactly one number
//! per draw, until nothing is left to draw.

use std::fmt::{self, Display, Formatter};

use fastrand::Rng;

/// This structure holds the numbers that have not yet been drawn, in ascending order, together with
/// the random number generator used to pick them.
#[derive(Debug)]
pub struct NumberPool {
    /// This field contains the remaining numbers. They are kept sorted so the pool can be displayed
    /// and compared without regard to the order in which earlier numbers were drawn.
    numbers: Vec<u8>,
    /// This field contains the generator that picks which of the remaining numbers comes out next.
    rng: Rng,
}

impl NumberPool {
    /// Returns `true` if every number of the pool has already been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Returns the amount of numbers that can still be drawn from the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Creates a pool holding every number from 1 to `count`, both inclusive. A count of zero gives
    /// a pool that is empty from the start.
    #[must_use]
    pub fn new(count: u8, rng: Rng) -> Self {
        Self {
            numbers: (1..=count).collect(),
            rng,
        }
    }

    /// Removes one of the remaining numbers, picked uniformly at random, and returns it. Once the
    /// pool is empty this returns `None`, and keeps doing so on every later call.
    pub fn draw_next(&mut self) -> Option<u8> {
        if self.numbers.is_empty() {
            return None;
        }

        let pos = self.rng.usize(..self.numbers.len());
        Some(self.numbers.remove(pos))
    }

    /// Returns the numbers that have not been drawn yet, in ascending order.
    #[must_use]
    pub fn remaining(&self) -> &[u8] {
        &self.numbers
    }
}

impl Display for NumberPool {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut sep = "";

        for number in &self.numbers {
            write!(f, "{sep}{number}")?;
            sep = ", ";
        }

        Ok(())
    }
}

impl PartialEq for NumberPool {
    fn eq(&self, other: &Self) -> bool {
        self.numbers == other.numbers
    }
}

impl Eq for NumberPool {}
