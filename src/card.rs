//! The card module contains the player's ticket: three rows of nine cells, five of which hold a
//! number in each row.
//!
//! Numbers are unique across the whole card, and within a row they grow from left to right. The
//! card also keeps count of the numbers that have been crossed out, which is what decides a win.

use std::fmt::{self, Display, Formatter};

use console::measure_text_width;
use fastrand::Rng;

use crate::pool::NumberPool;

/// The amount of cells in a single row of a card.
pub(crate) const ROW_CELLS: usize = 9;

/// The amount of numbers placed in a single row of a card.
pub(crate) const ROW_NUMBERS: usize = 5;

/// The amount of rows in a card.
pub(crate) const ROWS: usize = 3;

/// The highest number that can appear on a card or come out of the bag.
pub(crate) const NUMBERS: u8 = 90;

/// The amount of marks after which a card is full.
const CARD_NUMBERS: u8 = 15;

/// The width of the dashed rules framing a rendered card. It matches the width of a row, which is
/// two characters per cell plus a separator between each pair of cells.
const RULE_WIDTH: usize = 3 * ROW_CELLS - 1;

/// This enum holds the three states a single cell of a card can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// This variant is used for the cells that never held a number.
    #[default]
    Empty,
    /// This variant is used for a number that has been crossed out.
    Marked,
    /// This variant is used for a number that is still waiting to be drawn.
    Number(u8),
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Empty => f.write_str("  "),
            Self::Marked => f.write_str(" -"),
            Self::Number(number) => write!(f, "{number:>2}"),
        }
    }
}

/// This structure holds a player's card, along with the name it is printed under and the count of
/// numbers crossed out so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// This field contains how many numbers have been crossed out.
    marked: u8,
    /// This field contains the name of the player that owns the card.
    owner: String,
    /// This field contains the cells of the card, row by row.
    rows: [[Cell; ROW_CELLS]; ROWS],
}

impl Card {
    /// Returns `true` if the number is still waiting to be crossed out somewhere on the card.
    #[must_use]
    pub fn has_number(&self, number: u8) -> bool {
        self.rows
            .iter()
            .flatten()
            .any(|cell| *cell == Cell::Number(number))
    }

    /// Returns `true` once all fifteen numbers of the card have been crossed out.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.marked == CARD_NUMBERS
    }

    /// Crosses out the first occurrence of the number, going through the rows in order, and returns
    /// whether there was one to cross out. A number that was already crossed out, or that never was
    /// on the card, leaves the card untouched.
    pub fn mark_number(&mut self, number: u8) -> bool {
        match self
            .rows
            .iter_mut()
            .flatten()
            .find(|cell| **cell == Cell::Number(number))
        {
            Some(cell) => {
                *cell = Cell::Marked;
                self.marked += 1;
                true
            }
            None => false,
        }
    }

    /// Returns how many numbers have been crossed out so far.
    #[must_use]
    pub const fn marked_count(&self) -> u8 {
        self.marked
    }

    /// Generates a new card for the given player.
    ///
    /// The numbers for the whole card come out of a single pool, so they never repeat. Every row
    /// then draws its own five columns, and both the numbers and the columns are sorted before
    /// being paired up, so the smallest number of the row lands on its leftmost chosen column.
    #[must_use]
    pub fn new(owner: &str, rng: &mut Rng) -> Self {
        let mut numbers = NumberPool::new(NUMBERS, rng.fork());
        let mut rows = [[Cell::Empty; ROW_CELLS]; ROWS];

        for row in &mut rows {
            let mut columns = NumberPool::new(ROW_CELLS as u8, rng.fork());
            let mut row_numbers: Vec<u8> = (0..ROW_NUMBERS)
                .filter_map(|_| numbers.draw_next())
                .collect();
            let mut row_columns: Vec<usize> = (0..ROW_NUMBERS)
                .filter_map(|_| columns.draw_next())
                .map(|column| usize::from(column) - 1)
                .collect();
            row_numbers.sort_unstable();
            row_columns.sort_unstable();

            for (column, number) in row_columns.into_iter().zip(row_numbers) {
                if let Some(cell) = row.get_mut(column) {
                    *cell = Cell::Number(number);
                }
            }
        }

        log::debug!("generated a card for {owner}");

        Self {
            marked: 0,
            owner: owner.to_owned(),
            rows,
        }
    }

    /// Returns the numbers still waiting to be crossed out, in row order.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().flatten().filter_map(|cell| match *cell {
            Cell::Number(number) => Some(number),
            Cell::Empty | Cell::Marked => None,
        })
    }

    /// Returns the name of the player that owns the card.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the cells of the card, row by row.
    #[must_use]
    pub const fn rows(&self) -> &[[Cell; ROW_CELLS]; ROWS] {
        &self.rows
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = format!(" {} ", self.owner);
        let label_width = measure_text_width(&label);

        if label_width < RULE_WIDTH {
            let left = (RULE_WIDTH - label_width) / 2;
            let right = RULE_WIDTH - label_width - left;
            writeln!(f, "{}{label}{}", "-".repeat(left), "-".repeat(right))?;
        } else {
            writeln!(f, "{label}")?;
        }

        for row in &self.rows {
            let mut sep = "";

            for cell in row {
                write!(f, "{sep}{cell}")?;
                sep = " ";
            }

            writeln!(f)?;
        }

        write!(f, "{}", "-".repeat(RULE_WIDTH))
    }
}
