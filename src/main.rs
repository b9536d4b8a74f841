//! # loto
//!
//! This crate is the game of lotto, played on the console. Every player gets a card with fifteen
//! numbers spread over three rows, and barrels numbered 1 to 90 come out of a bag one at a time.
//!
//! Computers cross out their numbers on their own. Humans are asked on every barrel whether to
//! cross it out, and a wrong answer either way takes them out of the game. The first full card
//! wins, as does the last player left at the table.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use loto::init;

fn main() -> Result<()> {
    init()
}
