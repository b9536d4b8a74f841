//! The library components of the game. They allow generating cards, drawing barrels out of the
//! bag, seating human and computer players and playing rounds until somebody wins.
//!
//! The starting point of the library is the game.rs file, which contains the main game loop. The
//! game logic itself never touches the terminal, so a `Game` can be driven by hand with
//! `Game::draw()` and `Game::resolve()`.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod card;
mod game;
mod input;
mod player;
mod pool;

pub use card::{Card, Cell};
pub use game::{init, Game, Outcome, Resolution};
pub use input::SetupError;
pub use player::{Decide, Player, Role, Seat};
pub use pool::NumberPool;
