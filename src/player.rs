//! The player module contains the participants of a game and the way each of them reacts to a
//! freshly drawn number.
//!
//! A computer simply crosses out whatever it holds. A human is asked first, and a wrong answer in
//! either direction takes them out of the game.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use anyhow::Result;
use fastrand::Rng;

use crate::card::Card;
use crate::input::SetupError;

/// This trait is implemented by whatever answers, on behalf of a human player, whether a drawn
/// number should be crossed out on their card.
pub trait Decide {
    /// Returns `true` if the player wants to cross out `number`.
    ///
    /// # Errors
    ///
    /// Implementations that ask a person through the terminal fail when the terminal does.
    fn decide(&mut self, name: &str, card: &Card, number: u8) -> Result<bool>;
}

impl<F> Decide for F
where
    F: FnMut(&Card, u8) -> bool,
{
    fn decide(&mut self, _name: &str, card: &Card, number: u8) -> Result<bool> {
        Ok(self(card, number))
    }
}

/// This enum holds the behaviour of a player when a number comes out of the bag.
pub enum Role {
    /// This variant is used for players that cross out every number they hold.
    Computer,
    /// This variant is used for players whose every move is decided by the wrapped collaborator.
    Human(Box<dyn Decide>),
}

impl Role {
    /// This function returns the name of the role as shown next to the player's name.
    const fn repr(&self) -> &'static str {
        match *self {
            Self::Computer => "Computer",
            Self::Human(_) => "Human",
        }
    }
}

/// This enum holds the kinds of seat that can be picked for a player while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// This variant is used for a player run by the program.
    Computer,
    /// This variant is used for a player sitting at the terminal.
    Human,
}

impl FromStr for Seat {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "c" | "C" => Ok(Self::Computer),
            "h" | "H" => Ok(Self::Human),
            _ => Err(SetupError::UnknownSeat),
        }
    }
}

/// This structure holds a single participant of the game, with the card it plays and whether it
/// has already been taken out of the game.
pub struct Player {
    /// This field contains the player's card, which carries the player's name in its header.
    card: Card,
    /// This field contains whether the player made a wrong move and is out of the game.
    has_lost: bool,
    /// This field contains the name of the player.
    name: String,
    /// This field contains the way the player reacts to drawn numbers.
    role: Role,
}

impl Player {
    /// Returns the card of the player.
    #[must_use]
    pub const fn card(&self) -> &Card {
        &self.card
    }

    /// Returns `true` once the player has made a wrong move. A player never recovers from a loss.
    #[must_use]
    pub const fn has_lost(&self) -> bool {
        self.has_lost
    }

    /// Returns `true` if the player is run by the program.
    #[must_use]
    pub const fn is_computer(&self) -> bool {
        matches!(self.role, Role::Computer)
    }

    /// Returns the name of the player.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates a player with a freshly generated card.
    #[must_use]
    pub fn new(name: &str, role: Role, rng: &mut Rng) -> Self {
        Self {
            card: Card::new(name, rng),
            has_lost: false,
            name: name.to_owned(),
            role,
        }
    }

    /// Lets the player react to the number that just came out of the bag.
    ///
    /// A computer crosses the number out if it has it. A human is asked whether to cross it out:
    /// saying yes is only right if the card actually held the number, and saying no is only right
    /// if it did not. Being wrong either way marks the player as lost.
    ///
    /// # Errors
    ///
    /// The function fails if the human player's decision could not be obtained.
    pub fn react_to_draw(&mut self, number: u8) -> Result<()> {
        match self.role {
            Role::Computer => {
                let _ = self.card.mark_number(number);
            }
            Role::Human(ref mut decider) => {
                let cross = decider.decide(&self.name, &self.card, number)?;
                let right = if cross {
                    self.card.mark_number(number)
                } else {
                    !self.card.has_number(number)
                };
                log::debug!("{} chose to cross {number}: {cross}, right: {right}", self.name);

                if !right {
                    self.has_lost = true;
                }
            }
        }

        Ok(())
    }

    /// Returns the kind of role the player has, as shown when listing players.
    #[must_use]
    pub const fn role_name(&self) -> &'static str {
        self.role.repr()
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.role.repr(), self.name)?;
        write!(f, "{}", self.card)
    }
}

#[cfg(test)]
mod tests {
    use fastrand::Rng;

    use super::{Player, Role, Seat};
    use crate::card::{Card, NUMBERS};
    use crate::input::SetupError;

    fn human<F>(decide: F) -> Player
    where
        F: FnMut(&Card, u8) -> bool + 'static,
    {
        Player::new("Test", Role::Human(Box::new(decide)), &mut Rng::with_seed(17))
    }

    fn held(player: &Player) -> u8 {
        player.card().numbers().next().unwrap_or_default()
    }

    fn missing(player: &Player) -> u8 {
        (1..=NUMBERS)
            .find(|number| !player.card().has_number(*number))
            .unwrap_or_default()
    }

    #[test]
    fn computer_marks_what_it_holds() -> anyhow::Result<()> {
        let mut player = Player::new("Comp-1", Role::Computer, &mut Rng::with_seed(4));
        let number = held(&player);
        let other = missing(&player);

        player.react_to_draw(number)?;
        assert!(!player.card().has_number(number), "number crossed out");
        assert_eq!(player.card().marked_count(), 1, "one mark");

        player.react_to_draw(other)?;
        player.react_to_draw(number)?;
        assert_eq!(player.card().marked_count(), 1, "nothing else marked");
        assert!(!player.has_lost(), "a computer never loses");

        Ok(())
    }

    #[test]
    fn human_crossing_a_held_number_stays_in() -> anyhow::Result<()> {
        let mut player = human(|_, _| true);
        let number = held(&player);

        player.react_to_draw(number)?;
        assert!(!player.has_lost(), "right call");
        assert_eq!(player.card().marked_count(), 1, "number crossed out");

        player.react_to_draw(number)?;
        assert!(player.has_lost(), "crossing it twice is wrong");

        Ok(())
    }

    #[test]
    fn human_claiming_a_missing_number_loses() -> anyhow::Result<()> {
        let mut player = human(|_, _| true);
        let number = missing(&player);

        player.react_to_draw(number)?;
        assert!(player.has_lost(), "nothing to cross out");
        assert_eq!(player.card().marked_count(), 0, "card untouched");

        Ok(())
    }

    #[test]
    fn human_declining_a_held_number_loses() -> anyhow::Result<()> {
        let mut player = human(|_, _| false);
        let number = missing(&player);

        player.react_to_draw(number)?;
        assert!(!player.has_lost(), "declining a missing number is right");

        let number = held(&player);
        player.react_to_draw(number)?;
        assert!(player.has_lost(), "the number was on the card");

        Ok(())
    }

    #[test]
    fn careful_human_never_loses() -> anyhow::Result<()> {
        let mut player = human(|card: &Card, number| card.has_number(number));

        for number in 1..=NUMBERS {
            player.react_to_draw(number)?;
        }

        assert!(!player.has_lost(), "every call was right");
        assert!(player.card().is_full(), "every number came out");

        Ok(())
    }

    #[test]
    fn loss_is_permanent() -> anyhow::Result<()> {
        let mut player = human(|card: &Card, number| card.has_number(number));
        let number = held(&player);
        player.react_to_draw(number)?;
        player.react_to_draw(number)?;
        assert!(!player.has_lost(), "declining an already crossed number is right");

        let mut player = human(|_, _| false);
        let number = held(&player);
        player.react_to_draw(number)?;
        assert!(player.has_lost(), "declined a held number");

        let next = missing(&player);
        player.react_to_draw(next)?;
        assert!(player.has_lost(), "still out after a right call");

        Ok(())
    }

    #[test]
    fn display_shows_role_and_card() {
        let decide = Box::new(|_: &Card, _: u8| true);
        let player = Player::new("Ann", Role::Human(decide), &mut Rng::with_seed(8));
        let text = player.to_string();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("Human Ann"), "role and name");
        assert!(lines.next().is_some_and(|line| line.contains("Ann")), "card header");
        assert_eq!(player.card().owner(), "Ann", "card belongs to the player");
        assert_eq!(player.role_name(), "Human", "role name");
        assert!(!player.is_computer(), "human seat");
    }

    #[test]
    fn seats_parse_from_a_single_letter() {
        assert_eq!("h".parse::<Seat>().ok(), Some(Seat::Human), "human");
        assert_eq!(" C ".parse::<Seat>().ok(), Some(Seat::Computer), "computer");
        assert!(
            matches!("x".parse::<Seat>(), Err(SetupError::UnknownSeat)),
            "unknown letters are rejected"
        );
    }
}
