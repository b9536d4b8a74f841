//! This module contains all functions related to taking input from the user. They all use the
//! `dialoguer` crate to process the input, and they all check for input validation.
//!
//! Invalid input never leaves this module: the prompt shows what was wrong and asks again. The
//! same checks back the command-line flags, so a bad flag is reported the same way.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use regex::Regex;

use crate::card::Card;
use crate::player::{Decide, Seat};

/// The pattern a human player's name has to follow. Names are kept short enough to fit in the
/// header of a card.
pub(crate) const NAME_PATTERN: &str = r"\A[[:alnum:]][[:alnum:] _-]{0,19}\z";

/// This enum holds the reasons for which a piece of setup input can be rejected.
#[expect(
    clippy::arbitrary_source_item_ordering,
    reason = "The errors are listed in the order the prompts are shown in."
)]
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// This variant is used when the player count is not a whole number.
    #[error("{}", style("the player count must be a whole number").bold())]
    NotANumber,
    /// This variant is used when there are not enough players for a game.
    #[error("{}", style("a game needs at least two players").bold())]
    TooFewPlayers,
    /// This variant is used when the player type is neither of the known letters.
    #[error("{}", style("the player type is either h (human) or c (computer)").bold())]
    UnknownSeat,
    /// This variant is used when a human player's name does not follow the name rules.
    #[error(
        "{}",
        style("names take 1 to 20 letters, digits, spaces, '-' or '_', starting with a letter or digit").bold()
    )]
    InvalidName,
}

/// This structure asks the person at the terminal about every number drawn for their player.
pub(crate) struct ConsoleDecider {
    /// This field contains the terminal the question is asked on.
    term: Term,
}

impl ConsoleDecider {
    /// This function creates a decider bound to the given terminal.
    pub(crate) const fn new(term: Term) -> Self {
        Self { term }
    }
}

impl Decide for ConsoleDecider {
    fn decide(&mut self, name: &str, _card: &Card, number: u8) -> Result<bool> {
        let cross = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "{}",
                style(format!("{name}, your move: cross out {number}?")).bold()
            ))
            .default(false)
            .interact_on(&self.term)?;

        Ok(cross)
    }
}

/// This function checks that a human player's name follows the name rules.
pub(crate) fn check_name(name: &str, re: &Regex) -> Result<(), SetupError> {
    if re.is_match(name) {
        Ok(())
    } else {
        Err(SetupError::InvalidName)
    }
}

/// This function parses a player count, accepting only whole numbers above one. It backs both the
/// count prompt and the `--players` flag.
pub(crate) fn parse_player_count(s: &str) -> Result<usize, SetupError> {
    let count: usize = s.trim().parse().map_err(|_| SetupError::NotANumber)?;

    if count > 1 {
        Ok(count)
    } else {
        Err(SetupError::TooFewPlayers)
    }
}

/// This function asks whether another game should be played once the current one is over.
pub(crate) fn play_again(term: &Term) -> Result<bool> {
    let again = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Play another game?").bold()))
        .default(true)
        .interact_on(term)?;

    Ok(again)
}

/// This function is in charge of taking the name of the human player sitting at the given seat.
pub(crate) fn take_human_name(term: &Term, seat: usize, re: &Regex) -> Result<String> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style(format!("Name of player #{seat}")).bold()))
        .validate_with(|input: &String| check_name(input, re))
        .interact_text_on(term)?;

    Ok(name)
}

/// This function is in charge of taking the amount of players for the game about to start.
pub(crate) fn take_player_count(term: &Term) -> Result<usize> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}",
            style("How many players (more than one)?").bold()
        ))
        .validate_with(|input: &String| parse_player_count(input).map(|_| ()))
        .interact_text_on(term)?;

    Ok(parse_player_count(&input)?)
}

/// This function is in charge of taking the kind of player that sits at the given seat.
pub(crate) fn take_seat(term: &Term, seat: usize) -> Result<Seat> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}",
            style(format!("Player #{seat}: human or computer (h/c)?")).bold()
        ))
        .validate_with(|input: &String| input.parse::<Seat>().map(|_| ()))
        .interact_text_on(term)?;

    Ok(input.parse::<Seat>()?)
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{check_name, parse_player_count, SetupError, NAME_PATTERN};

    #[test]
    fn player_count_needs_two_or_more() {
        assert_eq!(parse_player_count("2"), Ok(2), "smallest game");
        assert_eq!(parse_player_count(" 5 "), Ok(5), "whitespace is ignored");
        assert_eq!(parse_player_count("1"), Err(SetupError::TooFewPlayers), "one player");
        assert_eq!(parse_player_count("0"), Err(SetupError::TooFewPlayers), "no players");
        assert_eq!(parse_player_count("-3"), Err(SetupError::NotANumber), "negative");
        assert_eq!(parse_player_count("two"), Err(SetupError::NotANumber), "words");
        assert_eq!(parse_player_count(""), Err(SetupError::NotANumber), "empty");
    }

    #[test]
    fn names_follow_the_pattern() -> anyhow::Result<()> {
        let re = Regex::new(NAME_PATTERN)?;

        assert_eq!(check_name("Ann", &re), Ok(()), "plain name");
        assert_eq!(check_name("Mary Jane-2", &re), Ok(()), "spaces and dashes");
        assert_eq!(check_name("", &re), Err(SetupError::InvalidName), "empty");
        assert_eq!(check_name(" Ann", &re), Err(SetupError::InvalidName), "leading space");
        assert_eq!(
            check_name("A name longer than twenty", &re),
            Err(SetupError::InvalidName),
            "too long"
        );

        Ok(())
    }
}
