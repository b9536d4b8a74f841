//! The game module contains the core parts of the game, except for input handling.
//!
//! It contains the `init()` function to initialize the session and run one game after another,
//! the `Game` structure that holds the bag and the players, and the round logic deciding who is out
//! and who wins.

use std::fmt::{self, Display, Formatter};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::{style, Term};
use env_logger::Env;
use fastrand::Rng;
use indicatif::ProgressBar;
use regex::Regex;

use crate::card::NUMBERS;
use crate::input::{
    parse_player_count, play_again, take_human_name, take_player_count, take_seat,
    ConsoleDecider, NAME_PATTERN,
};
use crate::player::{Decide, Player, Role, Seat};
use crate::pool::NumberPool;

/// This struct holds information about the application when it comes to the command-line argument
/// parser of choice, which is clap. Every flag is optional; whatever is left out is asked for once
/// the game starts.
#[derive(Parser)]
#[command(name = "loto", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// Fill every seat with a computer player instead of asking for each one.
    ///
    /// Without `--players`, an automatic game is played between two computers.
    #[arg(long)]
    auto: bool,
    /// Milliseconds to wait before drawing each barrel.
    #[arg(long, default_value_t = 0, value_name = "MILLIS")]
    delay: u64,
    /// The amount of players in every game; asked for when left out.
    #[arg(short, long, value_parser = parse_player_count, value_name = "COUNT")]
    players: Option<usize>,
    /// The seed for the random number generator, to replay the exact same games.
    #[arg(long, env = "LOTO_SEED", value_name = "SEED")]
    seed: Option<u64>,
}

/// This enum holds the ways a game can end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// This variant is used when every barrel has been drawn and two or more players are still in.
    NoWinner,
    /// This variant is used when a player won, either by filling their card or by being the only
    /// one left. It carries the winner's name.
    Winner(String),
}

/// This structure holds what happened while the players reacted to a single drawn number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// This field contains the names of the players that went out this round, in the order they
    /// went out.
    pub eliminated: Vec<String>,
    /// This field contains the name of the winner, if the round decided the game.
    pub winner: Option<String>,
}

/// This structure holds a single game: the bag of barrels and the players still in it.
pub struct Game {
    /// This field contains the barrels not drawn yet.
    bag: NumberPool,
    /// This field contains how many computer players have been seated, to name the next one.
    computers: usize,
    /// This field contains the players that went out, in the order they went out.
    eliminated: Vec<Player>,
    /// This field contains the players still in the game, in seating order.
    players: Vec<Player>,
    /// This field contains the generator the players' cards are made with.
    rng: Rng,
}

impl Game {
    /// Seats a computer player, named `Comp-<k>` after the amount of computers seated so far, and
    /// returns its name.
    pub fn add_computer(&mut self) -> &str {
        self.computers += 1;
        let name = format!("Comp-{}", self.computers);
        let player = Player::new(&name, Role::Computer, &mut self.rng);
        self.seat(player)
    }

    /// Seats a human player whose moves are decided by `decider`, and returns its name.
    pub fn add_human(&mut self, name: &str, decider: Box<dyn Decide>) -> &str {
        let player = Player::new(name, Role::Human(decider), &mut self.rng);
        self.seat(player)
    }

    /// Draws the next barrel out of the bag, or returns `None` once every barrel is out.
    pub fn draw(&mut self) -> Option<u8> {
        let number = self.bag.draw_next();

        if let Some(number) = number {
            log::info!("drew {number}, {} left", self.bag.len());
        }

        number
    }

    /// Returns the players that went out, in the order they went out.
    #[must_use]
    pub fn eliminated(&self) -> &[Player] {
        &self.eliminated
    }

    /// Creates a game with a full bag and no players yet. The bag and every card seated later are
    /// drawn from `rng`.
    #[must_use]
    pub fn new(mut rng: Rng) -> Self {
        Self {
            bag: NumberPool::new(NUMBERS, rng.fork()),
            computers: 0,
            eliminated: Vec::new(),
            players: Vec::new(),
            rng,
        }
    }

    /// Plays the game on the terminal until somebody wins or the bag is empty.
    ///
    /// Every round prints the drawn barrel and the cards of the players still in, before any of
    /// them is asked to move. A non-zero `delay` shows a spinner before each draw.
    ///
    /// # Errors
    ///
    /// The function fails if writing to the terminal or asking a human player fails.
    pub fn play(&mut self, term: &Term, delay: Duration) -> Result<Outcome> {
        loop {
            shake_bag(delay);

            let Some(number) = self.draw() else {
                log::info!("the bag is empty");
                break Ok(Outcome::NoWinner);
            };

            term.write_line("")?;
            term.write_line(&format!(
                "{} {} ({} left)",
                style("New barrel:").bold(),
                style(number).bold().cyan(),
                self.remaining()
            ))?;

            for player in &self.players {
                term.write_line(&player.card().to_string())?;
            }

            let resolution = self.resolve(number)?;

            for name in &resolution.eliminated {
                term.write_line(&format!("{}", style(format!("{name} is out!")).red()))?;
            }

            if let Some(winner) = resolution.winner {
                break Ok(Outcome::Winner(winner));
            }
        }
    }

    /// Returns the players still in the game, in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns how many barrels are still in the bag.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bag.len()
    }

    /// Lets every player still in the game react to `number`, in seating order.
    ///
    /// A player that makes a wrong move goes out right away; if that leaves a single player, that
    /// one wins. Otherwise, a player whose card is now full wins on the spot, and the players after
    /// them do not get to react. A loss is looked at before a full card.
    ///
    /// # Errors
    ///
    /// The function fails if a human player's decision could not be obtained.
    pub fn resolve(&mut self, number: u8) -> Result<Resolution> {
        let mut resolution = Resolution::default();
        let mut seat = 0;

        while let Some(player) = self.players.get_mut(seat) {
            player.react_to_draw(number)?;

            if player.has_lost() {
                // the next player slides into this seat, so the index stays put
                let loser = self.players.remove(seat);
                log::info!("{} is out", loser.name());
                resolution.eliminated.push(loser.name().to_owned());
                self.eliminated.push(loser);

                if let [last] = self.players.as_slice() {
                    log::info!("{} is the last one in", last.name());
                    resolution.winner = Some(last.name().to_owned());
                    break;
                }
                continue;
            }

            if player.card().is_full() {
                log::info!("{} filled their card", player.name());
                resolution.winner = Some(player.name().to_owned());
                break;
            }

            seat += 1;
        }

        Ok(resolution)
    }

    /// This function adds a player at the end of the table and returns its name.
    fn seat(&mut self, player: Player) -> &str {
        log::debug!("seating {} {}", player.role_name(), player.name());
        self.players.push(player);
        self.players.last().map_or("", Player::name)
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut sep = "";

        for player in &self.players {
            write!(f, "{sep}{player}")?;
            sep = "\n";
        }

        Ok(())
    }
}

/// Initializes the session state and handles literally everything. This is a `main()` function of
/// sorts though it is still called from main.rs.
///
/// It sets up logging, reads the command line, and then keeps setting up and playing games for as
/// long as the user wants another one.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - `log::SetLoggerError`
/// - `regex::Error`
/// - `io::Error`
/// - `dialoguer::Error`
pub fn init() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).try_init()?;

    let term = Term::stdout();
    let cli = Cli::parse();
    let name_re = Regex::new(NAME_PATTERN)?;
    let mut rng = cli.seed.map_or_else(Rng::new, Rng::with_seed);
    let delay = Duration::from_millis(cli.delay);

    // show the init message
    init_message(&term)?;

    // game loop
    loop {
        let mut game = setup(&term, &cli, &name_re, rng.fork())?;

        term.write_line(&format!("{}", style("Players at the table:").bold()))?;
        term.write_line(&game.to_string())?;

        let outcome = game.play(&term, delay)?;
        announce(&term, &outcome)?;

        if !play_again(&term)? {
            break Ok(());
        }

        term.clear_screen()?;
    }
}

/// This function prints the end of the game: either the winner, or that every barrel came out
/// without anyone winning.
fn announce(term: &Term, outcome: &Outcome) -> Result<()> {
    let msg = match *outcome {
        Outcome::NoWinner => "All barrels are drawn, nobody wins!".to_owned(),
        Outcome::Winner(ref name) => format!("{name} wins!"),
    };
    log::info!("game over: {outcome:?}");

    term.write_line("")?;
    term.write_line(&format!("{}", style(msg).bold().green()))?;
    Ok(())
}

/// This function initializes the message to be used at the start of the program. The screen is
/// cleared and the title of the console window is set to the name of the game.
fn init_message(term: &Term) -> Result<()> {
    const MSG: &str = "Welcome to loto";
    let msg = style(MSG).bold();

    term.clear_screen()?;
    term.set_title("loto");

    term.write_line(&format!("{msg}"))?;
    Ok(())
}

/// This function seats the players for a new game, asking for whatever the command line left out.
/// Automatic games with no player count get two computers.
fn setup(term: &Term, cli: &Cli, name_re: &Regex, rng: Rng) -> Result<Game> {
    let count = match cli.players {
        Some(count) => count,
        None if cli.auto => 2,
        None => take_player_count(term)?,
    };
    let mut game = Game::new(rng);

    for seat in 1..=count {
        let kind = if cli.auto {
            Seat::Computer
        } else {
            take_seat(term, seat)?
        };

        match kind {
            Seat::Computer => {
                let name = game.add_computer();
                term.write_line(&format!("Player #{seat} is {name}"))?;
            }
            Seat::Human => {
                let name = take_human_name(term, seat, name_re)?;
                let _ = game.add_human(&name, Box::new(ConsoleDecider::new(term.clone())));
            }
        }
    }

    Ok(game)
}

/// This function pauses before a draw, showing a spinner while it waits. A zero delay skips it.
fn shake_bag(delay: Duration) {
    if delay.is_zero() {
        return;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Shaking the bag...");
    spinner.enable_steady_tick(Duration::from_millis(50));
    thread::sleep(delay);
    spinner.finish_and_clear();
}
