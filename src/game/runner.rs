//! Text console for one game of Celebrity Detective
use crate::data::record::{Label, Record};
use crate::data::roster::Roster;
use crate::game::params::GameParams;
use crate::game::session::{Reveal, Session, Turn, GUESS_COMMAND};
use crate::trees::stump::DecisionStump;
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::error::Error;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub struct Game {
    roster: Roster,
    stump: DecisionStump,
    params: GameParams,
}

impl Game {
    /// Fits the stump on `roster` over the configured features.
    ///
    /// # Errors
    ///
    /// Returns an error if the stump cannot be fitted.
    pub fn new(roster: Roster, params: GameParams) -> Result<Self, Box<dyn Error>> {
        let mut stump = DecisionStump::new();
        stump.fit(&roster, params.features())?;
        let accuracy = stump.accuracy(&roster)?;
        info!(accuracy, "stump accuracy on roster");
        Ok(Self {
            roster,
            stump,
            params,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn stump(&self) -> &DecisionStump {
        &self.stump
    }

    pub fn params(&self) -> &GameParams {
        &self.params
    }

    /// Picks a mystery record, seeded from the params when a seed is set.
    pub fn choose_mystery(&self) -> Result<&Record, Box<dyn Error>> {
        let mut rng = match self.params.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.roster
            .records()
            .choose(&mut rng)
            .ok_or("The roster is empty.".into())
    }

    /// Plays one session against a randomly chosen mystery record.
    pub fn play<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Reveal, Box<dyn Error>> {
        let mystery = self.choose_mystery()?;
        self.play_round(mystery, input, output)
    }

    /// Plays one session against the given mystery record.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails, if input ends before a guess
    /// is made, or if the guess is malformed and re-prompting is disabled.
    pub fn play_round<R: BufRead, W: Write>(
        &self,
        mystery: &Record,
        input: &mut R,
        output: &mut W,
    ) -> Result<Reveal, Box<dyn Error>> {
        debug!(mystery = %mystery.name, "session started");
        self.write_banner(output)?;

        let mut session = Session::new(mystery, self.params.features());
        loop {
            writeln!(output, "\nAsk a question or type '{}':", GUESS_COMMAND)?;
            let available: Vec<_> = session.available().iter().map(|f| f.as_str()).collect();
            writeln!(output, "Available questions: {}", available.join(", "))?;
            write!(output, "> ")?;
            output.flush()?;

            let line = read_line(input)?.ok_or("Input ended before a guess was made.")?;
            match session.ask(&line) {
                Turn::Answer { feature, value } => {
                    debug!(%feature, "question answered");
                    writeln!(output, "Answer: the celebrity's {} is '{}'.", feature, value)?;
                }
                Turn::Guess => break,
                Turn::Invalid => {
                    debug!(input = line.trim(), "invalid question");
                    writeln!(output, "Invalid question. Try again.")?;
                }
            }
        }

        let guess = self.read_guess(input, output)?;
        let reveal = session.reveal(guess, &self.stump)?;
        write_reveal(&reveal, output)?;
        Ok(reveal)
    }

    fn write_banner<W: Write>(&self, output: &mut W) -> Result<(), Box<dyn Error>> {
        let features: Vec<_> = self.params.features().iter().map(|f| f.as_str()).collect();
        writeln!(output, "\n🎬 WELCOME TO CELEBRITY DETECTIVE!")?;
        writeln!(
            output,
            "Try to guess whether the mystery celebrity is from ENTERTAINMENT (0) or SPORTS (1)."
        )?;
        writeln!(output, "You may ask questions about: {}.", features.join(", "))?;
        writeln!(output, "{}", "-".repeat(60))?;
        Ok(())
    }

    fn read_guess<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Label, Box<dyn Error>> {
        loop {
            write!(output, "Your guess (0 = entertainment, 1 = sports): ")?;
            output.flush()?;
            let line = read_line(input)?.ok_or("Input ended before a guess was made.")?;
            match Label::parse_guess(&line) {
                Ok(label) => return Ok(label),
                Err(err) if self.params.reprompt_invalid_guess() => {
                    warn!(input = line.trim(), "rejected guess");
                    writeln!(output, "Invalid guess: {}. Please enter 0 or 1.", err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

fn write_reveal<W: Write>(reveal: &Reveal, output: &mut W) -> Result<(), Box<dyn Error>> {
    writeln!(output, "\nThe mystery celebrity was: ⭐ {} ⭐", reveal.name)?;
    if reveal.player_correct() {
        writeln!(output, "🟢 You guessed correctly!")?;
    } else {
        writeln!(output, "🔴 Wrong! Their true category was: {}", reveal.truth)?;
    }

    writeln!(
        output,
        "\n🤖 The stump used feature '{}' and predicted: {}",
        reveal.stump_feature, reveal.stump_prediction
    )?;
    if reveal.stump_correct() {
        writeln!(output, "👉 The stump also guessed correctly!")?;
    } else {
        writeln!(output, "👉 The stump guessed wrong this time!")?;
    }
    writeln!(output, "\nGame Over.\n")?;
    output.flush()?;
    Ok(())
}

/// Reads one line, returning `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, Box<dyn Error>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
