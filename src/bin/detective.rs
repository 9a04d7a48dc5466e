use celebrity_detective::data::roster::Roster;
use celebrity_detective::game::params::GameParams;
use celebrity_detective::game::runner::Game;
use celebrity_detective::logging;
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {}", err);
    }

    let game = Game::new(Roster::celebrities(), GameParams::new())?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    game.play(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
