use essay_game::prelude::*;
use log::error;

///
/// Runs one game: a plain component and a moving component over
/// five ticks, with console start and end messages.
/// 
fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("game failed: {}", err);
    }
}

fn run() -> Result<()> {
    let mut game = Game::new();

    game.add_plugin(ConsolePlugin::new());

    game.spawn(BaseComponent::new)?;
    game.spawn(MovingComponent::new)?;

    game.run()
}
