mod game;
mod plugin;

pub use game::{
    Game, Hook, TICKS,
};

pub use plugin::{
    Plugin, ConsolePlugin,
};
