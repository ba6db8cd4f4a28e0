mod app;

pub use crate::app::*;

pub mod prelude {
    pub use crate::app::{
        Game, TICKS,
        Plugin, ConsolePlugin,
    };
}
