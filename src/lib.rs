pub use essay_game_core as core;
pub use essay_game_app as app;

pub mod prelude {
    pub use essay_game_core::prelude::*;
    pub use essay_game_app::prelude::*;
}
