use std::{collections::HashSet, any::type_name, cell::RefCell, io, rc::Rc};

use log::error;

use super::game::Game;

///
/// Reusable bundle of game setup: components, hooks.
/// 
pub trait Plugin {
    fn build(&self, game: &mut Game);

    fn name(&self) -> &str {
        type_name::<Self>()
    }

    fn is_unique(&self) -> bool {
        true
    }
}

#[derive(Default)]
pub(crate) struct Plugins {
    names: HashSet<String>,
}

impl Plugins {
    pub(crate) fn add_name<P: Plugin>(&mut self, plugin: &P) {
        if plugin.is_unique() && !self.names.insert(plugin.name().to_string()) {
            panic!("Attemped to add duplicate plugin {}", plugin.name());
        }
    }

    pub(crate) fn contains_plugin<P: Plugin>(&self) -> bool {
        self.names.contains(type_name::<P>())
    }
}

///
/// Console lifecycle messages written around the run.
/// 
/// A failed write is logged, never raised, so a closed or full stdout
/// does not abort the game.
/// 
pub struct ConsolePlugin {
    out: Rc<RefCell<dyn io::Write>>,
}

impl ConsolePlugin {
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }

    pub fn with_output(out: impl io::Write + 'static) -> Self {
        Self {
            out: Rc::new(RefCell::new(out)),
        }
    }

    fn hook(&self, msg: &'static str) -> impl FnMut() + 'static {
        let out = Rc::clone(&self.out);

        move || {
            let mut out = out.borrow_mut();

            if let Err(err) = writeln!(out, "{}", msg).and_then(|_| out.flush()) {
                error!("console write failed: {}", err);
            }
        }
    }
}

impl Default for ConsolePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for ConsolePlugin {
    fn build(&self, game: &mut Game) {
        game.set_start(self.hook("Initialising game"))
            .set_end(self.hook("Terminating game"));
    }
}
