use std::{any::type_name, io, time::{SystemTime, UNIX_EPOCH}};

use essay_game_core::{
    Component, ComponentId, ComponentIds,
    Tick, UpdateContext,
    Error, Result,
};
use log::{debug, trace};
use rand::{rngs::StdRng, RngCore, SeedableRng};

use super::plugin::{Plugin, Plugins};

/// Number of ticks in one `run`.
pub const TICKS: usize = 5;

pub type Hook = Box<dyn FnMut()>;

///
/// Owns the registered components and drives them through the tick loop.
/// 
pub struct Game {
    ids: ComponentIds,
    components: Vec<Box<dyn Component>>,

    start: Option<Hook>,
    end: Option<Hook>,

    out: Box<dyn io::Write>,
    rng: Box<dyn RngCore>,

    plugins: Plugins,
}

impl Game {
    pub fn new() -> Self {
        Game::default()
    }

    pub fn with_output(mut self, out: impl io::Write + 'static) -> Self {
        self.out = Box::new(out);

        self
    }

    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);

        self
    }

    //
    // Components
    //

    pub fn alloc_id(&mut self) -> ComponentId {
        self.ids.next_id()
    }

    ///
    /// Registers a component. Its id must be greater than every id
    /// already registered, so update order and id order agree.
    /// 
    pub fn add<C: Component>(&mut self, component: C) -> Result<ComponentId> {
        let id = component.id();

        if let Some(last) = self.components.last().map(|c| c.id()) {
            if id <= last {
                return Err(Error::new(&format!(
                    "component {} added after component {}", id, last
                )));
            }
        }

        debug!("add component {} ({})", id, type_name::<C>());

        self.ids.skip_past(id);
        self.components.push(Box::new(component));

        Ok(id)
    }

    pub fn spawn<C: Component>(
        &mut self, 
        fun: impl FnOnce(ComponentId) -> C
    ) -> Result<ComponentId> {
        let id = self.alloc_id();

        self.add(fun(id))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    //
    // Hooks
    //

    pub fn set_start(&mut self, fun: impl FnMut() + 'static) -> &mut Self {
        self.start = Some(Box::new(fun));

        self
    }

    pub fn set_end(&mut self, fun: impl FnMut() + 'static) -> &mut Self {
        self.end = Some(Box::new(fun));

        self
    }

    pub fn clear_start(&mut self) -> &mut Self {
        self.start = None;

        self
    }

    pub fn clear_end(&mut self) -> &mut Self {
        self.end = None;

        self
    }

    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    pub fn has_end(&self) -> bool {
        self.end.is_some()
    }

    //
    // Plugins
    //

    pub fn add_plugin<P: Plugin + 'static>(&mut self, plugin: P) -> &mut Self {
        self.plugins.add_name(&plugin);

        debug!("add plugin {}", plugin.name());
        plugin.build(self);

        self
    }

    pub fn contains_plugin<P: Plugin>(&self) -> bool {
        self.plugins.contains_plugin::<P>()
    }

    //
    // Run loop
    //

    pub fn run(&mut self) -> Result<()> {
        debug!("run {} ticks over {} components", TICKS, self.components.len());

        if let Some(start) = &mut self.start {
            start();
        }

        for tick in (0..TICKS).map(Tick) {
            trace!("tick {}", tick);

            let mut ctx = UpdateContext::new(self.out.as_mut(), self.rng.as_mut());

            for component in &mut self.components {
                component.update(tick, &mut ctx)?;
            }
        }

        self.out.flush()?;

        if let Some(end) = &mut self.end {
            end();
        }

        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            ids: ComponentIds::new(),
            components: Vec::new(),
            start: None,
            end: None,
            out: Box::new(io::stdout()),
            rng: Box::new(StdRng::seed_from_u64(seed)),
            plugins: Plugins::default(),
        }
    }
}
