use std::{io, fmt};

use rand::RngCore;

use crate::error::Result;

use super::id::ComponentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tick(pub usize);

///
/// Per-tick state handed to each component's update.
/// 
pub struct UpdateContext<'a> {
    out: &'a mut dyn io::Write,
    rng: &'a mut dyn RngCore,
}

///
/// An updatable participant in the game loop.
/// 
pub trait Component: 'static {
    fn id(&self) -> ComponentId;

    fn update(&mut self, tick: Tick, ctx: &mut UpdateContext) -> Result<()>;
}

///
/// The plain component: reports its id and the tick.
/// 
#[derive(Debug)]
pub struct BaseComponent {
    id: ComponentId,
}

impl Tick {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'a> UpdateContext<'a> {
    pub fn new(out: &'a mut dyn io::Write, rng: &'a mut dyn RngCore) -> Self {
        Self {
            out,
            rng,
        }
    }

    pub fn out(&mut self) -> &mut dyn io::Write {
        &mut *self.out
    }

    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }
}

impl BaseComponent {
    pub fn new(id: ComponentId) -> Self {
        Self {
            id
        }
    }

    pub(crate) fn report(id: ComponentId, tick: Tick, ctx: &mut UpdateContext) -> Result<()> {
        writeln!(ctx.out(), "Component {} updated at time: {}", id, tick)?;

        Ok(())
    }
}

impl Component for BaseComponent {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn update(&mut self, tick: Tick, ctx: &mut UpdateContext) -> Result<()> {
        Self::report(self.id, tick, ctx)
    }
}
