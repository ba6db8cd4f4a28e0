pub mod component;
pub mod error;
pub mod util;

pub use component::{
    Component, ComponentId, ComponentIds,
    BaseComponent, MovingComponent, Direction,
    Tick, UpdateContext,
};

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::component::{
        Component, ComponentId, ComponentIds,
        BaseComponent, MovingComponent, Direction,
        Tick, UpdateContext,
    };
    pub use crate::error::Result;
}
