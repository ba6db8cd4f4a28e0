mod component;
mod direction;
mod id;
mod moving;

pub use component::{
    Component, BaseComponent, Tick, UpdateContext,
};

pub use id::{
    ComponentId, ComponentIds,
};

pub use direction::Direction;

pub use moving::{
    MovingComponent, MAX_X, MAX_Y,
};
