use log::trace;

use crate::error::Result;

use super::{
    component::{BaseComponent, Component, Tick, UpdateContext},
    direction::Direction,
    id::ComponentId,
};

pub const MAX_X: i32 = 80;
pub const MAX_Y: i32 = 20;

///
/// A component that walks one cell per tick inside the
/// `[0, MAX_X] x [0, MAX_Y]` field, turning after every step.
/// 
#[derive(Debug)]
pub struct MovingComponent {
    id: ComponentId,
    x: i32,
    y: i32,
    direction: Direction,
}

impl MovingComponent {
    pub fn new(id: ComponentId) -> Self {
        Self {
            id,
            x: 0,
            y: 0,
            direction: Direction::default(),
        }
    }

    pub fn with_position(mut self, x: i32, y: i32, direction: Direction) -> Self {
        self.x = x.clamp(0, MAX_X);
        self.y = y.clamp(0, MAX_Y);
        self.direction = direction;

        self
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn step(&mut self) {
        let (dx, dy) = self.direction.offset();

        self.x = (self.x + dx).clamp(0, MAX_X);
        self.y = (self.y + dy).clamp(0, MAX_Y);
    }

    pub fn draw(&self, ctx: &mut UpdateContext) -> Result<()> {
        writeln!(
            ctx.out(),
            "MovingComponent {} direction: {}, x: {}, y: {}",
            self.id, self.direction, self.x, self.y
        )?;

        Ok(())
    }

    pub fn change_direction(&mut self, ctx: &mut UpdateContext) {
        let next = self.direction.random_other(ctx.rng());

        trace!("component {} turns {} -> {}", self.id, self.direction, next);

        self.direction = next;
    }
}

impl Component for MovingComponent {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn update(&mut self, tick: Tick, ctx: &mut UpdateContext) -> Result<()> {
        BaseComponent::report(self.id, tick, ctx)?;
        self.step();
        self.draw(ctx)?;
        self.change_direction(ctx);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        component::{ComponentIds, Direction, Tick, UpdateContext, Component, BaseComponent},
        util::LineBuffer,
    };

    use super::{MovingComponent, MAX_X, MAX_Y};

    fn moving() -> MovingComponent {
        MovingComponent::new(ComponentIds::new().next_id())
    }

    #[test]
    fn starts_at_origin_facing_right() {
        let comp = moving();

        assert_eq!((comp.x(), comp.y()), (0, 0));
        assert_eq!(comp.direction(), Direction::Right);
    }

    #[test]
    fn step_moves_one_axis() {
        let cases = [
            (Direction::Up, (5, 4)),
            (Direction::Down, (5, 6)),
            (Direction::Left, (4, 5)),
            (Direction::Right, (6, 5)),
        ];

        for (dir, expect) in cases {
            let mut comp = moving().with_position(5, 5, dir);
            comp.step();

            assert_eq!((comp.x(), comp.y()), expect, "{:?}", dir);
        }
    }

    #[test]
    fn step_clamps_to_bounds() {
        let mut comp = moving().with_position(0, 0, Direction::Up);
        comp.step();
        assert_eq!((comp.x(), comp.y()), (0, 0));

        let mut comp = moving().with_position(0, 0, Direction::Left);
        comp.step();
        assert_eq!((comp.x(), comp.y()), (0, 0));

        let mut comp = moving().with_position(MAX_X, MAX_Y, Direction::Right);
        comp.step();
        assert_eq!((comp.x(), comp.y()), (MAX_X, MAX_Y));

        let mut comp = moving().with_position(MAX_X, MAX_Y, Direction::Down);
        comp.step();
        assert_eq!((comp.x(), comp.y()), (MAX_X, MAX_Y));
    }

    #[test]
    fn with_position_clamps() {
        let comp = moving().with_position(-3, 99, Direction::Left);

        assert_eq!((comp.x(), comp.y()), (0, MAX_Y));
    }

    #[test]
    fn update_writes_report_then_draw() {
        let mut ids = ComponentIds::new();
        let _base = BaseComponent::new(ids.next_id());
        let mut comp = MovingComponent::new(ids.next_id());

        let mut out = LineBuffer::new();
        let mut rng = StdRng::seed_from_u64(1);

        let mut ctx = UpdateContext::new(&mut out, &mut rng);
        comp.update(Tick(0), &mut ctx).unwrap();

        assert_eq!(out.take(), "Component 2 updated at time: 0, \
            MovingComponent 2 direction: Right, x: 1, y: 0");
        assert_ne!(comp.direction(), Direction::Right);
    }

    #[test]
    fn update_changes_exactly_one_axis_by_one() {
        let mut comp = moving().with_position(40, 10, Direction::Right);
        let mut out = LineBuffer::new();
        let mut rng = StdRng::seed_from_u64(99);

        for tick in 0..5 {
            let (x, y, dir) = (comp.x(), comp.y(), comp.direction());

            let mut ctx = UpdateContext::new(&mut out, &mut rng);
            comp.update(Tick(tick), &mut ctx).unwrap();

            let (dx, dy) = (comp.x() - x, comp.y() - y);
            assert_eq!(dx.abs() + dy.abs(), 1);
            match dir {
                Direction::Up | Direction::Down => assert_eq!(dx, 0),
                Direction::Left | Direction::Right => assert_eq!(dy, 0),
            }
            assert_ne!(comp.direction(), dir);
        }
    }

    #[test]
    fn long_walk_stays_in_bounds() {
        let mut comp = moving();
        let mut out = LineBuffer::new();
        let mut rng = StdRng::seed_from_u64(3);

        for tick in 0..10_000 {
            let mut ctx = UpdateContext::new(&mut out, &mut rng);
            comp.update(Tick(tick), &mut ctx).unwrap();

            assert!((0..=MAX_X).contains(&comp.x()));
            assert!((0..=MAX_Y).contains(&comp.y()));
        }
    }
}
