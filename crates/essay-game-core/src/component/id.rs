use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Hash, PartialOrd, Ord, Eq)]
pub struct ComponentId(usize);

///
/// Monotonic id allocator shared by every component variant.
/// 
/// The first allocated id is 1.
/// 
#[derive(Debug, Default)]
pub struct ComponentIds {
    last: usize,
}

impl ComponentId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ComponentIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ComponentId {
        self.last += 1;

        ComponentId(self.last)
    }

    /// Ensures every later id is greater than `id`.
    pub fn skip_past(&mut self, id: ComponentId) {
        self.last = self.last.max(id.0);
    }
}
