//! Identifier generation for cart items.

use std::cell::Cell;
use uuid::Uuid;

/// Supplies a unique id per call.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Hands out a fixed list of ids in order, then keeps repeating the last one.
///
/// Meant for tests and reproducible output. An empty list yields empty ids.
#[derive(Debug, Clone, Default)]
pub struct SequenceIds {
    ids: Vec<String>,
    next: Cell<usize>,
}

impl SequenceIds {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            next: Cell::new(0),
        }
    }
}

impl IdGenerator for SequenceIds {
    fn next_id(&self) -> String {
        let i = self.next.get();
        self.next.set(i + 1);
        self.ids
            .get(i)
            .or_else(|| self.ids.last())
            .cloned()
            .unwrap_or_default()
    }
}
