use std::{cell::Cell, rc::Rc};

/// Decides which of several overlapping fetches may commit its result.
///
/// Every call of [`FetchGuard::begin`] starts a new generation and
/// hands out a [`FetchTicket`] for it. Only the ticket of the latest
/// generation is current, so a response that arrives after a newer
/// fetch has been started is recognized as outdated, no matter in
/// which order the responses arrive.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    generation: Rc<Cell<u64>>,
}

#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
    current: Rc<Cell<u64>>,
}

impl FetchGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> FetchTicket {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        FetchTicket {
            generation,
            current: Rc::clone(&self.generation),
        }
    }

    /// Turn all outstanding tickets into outdated ones.
    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

impl FetchTicket {
    pub fn is_current(&self) -> bool {
        self.current.get() == self.generation
    }
}
