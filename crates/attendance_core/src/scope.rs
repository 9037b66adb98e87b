//! Binds asynchronous work to the view that started it. A view owns a
//! [`Lifetime`] and hands [`Liveness`] tokens to its tasks; once the view ends,
//! late results are dropped instead of being applied.

use std::{cell::Cell, rc::Rc};

#[derive(Debug)]
pub struct Lifetime {
    alive: Rc<Cell<bool>>,
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifetime {
    #[must_use]
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    #[must_use]
    pub fn token(&self) -> Liveness {
        Liveness {
            alive: Rc::clone(&self.alive),
        }
    }

    pub fn end(&self) {
        self.alive.set(false);
    }
}

impl Drop for Lifetime {
    fn drop(&mut self) {
        self.end();
    }
}

#[derive(Clone, Debug)]
pub struct Liveness {
    alive: Rc<Cell<bool>>,
}

impl Liveness {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Runs `apply` only while the owning scope is alive.
    pub fn apply<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_alive() {
            apply(value);
            true
        } else {
            false
        }
    }
}
