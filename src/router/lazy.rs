use std::cell::{Cell, OnceCell};

/// Content built on first access and reused afterwards
pub struct LazyView<T> {
    cell: OnceCell<T>,
    loads: Cell<usize>,
}

impl<T> LazyView<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
            loads: Cell::new(0),
        }
    }

    /// Return the loaded content, running `load` only on the first call
    pub fn get_or_load(&self, load: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(|| {
            self.loads.set(self.loads.get() + 1);
            load()
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// How many times the loader ran
    pub fn load_count(&self) -> usize {
        self.loads.get()
    }
}

impl<T> Default for LazyView<T> {
    fn default() -> Self {
        Self::new()
    }
}
