use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A clonable handle to a shared drop counter. Every handle increments the counter when dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }

    pub fn count(&self) -> usize {
        *self.0.borrow()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// Tracks whether an [`Observed`] value is alive. The flag is set on construction and cleared on
/// drop.
#[derive(Debug, Default, Clone)]
pub struct Observer(Rc<Cell<bool>>);

impl Observer {
    pub fn new() -> Observer {
        Observer::default()
    }

    pub fn alive(&self) -> bool {
        self.0.get()
    }

    pub fn spawn(&self) -> Observed {
        self.0.set(true);
        Observed(self.0.clone())
    }
}

#[derive(Debug)]
pub struct Observed(Rc<Cell<bool>>);

impl Drop for Observed {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// A shared, ordered record of lifecycle events.
#[derive(Debug, Default, Clone)]
pub struct Log(Rc<RefCell<Vec<String>>>);

impl Log {
    pub fn new() -> Log {
        Log::default()
    }

    pub fn push(&self, event: impl Into<String>) {
        self.0.borrow_mut().push(event.into());
    }

    pub fn take(&self) -> Vec<String> {
        self.0.take()
    }
}

/// A value that records its construction, clones and drop in a [`Log`] under a name.
#[derive(Debug)]
pub struct Logged {
    pub name: &'static str,
    log: Log,
}

impl Logged {
    pub fn new(name: &'static str, log: &Log) -> Logged {
        log.push(format!("new {name}"));
        Logged {
            name,
            log: log.clone(),
        }
    }
}

impl Clone for Logged {
    fn clone(&self) -> Self {
        self.log.push(format!("clone {}", self.name));
        Logged {
            name: self.name,
            log: self.log.clone(),
        }
    }
}

impl PartialEq for Logged {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Drop for Logged {
    fn drop(&mut self) {
        self.log.push(format!("drop {}", self.name));
    }
}
