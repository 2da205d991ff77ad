use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

/// Assigns the browser location. After a successful submission this is the
/// last thing a form does.
pub trait Navigator {
    fn assign(&mut self, url: &str);
}

/// Keeps every assigned location. Clones share the same history, so a
/// caller can keep one handle while the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn assign(&mut self, url: &str) {
        self.history.borrow_mut().push(url.to_string());
    }
}

/// Prints the target instead of loading it.
#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn assign(&mut self, url: &str) {
        info!(%url, "navigating");
        println!("Navigate: {}", url);
    }
}
