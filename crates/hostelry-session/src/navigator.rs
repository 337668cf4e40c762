use parking_lot::Mutex;

/// Redirect seam between the session provider and whatever owns the location.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;

    fn navigate(&self, path: &str);
}

/// Navigator that records history in memory.
#[derive(Debug)]
pub struct MemoryNavigator {
    history: Mutex<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: Mutex::new(vec![initial.into()]),
        }
    }

    /// Every location visited, starting with the initial one.
    pub fn history(&self) -> Vec<String> {
        self.history.lock().clone()
    }

    /// Number of redirects performed since construction.
    pub fn redirects(&self) -> usize {
        self.history.lock().len() - 1
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.history.lock().last().cloned().unwrap_or_default()
    }

    fn navigate(&self, path: &str) {
        tracing::debug!(to = path, "navigate");
        self.history.lock().push(path.to_string());
    }
}
