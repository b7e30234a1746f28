use std::sync::Mutex;

/// Entities added to a repository but not yet committed.
pub(crate) struct Staged<T> {
    entities: Mutex<Vec<T>>,
}

impl<T> Default for Staged<T> {
    fn default() -> Self {
        Self {
            entities: Mutex::new(vec![]),
        }
    }
}

impl<T> Staged<T> {
    pub fn push(&self, entity: T) {
        self.lock().push(entity);
    }

    /// Removes and returns everything staged so far.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<T>> {
        // a poisoned lock still holds a consistent Vec
        self.entities
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
