//! # Change Listeners
//!
//! Explicit "state changed" notification for the in-memory stores. A store owns a
//! `Listeners<Self>` and calls `notify` with a shared reference to itself after
//! every mutation, so a subscriber can run any query against the new state.
//!
//! Callbacks are plain `FnMut` boxes with no `Send` bound: a store holding them
//! cannot leave the thread that created it.

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback<S> = Box<dyn FnMut(&S)>;

pub struct Listeners<S> {
    next_id: u64,
    entries: Vec<(ListenerId, Callback<S>)>,
}

impl<S> Default for Listeners<S> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<S> Listeners<S> {
    /// Register a callback; it runs after every subsequent change
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&S) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every callback in subscription order
    pub fn notify(&mut self, subject: &S) {
        for (_, callback) in self.entries.iter_mut() {
            callback(subject);
        }
    }
}
