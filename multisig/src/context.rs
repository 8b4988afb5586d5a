//! Execution context handed to the keeper and to message handlers.

use atomone_store::KvStore;
use atomone_types::Timestamp;

/// An observability event: a kind plus ordered key/value attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub kind: String,
    pub attributes: Vec<(String, String)>,
}

impl Event {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.push((key.into(), value.to_string()));
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, Default)]
pub struct EventManager {
    events: Vec<Event>,
}

impl EventManager {
    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn emit_all(&mut self, events: impl IntoIterator<Item = Event>) {
        self.events.extend(events);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

/// The store, block time and event sink of one top-level request.
pub struct Context<'a> {
    store: &'a mut dyn KvStore,
    block_time: Timestamp,
    events: EventManager,
}

impl<'a> Context<'a> {
    pub fn new(store: &'a mut dyn KvStore, block_time: Timestamp) -> Self {
        Self {
            store,
            block_time,
            events: EventManager::default(),
        }
    }

    pub fn store(&self) -> &dyn KvStore {
        &*self.store
    }

    pub fn store_mut(&mut self) -> &mut dyn KvStore {
        &mut *self.store
    }

    pub fn block_time(&self) -> Timestamp {
        self.block_time
    }

    pub fn emit(&mut self, event: Event) {
        self.events.emit(event);
    }

    pub fn emit_all(&mut self, events: impl IntoIterator<Item = Event>) {
        self.events.emit_all(events);
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    /// Release the store borrow and keep the emitted events.
    pub fn into_events(self) -> Vec<Event> {
        self.events.into_events()
    }
}
