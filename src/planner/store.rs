use chrono::Local;

use super::event::Event;

/// In-memory ordered event collection for the active session. Insertion order
/// is the display order; nothing survives the process.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
    last_id: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh id, derived from the creation timestamp in milliseconds.
    /// Ids are strictly increasing, so they stay unique for the store's
    /// lifetime even when two events are created within the same millisecond
    /// or an event is deleted and another created.
    pub fn next_id(&mut self) -> String {
        let now = Local::now().timestamp_millis().max(0) as u64;
        self.last_id = now.max(self.last_id + 1);
        self.last_id.to_string()
    }

    /// Append an event. Validation already happened upstream; this never
    /// rejects.
    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Remove the event with the matching id. No-op if absent; relative order
    /// of the remaining events is preserved.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.events.iter().position(|e| e.id == id) {
            Some(idx) => {
                self.events.remove(idx);
                true
            }
            None => false,
        }
    }

    /// All events in insertion order.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(store: &mut EventStore, name: &str) -> Event {
        Event {
            id: store.next_id(),
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 6, 16).unwrap(),
            time: "18:30".to_string(),
            location: "Rooftop".to_string(),
            description: None,
            image: None,
        }
    }

    #[test]
    fn add_appends_in_order() {
        let mut store = EventStore::new();
        for name in ["a", "b", "c"] {
            let ev = event(&mut store, name);
            store.add(ev);
        }
        let names: Vec<_> = store.list().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut store = EventStore::new();
        let mut ids = Vec::new();
        for name in ["a", "b", "c"] {
            let ev = event(&mut store, name);
            ids.push(ev.id.clone());
            store.add(ev);
        }

        assert!(store.remove(&ids[1]));
        let names: Vec<_> = store.list().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn remove_of_unknown_id_is_a_noop() {
        let mut store = EventStore::new();
        let ev = event(&mut store, "a");
        store.add(ev);
        assert!(!store.remove("nope"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_are_unique_even_within_one_millisecond() {
        let mut store = EventStore::new();
        let ids: Vec<_> = (0..100).map(|_| store.next_id()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = EventStore::new();
        let ev = event(&mut store, "a");
        let old_id = ev.id.clone();
        store.add(ev);
        store.remove(&old_id);
        assert_ne!(store.next_id(), old_id);
    }
}
