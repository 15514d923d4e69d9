//! DreamStore - the authoritative in-memory record collection.
//!
//! # Overview
//!
//! The store owns every journal entry for the running process. All reads and
//! all in-memory mutations happen on the caller's thread, so readers never
//! observe a torn update. Durability is handled by a dedicated save worker:
//! `upsert` enqueues a snapshot of the full collection over a channel and
//! returns immediately, and the worker writes snapshots to disk one at a
//! time, in order.
//!
//! The worker never touches the in-memory collection; it only ever sees the
//! snapshots it is handed, so no lock is shared between the mutation path and
//! the save path.
//!
//! # Failure Model
//!
//! A failed save is logged and not surfaced to the mutating call. The
//! in-memory state stays authoritative and the next `upsert` writes the full
//! state again, healing any one-off I/O failure.

use std::sync::mpsc;
use std::thread;

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};

use crate::persistence::backend::JournalBackend;
use crate::persistence::types::DreamEntry;

/// Message handed to the save worker.
enum SaveMsg {
    /// Write this snapshot of the full collection to disk.
    Persist(Vec<DreamEntry>),
    /// Acknowledge once every previously queued snapshot has been written.
    Flush(mpsc::Sender<()>),
}

/// In-memory record store backed by a single journal file.
///
/// Constructed once by the application's composition root and passed by
/// reference to presentation components.
pub struct DreamStore {
    entries: Vec<DreamEntry>,
    save_tx: mpsc::Sender<SaveMsg>,
    worker: thread::JoinHandle<()>,
}

impl DreamStore {
    /// Open the store: load the persisted collection and start the save
    /// worker.
    ///
    /// Loading happens before `open` returns, so every query issued
    /// afterwards sees the persisted data. A hard filesystem failure on load
    /// is logged and degrades to an empty collection; the store stays usable
    /// and the next save rewrites the file.
    pub fn open(backend: JournalBackend) -> Self {
        let entries = match backend.load() {
            Ok(entries) => entries,
            Err(err) => {
                log::error!("Failed to load journal, starting empty: {}", err);
                Vec::new()
            }
        };

        let (save_tx, save_rx) = mpsc::channel();
        let worker = thread::spawn(move || save_worker(backend, save_rx));

        Self {
            entries,
            save_tx,
            worker,
        }
    }

    /// Insert a new entry, or replace the existing entry with the same id in
    /// place.
    ///
    /// Always succeeds. The in-memory collection is updated synchronously and
    /// a snapshot is queued for the save worker; the write itself happens off
    /// this thread.
    pub fn upsert(&mut self, entry: DreamEntry) {
        match self.entries.iter().position(|e| e.id == entry.id) {
            Some(index) => self.entries[index] = entry,
            None => self.entries.push(entry),
        }

        if self
            .save_tx
            .send(SaveMsg::Persist(self.entries.clone()))
            .is_err()
        {
            log::error!("Save worker is gone, journal changes will not persist");
        }
    }

    /// All entries on the given local calendar day, most recent first.
    pub fn entries_on_day(&self, day: NaiveDate) -> Vec<DreamEntry> {
        let mut matches: Vec<DreamEntry> = self
            .entries
            .iter()
            .filter(|e| local_day(e.occurred_at) == day)
            .cloned()
            .collect();
        sort_descending(&mut matches);
        matches
    }

    /// Whether any entry falls on the given local calendar day.
    ///
    /// Cheaper than `entries_on_day`: stops at the first match.
    pub fn has_entry_on_day(&self, day: NaiveDate) -> bool {
        self.entries
            .iter()
            .any(|e| local_day(e.occurred_at) == day)
    }

    /// All entries within the calendar month containing `month`, most recent
    /// first.
    ///
    /// Uses the same local-day rule as `entries_on_day`, so an entry visible
    /// in a day query is always visible in its containing month query.
    pub fn entries_in_month(&self, month: NaiveDate) -> Vec<DreamEntry> {
        let mut matches: Vec<DreamEntry> = self
            .entries
            .iter()
            .filter(|e| in_same_month(local_day(e.occurred_at), month))
            .cloned()
            .collect();
        sort_descending(&mut matches);
        matches
    }

    /// Every entry, most recent first.
    pub fn all_entries(&self) -> Vec<DreamEntry> {
        let mut all = self.entries.clone();
        sort_descending(&mut all);
        all
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Block until every snapshot queued so far has been written to disk.
    ///
    /// The worker processes messages in order, so the acknowledgement implies
    /// all earlier snapshots are on disk.
    pub fn flush(&self) {
        let (ack_tx, ack_rx) = mpsc::channel();
        if self.save_tx.send(SaveMsg::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv();
        }
    }

    /// Flush pending writes and stop the save worker.
    pub fn close(self) {
        let DreamStore {
            save_tx, worker, ..
        } = self;
        drop(save_tx);
        if let Err(err) = worker.join() {
            log::error!("Save worker panicked: {:?}", err);
        }
    }
}

/// Single-consumer save loop: one snapshot written at a time, FIFO.
///
/// Exits when the store drops its sender.
fn save_worker(backend: JournalBackend, rx: mpsc::Receiver<SaveMsg>) {
    while let Ok(msg) = rx.recv() {
        match msg {
            SaveMsg::Persist(snapshot) => {
                if let Err(err) = backend.save(&snapshot) {
                    log::warn!("Failed to save journal: {}", err);
                }
            }
            SaveMsg::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
}

/// Local calendar day an instant falls on.
pub(crate) fn local_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

fn in_same_month(day: NaiveDate, month: NaiveDate) -> bool {
    day.year() == month.year() && day.month() == month.month()
}

/// Descending by timestamp; equal timestamps order by id so results are
/// deterministic.
fn sort_descending(entries: &mut [DreamEntry]) {
    entries.sort_by(|a, b| {
        b.occurred_at
            .cmp(&a.occurred_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;
    use uuid::Uuid;

    /// Entry pinned to a local wall-clock time, so day queries behave the
    /// same in any test timezone.
    fn entry_at(y: i32, m: u32, d: u32, h: u32, min: u32, text: &str, intensity: f64) -> DreamEntry {
        let occurred_at = Local
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
            .with_timezone(&Utc);
        DreamEntry {
            id: Uuid::new_v4(),
            occurred_at,
            text: text.to_string(),
            symbol: Some("Flying".to_string()),
            mood: Some("Joyful".to_string()),
            mood_intensity: intensity,
        }
    }

    fn open_store(dir: &std::path::Path) -> DreamStore {
        DreamStore::open(JournalBackend::new(dir))
    }

    #[test]
    fn fresh_store_is_empty() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());

        assert!(store.is_empty());
        assert!(store.all_entries().is_empty());
        assert!(!store.has_entry_on_day(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    }

    #[test]
    fn upsert_then_query_day() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());
        let entry = entry_at(2024, 3, 1, 10, 0, "flew over a city", 3.0);
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        store.upsert(entry.clone());

        let on_day = store.entries_on_day(day);
        assert_eq!(on_day, vec![entry]);
        assert!(store.has_entry_on_day(day));
        assert!(!store.has_entry_on_day(day.succ_opt().unwrap()));
    }

    #[test]
    fn upsert_replaces_by_id() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());
        let entry = entry_at(2024, 3, 1, 10, 0, "draft", 1.0);

        store.upsert(entry.clone());
        let edited = entry.edited("final text", Some("Water".to_string()), None, 2.0);
        store.upsert(edited.clone());

        let all = store.all_entries();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], edited);
    }

    #[test]
    fn upsert_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());
        let entry = entry_at(2024, 3, 1, 10, 0, "same entry", 2.0);

        store.upsert(entry.clone());
        store.upsert(entry.clone());

        assert_eq!(store.all_entries(), vec![entry]);
    }

    #[test]
    fn same_day_entries_are_descending() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());
        let morning = entry_at(2024, 3, 1, 7, 30, "first dream", 1.0);
        let night = entry_at(2024, 3, 1, 23, 15, "second dream", 3.0);
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        store.upsert(morning.clone());
        store.upsert(night.clone());

        assert_eq!(store.entries_on_day(day), vec![night, morning]);
    }

    #[test]
    fn equal_timestamps_order_deterministically() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());
        let mut a = entry_at(2024, 3, 1, 10, 0, "a", 1.0);
        let mut b = entry_at(2024, 3, 1, 10, 0, "b", 2.0);
        a.id = Uuid::from_u128(1);
        b.id = Uuid::from_u128(2);

        store.upsert(b.clone());
        store.upsert(a.clone());

        // Lower id first on a timestamp tie, regardless of insertion order.
        assert_eq!(store.all_entries(), vec![a, b]);
    }

    #[test]
    fn day_entries_appear_in_containing_month() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());
        store.upsert(entry_at(2024, 3, 1, 10, 0, "march first", 3.0));
        store.upsert(entry_at(2024, 3, 15, 9, 0, "march middle", 2.0));
        store.upsert(entry_at(2024, 4, 2, 8, 0, "april", 1.0));
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let in_month = store.entries_in_month(day);
        assert_eq!(in_month.len(), 2);
        for entry in store.entries_on_day(day) {
            assert!(in_month.contains(&entry));
        }
    }

    #[test]
    fn month_query_is_descending() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());
        let early = entry_at(2024, 3, 3, 8, 0, "early", 1.0);
        let late = entry_at(2024, 3, 20, 8, 0, "late", 2.0);
        store.upsert(early.clone());
        store.upsert(late.clone());

        let month = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(store.entries_in_month(month), vec![late, early]);
    }

    #[test]
    fn upsert_persists_through_worker() {
        let dir = tempdir().unwrap();
        let backend = JournalBackend::new(dir.path());
        let mut store = DreamStore::open(backend.clone());
        let entry = entry_at(2024, 3, 1, 10, 0, "durable", 3.0);

        store.upsert(entry.clone());
        store.flush();

        assert_eq!(backend.load().unwrap(), vec![entry]);
    }

    #[test]
    fn reopen_sees_persisted_entries() {
        let dir = tempdir().unwrap();
        let entry = entry_at(2024, 3, 1, 10, 0, "remembered", 3.0);

        let mut store = open_store(dir.path());
        store.upsert(entry.clone());
        store.close();

        let reopened = open_store(dir.path());
        assert_eq!(reopened.all_entries(), vec![entry]);
    }

    #[test]
    fn corrupt_journal_opens_empty() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("dreams.json"), b"]][[").unwrap();

        let store = open_store(dir.path());

        assert!(store.is_empty());
    }

    #[test]
    fn queued_saves_apply_in_order() {
        let dir = tempdir().unwrap();
        let backend = JournalBackend::new(dir.path());
        let mut store = DreamStore::open(backend.clone());

        for i in 0..10 {
            store.upsert(entry_at(2024, 3, 1, 10, i, &format!("dream {i}"), 2.0));
        }
        store.flush();

        // The last completed write holds the full ten-entry collection.
        assert_eq!(backend.load().unwrap().len(), 10);
    }
}
