//! A game shared between one writer and any number of readers.
//!
//! Mutations go through [`SharedGame::write`], which holds the state lock
//! for the whole operation and publishes a fresh snapshot afterwards if
//! anything changed. Readers only ever touch the published snapshot, so a
//! reader never observes a move half-applied and never blocks the writer
//! for longer than an `Arc` clone.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::snapshot::GameSnapshot;
use super::state::GameState;

/// Single-writer, many-reader wrapper around a [`GameState`].
#[derive(Debug)]
pub struct SharedGame {
    writer: Mutex<GameState>,
    published: Arc<RwLock<Arc<GameSnapshot>>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(state: GameState) -> Self {
        let snapshot = Arc::new(state.snapshot());
        Self {
            writer: Mutex::new(state),
            published: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Run `f` with exclusive access to the state.
    ///
    /// Writers are serialized. A new snapshot is published once `f`
    /// returns, if the state version moved.
    pub fn write<R>(&self, f: impl FnOnce(&mut GameState) -> R) -> R {
        let mut state = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let before = state.version();
        let result = f(&mut state);

        if state.version() != before {
            let snapshot = Arc::new(state.snapshot());
            *self.published.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
        }
        result
    }

    /// Most recently published snapshot.
    #[must_use]
    pub fn latest(&self) -> Arc<GameSnapshot> {
        read_published(&self.published)
    }

    /// Cloneable handle that can be sent to reader threads.
    #[must_use]
    pub fn reader(&self) -> SnapshotReader {
        SnapshotReader {
            published: Arc::clone(&self.published),
        }
    }
}

/// Read-only handle onto a [`SharedGame`]'s published snapshots.
#[derive(Clone, Debug)]
pub struct SnapshotReader {
    published: Arc<RwLock<Arc<GameSnapshot>>>,
}

impl SnapshotReader {
    #[must_use]
    pub fn latest(&self) -> Arc<GameSnapshot> {
        read_published(&self.published)
    }
}

fn read_published(published: &RwLock<Arc<GameSnapshot>>) -> Arc<GameSnapshot> {
    Arc::clone(&published.read().unwrap_or_else(PoisonError::into_inner))
}
