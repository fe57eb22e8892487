//! Process-wide session table.
//!
//! One slot per session key, created on demand. The slot mutex is the
//! per-key critical section: every state-mutating command, including the
//! start-game replacement path, locks it before touching the slot, so a
//! /start can never race an in-flight action on the same key. Distinct
//! keys share nothing and proceed fully in parallel.
//!
//! Session state is memory-resident and dies with the process; slots are
//! never removed.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use whodis_types::game::SessionKey;

use crate::game::session::GameSession;

/// Per-key state: the current game (if any) and the namelist cursor.
///
/// The pagination cursor lives here rather than on the game so /namelist
/// works before any game has started; it pages the default roster in
/// that case.
#[derive(Debug, Default)]
pub struct SessionSlot {
    pub game: Option<GameSession>,
    pub name_page: usize,
}

/// Table mapping session keys to their slots.
#[derive(Default)]
pub struct SessionRegistry {
    slots: DashMap<SessionKey, Arc<Mutex<SessionSlot>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
        }
    }

    /// Slot for `key`, created empty if absent.
    pub fn slot(&self, key: SessionKey) -> Arc<Mutex<SessionSlot>> {
        self.slots.entry(key).or_default().value().clone()
    }

    /// Slot for `key` only if one already exists.
    pub fn get(&self, key: SessionKey) -> Option<Arc<Mutex<SessionSlot>>> {
        self.slots.get(&key).map(|entry| entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_does_not_create() {
        let registry = SessionRegistry::new();
        assert!(registry.get(SessionKey(1)).is_none());
    }

    #[tokio::test]
    async fn test_slot_creates_and_is_stable() {
        let registry = SessionRegistry::new();
        let a = registry.slot(SessionKey(1));
        let b = registry.slot(SessionKey(1));
        assert!(Arc::ptr_eq(&a, &b));
        assert!(registry.get(SessionKey(1)).is_some());
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let registry = SessionRegistry::new();
        let a = registry.slot(SessionKey(1));
        let b = registry.slot(SessionKey(2));
        assert!(!Arc::ptr_eq(&a, &b));

        // Holding one key's lock never blocks another key.
        let _guard = a.lock().await;
        let other = registry.slot(SessionKey(2));
        let guard_b = other.try_lock();
        assert!(guard_b.is_ok());
        drop(b);
    }

    #[tokio::test]
    async fn test_slot_starts_empty() {
        let registry = SessionRegistry::new();
        let slot = registry.slot(SessionKey(9));
        let guard = slot.lock().await;
        assert!(guard.game.is_none());
        assert_eq!(guard.name_page, 0);
    }
}
