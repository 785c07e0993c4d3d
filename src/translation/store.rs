/*!
 * Host-side store of translated messages.
 *
 * The pipeline never touches this store; it belongs to the surrounding host,
 * which caches one successful translation per message id and flips
 * `showing_original` when the user toggles between the original and the
 * translated view.
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::translation::core::TranslatedMessage;

/// Keyed store of translated messages with a visibility toggle
#[derive(Debug, Default)]
pub struct MessageStore {
    /// Internal storage keyed by message id
    messages: Arc<RwLock<HashMap<u64, TranslatedMessage>>>,
}

impl MessageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a translation for a message id, replacing any previous one
    pub fn insert(&self, message_id: u64, translation: TranslatedMessage) {
        let mut messages = self.messages.write();
        messages.insert(message_id, translation);

        debug!("Stored translation for message {}", message_id);
    }

    /// Retrieve a copy of the stored translation
    pub fn get(&self, message_id: u64) -> Option<TranslatedMessage> {
        self.messages.read().get(&message_id).cloned()
    }

    /// Flip the visibility toggle of a stored message, returning the new value
    pub fn toggle_original(&self, message_id: u64) -> Option<bool> {
        let mut messages = self.messages.write();
        messages.get_mut(&message_id).map(|entry| {
            entry.showing_original = !entry.showing_original;
            entry.showing_original
        })
    }

    /// Remove a stored translation
    pub fn remove(&self, message_id: u64) -> Option<TranslatedMessage> {
        self.messages.write().remove(&message_id)
    }

    /// Number of stored translations
    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    /// Whether the store holds nothing
    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }
}

impl Clone for MessageStore {
    fn clone(&self) -> Self {
        // Clones share the underlying storage, like the host sharing one
        // process-wide map across views.
        Self {
            messages: Arc::clone(&self.messages),
        }
    }
}
