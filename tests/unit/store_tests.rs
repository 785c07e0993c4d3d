/*!
 * Tests for the host-side message store
 */

use yacmt::translation::{MessageStore, TranslatedMessage};

/// A stored translation for test purposes
fn sample_translation(text: &str) -> TranslatedMessage {
    TranslatedMessage {
        source_language: "en".to_string(),
        target_language: "fr".to_string(),
        source_text: text.to_string(),
        translated_text: format!("[fr]{}", text),
        showing_original: true,
    }
}

#[test]
fn test_insert_and_get_shouldRoundTrip() {
    let store = MessageStore::new();
    store.insert(42, sample_translation("hello"));

    let entry = store.get(42).unwrap();
    assert_eq!(entry.source_text, "hello");
    assert_eq!(entry.translated_text, "[fr]hello");
    assert!(store.get(7).is_none());
}

#[test]
fn test_insert_withSameId_shouldReplacePrevious() {
    let store = MessageStore::new();
    store.insert(1, sample_translation("first"));
    store.insert(1, sample_translation("second"));

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(1).unwrap().source_text, "second");
}

#[test]
fn test_toggle_original_shouldFlipAndReturnNewValue() {
    let store = MessageStore::new();
    store.insert(1, sample_translation("hello"));

    assert_eq!(store.toggle_original(1), Some(false));
    assert!(!store.get(1).unwrap().showing_original);

    assert_eq!(store.toggle_original(1), Some(true));
    assert!(store.get(1).unwrap().showing_original);
}

#[test]
fn test_toggle_original_withUnknownId_shouldReturnNone() {
    let store = MessageStore::new();
    assert_eq!(store.toggle_original(99), None);
}

#[test]
fn test_remove_shouldReturnStoredEntry() {
    let store = MessageStore::new();
    store.insert(1, sample_translation("bye"));

    let removed = store.remove(1).unwrap();
    assert_eq!(removed.source_text, "bye");
    assert!(store.is_empty());
    assert!(store.remove(1).is_none());
}

#[test]
fn test_clonedStore_shouldShareStorage() {
    let store = MessageStore::new();
    let cloned = store.clone();

    cloned.insert(5, sample_translation("shared"));
    assert_eq!(store.len(), 1);

    store.toggle_original(5);
    assert!(!cloned.get(5).unwrap().showing_original);
}
