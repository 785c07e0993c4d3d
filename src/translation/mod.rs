/*!
 * Markup-preserving translation of chat messages.
 *
 * This module contains the core functionality for translating chat messages
 * while keeping protected markup intact. It is split into several submodules:
 *
 * - `core`: the translation service and pipeline
 * - `reconstruct`: offset-ordered reassembly of translated output
 * - `store`: host-side store of translations with a visibility toggle
 */

// Re-export main types for easier usage
pub use self::core::{TranslatedMessage, TranslationService};
pub use self::reconstruct::reconstruct_message;
pub use self::store::MessageStore;

// Submodules
pub mod core;
pub mod reconstruct;
pub mod store;
