use anyhow::Result;
use log::{error, info};

use crate::app_config::Config;
use crate::language_utils;
use crate::translation::{MessageStore, TranslationService};

// @module: Application controller for chat message translation

/// Main application controller for markup-preserving translation
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Translation service
    service: TranslationService,

    // @field: Store of translated messages, keyed by input line number
    store: MessageStore,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let service = TranslationService::from_config(&config);

        Ok(Self {
            config,
            service,
            store: MessageStore::new(),
        })
    }

    /// Create a controller over an explicit service, for tests
    pub fn with_service(config: Config, service: TranslationService) -> Self {
        Self {
            config,
            service,
            store: MessageStore::new(),
        }
    }

    /// Access the message store, e.g. to inspect it after a run
    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// Translate a batch of chat messages, one per input line.
    ///
    /// Messages are numbered from 1 in input order and processed
    /// sequentially; the endpoint rate-limits aggressively, so no
    /// concurrency happens here. Successes land in the store under their
    /// message id, failures are rendered as `message (code)` lines in place
    /// of a translation. When `show_original` is set the stored records keep
    /// their initial visibility and the original text is rendered instead.
    pub async fn translate_messages(
        &self,
        messages: &[String],
        from: Option<&str>,
        to: Option<&str>,
        show_original: bool,
    ) -> Vec<String> {
        let source = from.unwrap_or(&self.config.source_language);
        let target = to.unwrap_or(&self.config.target_language);

        let mut rendered = Vec::with_capacity(messages.len());

        for (index, message) in messages.iter().enumerate() {
            let message_id = index as u64 + 1;

            match self
                .service
                .translate_message(message, Some(source), Some(target))
                .await
            {
                Ok(translation) => {
                    info!(
                        "Translated message {} ({} -> {})",
                        message_id, translation.source_language, translation.target_language
                    );
                    self.store.insert(message_id, translation);

                    if !show_original {
                        // Stored records start out showing the original;
                        // flip them so the default view is the translation.
                        self.store.toggle_original(message_id);
                    }

                    rendered.push(
                        self.render_message(message_id)
                            .unwrap_or_else(|| message.clone()),
                    );
                }
                Err(e) => {
                    error!("Failed to translate message {}: {} ({})", message_id, e.message, e.code);
                    rendered.push(format!("{} ({})", e.message, e.code));
                }
            }
        }

        rendered
    }

    /// Render one stored message honoring its visibility toggle
    pub fn render_message(&self, message_id: u64) -> Option<String> {
        let entry = self.store.get(message_id)?;

        if entry.showing_original {
            Some(entry.source_text)
        } else {
            Some(format!(
                "{} (translated: {} -> {})",
                entry.translated_text,
                language_utils::get_language_name(&entry.source_language),
                language_utils::get_language_name(&entry.target_language)
            ))
        }
    }
}
