/*!
 * End-to-end pipeline tests through the application controller
 */

use yacmt::app_config::Config;
use yacmt::app_controller::Controller;
use yacmt::providers::mock::MockProvider;

use crate::common::service_with_mock;

/// Controller over a mock provider with default configuration
fn controller_with_mock(provider: MockProvider) -> Controller {
    let config = Config::default();
    let service = service_with_mock(provider, &config.target_language);
    Controller::with_service(config, service)
}

#[tokio::test]
async fn test_translate_messages_withMixedBatch_shouldRenderInInputOrder() {
    let provider = MockProvider::working();
    let controller = controller_with_mock(provider.clone());

    let messages = vec![
        "Hello <@1>".to_string(),
        "plain prose".to_string(),
        "<@2>".to_string(),
    ];

    let rendered = controller
        .translate_messages(&messages, None, Some("fr"), false)
        .await;

    assert_eq!(rendered.len(), 3);
    assert!(rendered[0].contains("[fr]Hello "));
    assert!(rendered[0].contains("<@1>"));
    assert!(rendered[1].contains("[fr]plain prose"));
    // All-protected message is echoed without a provider call
    assert!(rendered[2].contains("<@2>"));
    assert_eq!(provider.request_count(), 2);
}

#[tokio::test]
async fn test_translate_messages_shouldStoreOneEntryPerMessage() {
    let controller = controller_with_mock(MockProvider::working());

    let messages = vec!["one".to_string(), "two".to_string()];
    controller
        .translate_messages(&messages, None, None, false)
        .await;

    let store = controller.store();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(1).unwrap().source_text, "one");
    assert_eq!(store.get(2).unwrap().source_text, "two");
}

#[tokio::test]
async fn test_translate_messages_defaultView_shouldAppendTranslatedSuffix() {
    let controller = controller_with_mock(MockProvider::working());

    let rendered = controller
        .translate_messages(&["Hello".to_string()], None, Some("fr"), false)
        .await;

    assert_eq!(rendered[0], "[fr]Hello (translated: English -> French)");
    // The stored record was flipped to show the translation
    assert!(!controller.store().get(1).unwrap().showing_original);
}

#[tokio::test]
async fn test_translate_messages_withShowOriginal_shouldRenderSourceText() {
    let controller = controller_with_mock(MockProvider::working());

    let rendered = controller
        .translate_messages(&["Hello **world**".to_string()], None, Some("fr"), true)
        .await;

    assert_eq!(rendered[0], "Hello **world**");
    assert!(controller.store().get(1).unwrap().showing_original);
}

#[tokio::test]
async fn test_translate_messages_withFailure_shouldRenderCodeAndKeepGoing() {
    let controller = controller_with_mock(MockProvider::failing(500));

    let rendered = controller
        .translate_messages(
            &["first".to_string(), "second".to_string()],
            None,
            None,
            false,
        )
        .await;

    assert_eq!(rendered.len(), 2);
    assert!(rendered[0].contains("(500)"));
    assert!(rendered[1].contains("(500)"));
    assert!(controller.store().is_empty());
}

#[tokio::test]
async fn test_translate_messages_withRateLimit_shouldSurface429() {
    let controller = controller_with_mock(MockProvider::rate_limited());

    let rendered = controller
        .translate_messages(&["Hello".to_string()], None, None, false)
        .await;

    assert!(rendered[0].contains("(429)"));
    assert!(rendered[0].contains("ratelimit"));
}

#[tokio::test]
async fn test_toggle_after_run_shouldSwitchRenderedView() {
    let controller = controller_with_mock(MockProvider::working());

    controller
        .translate_messages(&["Hello".to_string()], None, Some("fr"), false)
        .await;

    // Currently showing the translation; flip back to the original
    assert_eq!(controller.store().toggle_original(1), Some(true));
    assert_eq!(controller.render_message(1).unwrap(), "Hello");

    // And forward to the translation again
    assert_eq!(controller.store().toggle_original(1), Some(false));
    assert!(controller.render_message(1).unwrap().contains("[fr]Hello"));
}

#[tokio::test]
async fn test_render_message_withUnknownId_shouldReturnNone() {
    let controller = controller_with_mock(MockProvider::working());
    assert!(controller.render_message(99).is_none());
}
