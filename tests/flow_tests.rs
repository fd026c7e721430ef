//! Flow tests for chat and code analysis.
//!
//! These run the controllers end to end against `MockCompletionClient`, so
//! every assertion about "no request" is checked against the recorded calls.

use std::sync::Arc;

use codereview::connector::api::controller::{
    AnalyzeController, ChatController, UNSUPPORTED_FILE, UPLOAD_HINT,
};
use codereview::{
    Container, DisplayResult, MockCompletionClient, UploadedFile, ANALYSIS_TEMPERATURE,
    CHAT_TEMPERATURE, TRUNCATION_MARKER,
};

fn setup(client: MockCompletionClient) -> (Arc<MockCompletionClient>, Container) {
    let client = Arc::new(client);
    let container = Container::with_client(client.clone());
    (client, container)
}

#[tokio::test]
async fn test_chat_returns_reply_verbatim() {
    let (client, container) = setup(MockCompletionClient::replying("Hello!"));

    let result = ChatController::new(&container).chat("hi").await;

    assert_eq!(result, DisplayResult::Markdown("Hello!".to_string()));
    assert_eq!(client.calls()[0].temperature, CHAT_TEMPERATURE);
}

#[tokio::test]
async fn test_chat_empty_input_makes_no_request() {
    let (client, container) = setup(MockCompletionClient::replying("unused"));
    let controller = ChatController::new(&container);

    assert!(controller.chat("").await.is_skipped());
    assert!(controller.chat("").await.is_skipped());
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_chat_keeps_markdown_markup() {
    let reply = "**Bold** and a list:\n- one\n- two\n\n```python\nprint(1)\n```";
    let (_client, container) = setup(MockCompletionClient::replying(reply));

    let result = ChatController::new(&container).chat("format something").await;
    assert_eq!(result.text(), reply);
}

#[tokio::test]
async fn test_remote_error_surfaces_status_and_body_in_both_flows() {
    let (client, container) = setup(MockCompletionClient::failing_with(500, "quota exceeded"));

    let chat = ChatController::new(&container).chat("hi").await;
    assert!(chat.is_error());
    assert!(chat.text().contains("500"));
    assert!(chat.text().contains("quota exceeded"));

    let analysis = AnalyzeController::new(&container)
        .analyze(Some(UploadedFile::new("a.py", "x = 1")), None)
        .await;
    assert!(analysis.is_error());
    assert!(analysis.text().contains("500"));
    assert!(analysis.text().contains("quota exceeded"));

    assert_eq!(client.call_count(), 2);
}

#[tokio::test]
async fn test_transport_error_is_displayed() {
    let (_client, container) = setup(MockCompletionClient::unreachable("connection refused"));

    let result = ChatController::new(&container).chat("hi").await;
    assert!(result.is_error());
    assert!(result.text().contains("connection refused"));
}

#[tokio::test]
async fn test_analysis_unsupported_extension_makes_no_request() {
    let (client, container) = setup(MockCompletionClient::replying("unused"));

    let result = AnalyzeController::new(&container)
        .analyze(Some(UploadedFile::new("x.txt", "hello")), None)
        .await;

    assert_eq!(result, DisplayResult::Error(UNSUPPORTED_FILE.to_string()));
    assert!(result.text().to_lowercase().contains("unsupported"));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_analysis_uppercase_extension_is_unsupported() {
    let (client, container) = setup(MockCompletionClient::replying("unused"));

    let result = AnalyzeController::new(&container)
        .analyze(Some(UploadedFile::new("B.JAVA", "class B {}")), None)
        .await;

    assert!(result.is_error());
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_analysis_invalid_utf8_makes_no_request() {
    let (client, container) = setup(MockCompletionClient::replying("unused"));

    let result = AnalyzeController::new(&container)
        .analyze(Some(UploadedFile::new("bad.py", vec![0xc3, 0x28, 0xff])), None)
        .await;

    assert!(result.is_error());
    assert!(result.text().starts_with("Decode error"));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_analysis_without_file_shows_upload_hint() {
    let (client, container) = setup(MockCompletionClient::replying("unused"));

    let result = AnalyzeController::new(&container).analyze(None, None).await;

    assert_eq!(result, DisplayResult::Info(UPLOAD_HINT.to_string()));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_analysis_reply_is_not_validated_as_json() {
    let (client, container) = setup(MockCompletionClient::replying("Looks fine, complexity 3."));

    let result = AnalyzeController::new(&container)
        .analyze(Some(UploadedFile::new("lib.cxx", "int f() { return 3; }")), None)
        .await;

    assert_eq!(result, DisplayResult::Markdown("Looks fine, complexity 3.".to_string()));
    assert_eq!(client.calls()[0].temperature, ANALYSIS_TEMPERATURE);
}

#[tokio::test]
async fn test_analysis_uses_edited_and_truncated_text() {
    let (client, container) = setup(MockCompletionClient::replying("ok"));
    let edited = "e".repeat(5000);

    AnalyzeController::new(&container)
        .analyze(
            Some(UploadedFile::new("main.py", "print('original')")),
            Some(edited),
        )
        .await;

    let prompt = client.calls()[0].conversation.messages()[1]
        .content()
        .to_string();
    assert!(!prompt.contains("original"));
    assert!(prompt.ends_with(&format!("{}{}", "e".repeat(4000), TRUNCATION_MARKER)));
}

#[tokio::test]
async fn test_each_trigger_is_an_independent_request() {
    let (client, container) = setup(MockCompletionClient::new());
    let controller = ChatController::new(&container);

    assert_eq!(controller.chat("first").await.text(), "first");
    assert_eq!(controller.chat("second").await.text(), "second");

    let calls = client.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].conversation.len(), 2);
    assert_eq!(calls[1].conversation.messages()[1].content(), "second");
}
