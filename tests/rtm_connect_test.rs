//! Tests for the rtm.connect handshake against a mock HTTP server.

use qbot::{BotConfig, QbotError, SlackRtmTransport};

fn config_for(server: &mockito::ServerGuard) -> BotConfig {
    BotConfig {
        slack_token: "xoxb-test".to_string(),
        slack_api_url: server.url(),
        log_file: "logs/test.log".to_string(),
    }
}

/// **Test: a successful handshake yields the websocket url and the bot's
/// own identity.**
#[tokio::test]
async fn rtm_connect_parses_handshake() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/rtm.connect")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "ok": true,
                "url": "wss://example.invalid/websocket/1",
                "self": {"id": "U0QBOT", "name": "qbot"},
                "team": {"id": "T0"}
            }"#,
        )
        .create_async()
        .await;

    let transport = SlackRtmTransport::new(&config_for(&server));
    let payload = transport.rtm_connect().await.unwrap();

    assert!(payload.ok);
    assert_eq!(payload.url.as_deref(), Some("wss://example.invalid/websocket/1"));
    let me = payload.self_info.unwrap();
    assert_eq!(me.id, "U0QBOT");
    assert_eq!(me.name, "qbot");
    assert_eq!(payload.team.unwrap().id, "T0");

    mock.assert_async().await;
}

/// **Test: an `ok: false` response surfaces the Slack error code as a
/// transport error.**
#[tokio::test]
async fn rtm_connect_surfaces_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/rtm.connect")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": false, "error": "invalid_auth"}"#)
        .create_async()
        .await;

    let transport = SlackRtmTransport::new(&config_for(&server));
    let err = transport.rtm_connect().await.unwrap_err();

    match err {
        QbotError::Transport(detail) => assert!(detail.contains("invalid_auth")),
        other => panic!("expected transport error, got {:?}", other),
    }
}

/// **Test: a non-JSON body is reported as an invalid response, not a panic.**
#[tokio::test]
async fn rtm_connect_rejects_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/rtm.connect")
        .with_status(200)
        .with_body("<html>gateway error</html>")
        .create_async()
        .await;

    let transport = SlackRtmTransport::new(&config_for(&server));
    let err = transport.rtm_connect().await.unwrap_err();
    assert!(matches!(err, QbotError::Transport(_)));
}
