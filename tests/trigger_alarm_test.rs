use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use valarm::errors::AppError;
use valarm::nvr::alarm_client::{AlarmClient, VIRTUAL_ALARM_XML};

const ALARM_PATH: &str = "/TriggerVirtualAlarm/17";
const USERNAME: &str = "admin";
const PASSWORD: &str = "my_password";

// The client under test is blocking, so every call gets moved off the async
// test runtime onto a blocking thread.
async fn send_alarm_post(
    server: &MockServer,
    endpoint: &'static str,
    username: &'static str,
    password: &'static str,
    body: &'static [u8],
) -> Result<String, AppError> {
    let addr = *server.address();
    tokio::task::spawn_blocking(move || {
        let client = AlarmClient::new();
        client.send_api_post(
            &addr.ip().to_string(),
            addr.port(),
            endpoint,
            username,
            password,
            body,
        )
    })
    .await
    .expect("blocking request task panicked")
}

#[tokio::test]
async fn returns_exact_server_body_on_200() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ALARM_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<response>alarm accepted</response>"))
        .mount(&server)
        .await;

    let result = send_alarm_post(&server, ALARM_PATH, USERNAME, PASSWORD, VIRTUAL_ALARM_XML.as_bytes()).await;

    assert_eq!(result.expect("expected success"), "<response>alarm accepted</response>");
}

#[tokio::test]
async fn non_200_status_is_failure_with_exact_status_and_body() {
    for (mock_status, mock_body) in [(401u16, "unauthorized"), (500u16, "internal error")] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ALARM_PATH))
            .respond_with(ResponseTemplate::new(mock_status).set_body_string(mock_body))
            .mount(&server)
            .await;

        let result =
            send_alarm_post(&server, ALARM_PATH, USERNAME, PASSWORD, VIRTUAL_ALARM_XML.as_bytes()).await;

        match result {
            Err(AppError::HttpStatus { status, body }) => {
                assert_eq!(status, mock_status);
                assert_eq!(body, mock_body);
            }
            other => panic!("expected HttpStatus error for {}, got {:?}", mock_status, other),
        }
    }
}

#[tokio::test]
async fn sends_basic_auth_header_for_configured_credentials() {
    let encoded = STANDARD.encode(format!("{}:{}", USERNAME, PASSWORD));
    // The header value really is the credentials, base64 round-trips back.
    assert_eq!(
        STANDARD.decode(&encoded).expect("header value decodes"),
        format!("{}:{}", USERNAME, PASSWORD).into_bytes()
    );

    let server = MockServer::start().await;
    let auth_value = format!("Basic {}", encoded);
    Mock::given(method("POST"))
        .and(path(ALARM_PATH))
        .and(header("Authorization", auth_value.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let result = send_alarm_post(&server, ALARM_PATH, USERNAME, PASSWORD, VIRTUAL_ALARM_XML.as_bytes()).await;

    // A missing or different Authorization header would not match the mock and
    // the server would answer 404 instead.
    assert_eq!(result.expect("auth header did not match"), "ok");
}

#[tokio::test]
async fn sends_fixed_header_set_with_payload_content_length() {
    let server = MockServer::start().await;
    let payload_len = VIRTUAL_ALARM_XML.len().to_string();
    Mock::given(method("POST"))
        .and(path(ALARM_PATH))
        .and(header("Content-Type", "application/xml"))
        .and(header("Accept", "application/xml"))
        .and(header("Connection", "close"))
        .and(header("Content-Length", payload_len.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let result = send_alarm_post(&server, ALARM_PATH, USERNAME, PASSWORD, VIRTUAL_ALARM_XML.as_bytes()).await;

    assert_eq!(result.expect("header set did not match"), "ok");
}

#[tokio::test]
async fn content_length_is_zero_for_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ALARM_PATH))
        .and(header("Content-Length", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let result = send_alarm_post(&server, ALARM_PATH, USERNAME, PASSWORD, b"").await;

    assert_eq!(result.expect("empty body content length did not match"), "ok");
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    // Bind to grab a local port the OS considers free, then drop the listener
    // so connecting to it is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let port = listener.local_addr().expect("probe listener addr").port();
    drop(listener);

    let result = tokio::task::spawn_blocking(move || {
        let client = AlarmClient::new();
        client.send_api_post(
            "127.0.0.1",
            port,
            ALARM_PATH,
            USERNAME,
            PASSWORD,
            VIRTUAL_ALARM_XML.as_bytes(),
        )
    })
    .await
    .expect("blocking request task panicked");

    match result {
        Err(AppError::Transport(_)) => {}
        other => panic!("expected Transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    for _ in 0..2 {
        let result =
            send_alarm_post(&server, ALARM_PATH, USERNAME, PASSWORD, VIRTUAL_ALARM_XML.as_bytes()).await;
        assert!(result.is_ok());
    }

    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].body, requests[1].body);
    assert_eq!(requests[0].body, VIRTUAL_ALARM_XML.as_bytes());
}
