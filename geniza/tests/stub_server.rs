//! End to end tests against a local stub server over real HTTP.

use geniza::{default_context, Config, Credential, ErrorKind, Geniza, Result};
use http::StatusCode;
use mockito::Matcher;
use pretty_assertions::assert_eq;
use serde_json::json;

fn init_geniza(server: &mockito::Server) -> Geniza {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = Config::new(Credential::new("123", "xyz"))
        .with_base_uri(format!("{}/v1", server.url()));
    Geniza::new(default_context(), config)
}

#[tokio::test]
async fn test_sapient_squirrel() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/sapientSquirrel")
        .match_header("content-type", "application/json")
        .match_header("accept", "application/json")
        .match_header(
            "authorization",
            "HMAC-SHA256 123:3fc4f2ab1d0ce78660d1be2c08d70ad8de2079379ae899f2e27b93655b2a1fd3",
        )
        .match_header("user-agent", Matcher::Regex(r"^Geniza\.ai-SDK-Rust/".into()))
        .match_body(r#"{"question":"1234567890"}"#)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"answer":"qwerty"}"#)
        .create_async()
        .await;

    let answer = init_geniza(&server)
        .ask_sapient_squirrel("1234567890")
        .await?;

    assert_eq!(answer, "qwerty");
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_stock_symbols() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/extractors/stockSymbols")
        .match_header(
            "authorization",
            Matcher::Regex(r"^HMAC-SHA256 123:[0-9a-f]{64}$".into()),
        )
        .match_body(Matcher::Json(json!({"text": "MSFT buys Macbooks"})))
        .with_status(200)
        .with_body(r#"[{"symbol":"MSFT","name":"Microsoft"}]"#)
        .create_async()
        .await;

    let resp = init_geniza(&server)
        .extract_stock_symbols("MSFT buys Macbooks")
        .await?;

    assert_eq!(resp, json!([{"symbol": "MSFT", "name": "Microsoft"}]));
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_invalid_rating_never_reaches_server() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/feedback")
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let err = init_geniza(&server)
        .provide_feedback("123", 1.5, "Fee fi fo fum")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/detectors/pii")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let err = init_geniza(&server)
        .detect_pii("Call me at 555-0100")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RemoteService);
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(err.response_body(), Some(&b"internal error"[..]));
    assert!(err.to_string().contains("500"), "{err}");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/detectors/language")
        .with_status(401)
        .with_body(r#"{"message":"bad signature"}"#)
        .create_async()
        .await;

    let err = init_geniza(&server)
        .detect_language("Bonjour")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RemoteService);
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn test_connection_refused() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let config = Config::new(Credential::new("123", "xyz"))
        .with_base_uri(format!("http://127.0.0.1:{port}/v1/"));
    let geniza = Geniza::new(default_context(), config);

    let err = geniza.detect_language("Bonjour").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.status().is_none());
}
