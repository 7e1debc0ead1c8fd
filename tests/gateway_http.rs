mod common;

use common::free_port;
use common::mock_service::spawn_one_shot;
use entdesk::config::ServiceConfig;
use entdesk::entitlements::{EntitlementsGateway, GatewayError, HttpEntitlementsGateway};

fn service(base_url: String) -> ServiceConfig {
    ServiceConfig {
        base_url,
        api_token: None,
        connect_timeout_seconds: 2,
        request_timeout_seconds: 5,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn success_decodes_the_collection() {
    let (base_url, handle) = spawn_one_shot(
        "200 OK",
        "application/json",
        r#"[{"uuid":"u1","course_uuid":"c1","mode":"verified","id":42}]"#.to_string(),
    );
    let gateway = HttpEntitlementsGateway::new(&service(base_url)).unwrap();

    let items = gateway.fetch_entitlements("alice").await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].uuid.as_deref(), Some("u1"));
    assert_eq!(items[0].extra.get("id"), Some(&serde_json::Value::from(42)));

    let request = handle.join().unwrap();
    assert!(
        request.starts_with("GET /api/entitlements/v1/entitlements/?user=alice "),
        "unexpected request line: {}",
        request.lines().next().unwrap_or("")
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn bearer_token_is_attached_when_configured() {
    let (base_url, handle) = spawn_one_shot("200 OK", "application/json", "[]".to_string());
    let mut config = service(base_url);
    config.api_token = Some("support-token".to_string());
    let gateway = HttpEntitlementsGateway::new(&config).unwrap();

    gateway.fetch_entitlements("alice").await.unwrap();

    let request = handle.join().unwrap().to_lowercase();
    assert!(request.contains("authorization: bearer support-token"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn non_success_status_is_reported_as_status_error() {
    let (base_url, _handle) = spawn_one_shot(
        "404 Not Found",
        "application/json",
        r#"{"detail":"not found"}"#.to_string(),
    );
    let gateway = HttpEntitlementsGateway::new(&service(base_url)).unwrap();

    match gateway.fetch_entitlements("alice").await {
        Err(GatewayError::Status { code }) => assert_eq!(code, 404),
        other => panic!("Expected Status error, got {:?}", other.map(|v| v.len())),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn malformed_body_is_reported_as_decode_error() {
    let (base_url, _handle) =
        spawn_one_shot("200 OK", "text/html", "<html>maintenance</html>".to_string());
    let gateway = HttpEntitlementsGateway::new(&service(base_url)).unwrap();

    assert!(matches!(
        gateway.fetch_entitlements("alice").await,
        Err(GatewayError::Decode { .. })
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn refused_connection_is_reported_as_transport_error() {
    let base_url = format!("http://127.0.0.1:{}", free_port());
    let gateway = HttpEntitlementsGateway::new(&service(base_url)).unwrap();

    assert!(matches!(
        gateway.fetch_entitlements("alice").await,
        Err(GatewayError::Transport(_))
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn trailing_slash_in_base_url_is_tolerated() {
    let (base_url, handle) = spawn_one_shot("200 OK", "application/json", "[]".to_string());
    let gateway = HttpEntitlementsGateway::new(&service(format!("{}/", base_url))).unwrap();

    gateway.fetch_entitlements("alice").await.unwrap();

    let request = handle.join().unwrap();
    assert!(request.starts_with("GET /api/entitlements/v1/entitlements/?user=alice "));
}
