//! Unit tests for the HTTP transport

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn transport_for(server: &MockServer) -> HttpTransport {
    let config = ClientConfig::default().with_base_url(server.uri());
    HttpTransport::new(&config).unwrap()
}

#[cfg(test)]
mod http_transport_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_returns_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/element-summary/5"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fixtures": []})))
            .mount(&mock_server)
            .await;

        let transport = transport_for(&mock_server).await;
        let response = transport.get("/api/element-summary/5").await.unwrap();

        assert_eq!(response.status, 200);
        assert!(response.is_success());
        let body: Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(body, json!({"fixtures": []}));
    }

    #[tokio::test]
    async fn test_get_passes_non_success_status_through() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/me/"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let transport = transport_for(&mock_server).await;
        let response = transport.get("/api/me/").await.unwrap();

        assert_eq!(response.status, 403);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_closed_transport_rejects_requests() {
        let mock_server = MockServer::start().await;
        let transport = transport_for(&mock_server).await;

        transport.close().await;
        let result = transport.get("/api/bootstrap-static/").await;

        assert!(matches!(result, Err(TransportError::Closed)));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let config = ClientConfig::default().with_base_url("http://localhost:1234/");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:1234");
        assert_eq!(transport.url("/api/me/"), "http://localhost:1234/api/me/");
    }
}

#[cfg(test)]
mod get_json_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_json_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/entry/1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
            .mount(&mock_server)
            .await;

        let transport = transport_for(&mock_server).await;
        let value = get_json(&transport, "/api/entry/1/").await.unwrap();
        assert_eq!(value["id"], 1);
    }

    #[tokio::test]
    async fn test_get_json_unauthorized_maps_to_authentication_required() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/me/"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let transport = transport_for(&mock_server).await;
        let err = get_json(&transport, "/api/me/").await.unwrap_err();

        assert!(matches!(
            err,
            FplError::AuthenticationRequired { status: 401, .. }
        ));
        assert!(err.is_data_fetch());
    }

    #[tokio::test]
    async fn test_get_json_server_error_maps_to_data_fetch() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/bootstrap-static/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let transport = transport_for(&mock_server).await;
        let err = get_json(&transport, "/api/bootstrap-static/").await.unwrap_err();

        match err {
            FplError::DataFetch { source, .. } => assert_eq!(source.status(), Some(503)),
            other => panic!("Expected DataFetch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_json_invalid_body_is_schema_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/bootstrap-static/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let transport = transport_for(&mock_server).await;
        let err = get_json(&transport, "/api/bootstrap-static/").await.unwrap_err();

        assert!(matches!(err, FplError::Schema { .. }));
    }
}
