//! Integration tests for the client over a mock HTTP server

use std::{collections::HashSet, time::Duration};

use fpl_client::{ClientConfig, FplClient, FplError, PlayerId, TeamId};
use serde_json::Value;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const BOOTSTRAP: &str = include_str!("fixtures/bootstrap-static.json");
const SUMMARY: &str = include_str!("fixtures/element-summary.json");
const ME: &str = include_str!("fixtures/me.json");

fn fixture(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap()
}

fn client_for(server: &MockServer) -> FplClient {
    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(5));
    FplClient::new(&config).unwrap()
}

async fn mount_bootstrap(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/bootstrap-static/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture(BOOTSTRAP)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_teams_and_players_share_one_bootstrap_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bootstrap-static/"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture(BOOTSTRAP)))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let teams = client.get_teams(None).await.unwrap();
    let team = client.get_team(TeamId::new(2)).await.unwrap();
    let player = client.get_player(PlayerId::new(31)).await.unwrap();

    assert_eq!(teams.len(), 3);
    assert_eq!(team.name, "Team 2");
    assert_eq!(player.web_name, "Player31");
    assert_eq!(player.team, TeamId::new(3));
}

#[tokio::test]
async fn test_team_filter_keeps_snapshot_order() {
    let server = MockServer::start().await;
    mount_bootstrap(&server).await;
    let client = client_for(&server);
    let wanted: HashSet<TeamId> = [TeamId::new(3), TeamId::new(1)].into_iter().collect();

    let teams = client.get_teams(Some(&wanted)).await.unwrap();

    let names: Vec<&str> = teams.iter().map(|t| t.short_name.as_str()).collect();
    assert_eq!(names, vec!["T01", "T03"]);
}

#[tokio::test]
async fn test_team_outside_range_is_rejected_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture(BOOTSTRAP)))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.get_team(TeamId::new(21)).await;

    assert!(matches!(result, Err(FplError::InvalidArgument { .. })));
}

#[tokio::test]
async fn test_team_missing_from_snapshot_is_not_found() {
    let server = MockServer::start().await;
    mount_bootstrap(&server).await;
    let client = client_for(&server);

    let result = client.get_team(TeamId::new(15)).await;

    assert!(matches!(
        result,
        Err(FplError::NotFound {
            entity: "team",
            id: 15
        })
    ));
}

#[tokio::test]
async fn test_force_refresh_requests_bootstrap_again() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bootstrap-static/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture(BOOTSTRAP)))
        .expect(2)
        .mount(&server)
        .await;
    let client = client_for(&server);

    client.get_snapshot(false).await.unwrap();
    client.get_snapshot(false).await.unwrap();
    client.refresh().await.unwrap();
}

#[tokio::test]
async fn test_bootstrap_server_error_is_data_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bootstrap-static/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client.get_teams(None).await.unwrap_err();

    assert!(matches!(error, FplError::DataFetch { .. }));
    assert!(error.to_string().contains("/api/bootstrap-static/"));
}

#[tokio::test]
async fn test_bootstrap_with_unknown_field_is_schema_error() {
    let server = MockServer::start().await;
    let mut body = fixture(BOOTSTRAP);
    body["teams"][0]["nickname"] = Value::from("The Ones");
    Mock::given(method("GET"))
        .and(path("/api/bootstrap-static/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client.get_teams(None).await.unwrap_err();

    assert!(matches!(error, FplError::Schema { .. }));
}

#[tokio::test]
async fn test_player_summaries_are_returned_in_request_order() {
    let server = MockServer::start().await;
    for (id, delay_ms) in [(11u32, 150u64), (12, 0), (21, 60)] {
        let mut body = fixture(SUMMARY);
        body["history"][0]["element"] = Value::from(id);
        Mock::given(method("GET"))
            .and(path(format!("/api/element-summary/{id}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .set_delay(Duration::from_millis(delay_ms)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }
    let client = client_for(&server);
    let ids = [PlayerId::new(11), PlayerId::new(12), PlayerId::new(21)];

    let summaries = client.get_player_summaries(&ids).await.unwrap();

    let elements: Vec<u32> = summaries
        .iter()
        .map(|s| s.history[0].element.as_u32())
        .collect();
    assert_eq!(elements, vec![11, 12, 21]);
}

#[tokio::test]
async fn test_player_summaries_report_failed_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/element-summary/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture(SUMMARY)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/element-summary/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client
        .get_player_summaries(&[PlayerId::new(11), PlayerId::new(999)])
        .await
        .unwrap_err();

    assert_eq!(error.failed_ids(), vec![999]);
}

#[tokio::test]
async fn test_single_player_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/element-summary/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture(SUMMARY)))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let summary = client.get_player_summary(PlayerId::new(11)).await.unwrap();

    assert_eq!(summary.season_minutes(), 90);
    assert_eq!(summary.history_past[0].season_name, "2022/23");
}

#[tokio::test]
async fn test_me_without_session_requires_authentication() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/me/"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client.get_user().await.unwrap_err();

    assert!(matches!(
        error,
        FplError::AuthenticationRequired { status: 403, .. }
    ));
}

#[tokio::test]
async fn test_me_json_is_returned_as_received() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/me/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture(ME)))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let raw = client.get_user_json().await.unwrap();
    let me = client.get_user().await.unwrap();

    assert_eq!(raw, fixture(ME));
    assert_eq!(me.player.first_name, "Alex");
}

#[tokio::test]
async fn test_closed_client_refuses_requests() {
    let server = MockServer::start().await;
    mount_bootstrap(&server).await;
    let client = client_for(&server);
    client.get_snapshot(false).await.unwrap();

    client.close().await;
    let error = client.get_teams(None).await.unwrap_err();

    assert!(error.is_data_fetch());
}
