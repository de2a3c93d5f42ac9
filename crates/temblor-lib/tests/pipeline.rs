//! Full-pipeline scenarios against a mock feed server.

use temblor_lib::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED_PATH: &str = "/fdsnws/event/1/query";

fn feature(mag: f64, time_ms: i64) -> String {
    format!(
        r#"{{"properties": {{"mag": {mag}, "place": "somewhere", "time": {time_ms}, "url": null}},
            "geometry": {{"coordinates": [10.0, 20.0, 5.0]}}}}"#
    )
}

fn body_with(features: &[String]) -> String {
    format!(
        r#"{{"type": "FeatureCollection", "features": [{}]}}"#,
        features.join(",")
    )
}

async fn fetch_ranked(
    server: &MockServer,
    query: &QuakeQuery,
) -> std::result::Result<Vec<Quake>, FetchError> {
    let config = ClientConfig {
        endpoint: format!("{}{FEED_PATH}", server.uri()),
        ..Default::default()
    };
    let client = FeedClient::new(config).unwrap();
    let window = query.window_ending(chrono::Utc::now());
    let collection = client.fetch(query, &window).await?;
    Ok(rank(
        collection.quakes().collect(),
        query.order,
        query.limit as usize,
    ))
}

#[tokio::test]
async fn test_seven_matches_yield_top_five_by_magnitude() {
    let server = MockServer::start().await;
    let features: Vec<_> = [4.6, 5.9, 4.8, 6.2, 5.1, 4.9, 5.5]
        .iter()
        .enumerate()
        .map(|(i, &mag)| feature(mag, 1_700_000_000_000 + i as i64 * 60_000))
        .collect();
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(body_with(&features), "application/json"),
        )
        .mount(&server)
        .await;

    let query = QuakeQuery::new(24, 4.5, 5, OrderBy::Magnitude).unwrap();
    let ranked = fetch_ranked(&server, &query).await.unwrap();

    assert_eq!(ranked.len(), 5);
    let mags: Vec<_> = ranked.iter().map(|q| q.magnitude.unwrap()).collect();
    assert_eq!(mags, vec![6.2, 5.9, 5.5, 5.1, 4.9]);
}

#[tokio::test]
async fn test_zero_matches_is_empty_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(body_with(&[]), "application/json"),
        )
        .mount(&server)
        .await;

    let query = QuakeQuery::default();
    let ranked = fetch_ranked(&server, &query).await.unwrap();

    // The empty list is the signal the presenter turns into its
    // no-match message; nothing here is an error.
    assert!(ranked.is_empty());
}

#[tokio::test]
async fn test_server_error_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let query = QuakeQuery::default();
    let err = fetch_ranked(&server, &query).await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 500, .. }));
}
