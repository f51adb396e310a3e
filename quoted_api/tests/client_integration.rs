use quoted_api::{
    Client, EpisodeQuery, Error, Interceptor, PagedQuery, QuoteQuery, RandomQuoteQuery,
    SeasonQuery, ShowQuery,
};
use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_shows_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("shows.json");

    Mock::given(method("GET"))
        .and(path("/shows"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let resp = client.get_shows(&ShowQuery::default()).await.unwrap();
    assert!(resp.has_more);
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].name, "Family Guy");
    assert_eq!(resp.data[0].quote_count, Some(42));
}

#[tokio::test]
async fn get_shows_sends_name_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shows"))
        .and(query_param("name", "Futurama"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("shows.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let query = ShowQuery::default().with_name("Futurama");
    assert!(client.get_shows(&query).await.is_ok());
}

#[tokio::test]
async fn get_seasons_uses_show_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/show/Futurama/seasons"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("seasons.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let resp = client
        .get_seasons(&SeasonQuery::new("Futurama").with_page(2))
        .await
        .unwrap();
    assert!(!resp.has_more);
    assert_eq!(resp.data[1].season_no, 6);
    assert_eq!(resp.data[1].season_name.as_deref(), Some("Season Six"));
}

#[tokio::test]
async fn get_episodes_uses_season_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/show/Futurama/season/6/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("episodes.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let resp = client
        .get_episodes(&EpisodeQuery::new("Futurama", 6))
        .await
        .unwrap();
    assert_eq!(resp.page, 2);
    assert_eq!(resp.data[0].episode_name.as_deref(), Some("In-A-Gadda-Da-Leela"));
    assert_eq!(resp.data[1].episode_name, None);
}

#[tokio::test]
async fn get_quotes_sends_snake_case_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/quotes"))
        .and(query_param("show_name", "Futurama"))
        .and(query_param("season_no", "6"))
        .and(query_param("episode_no", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("quotes.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let query = QuoteQuery::default()
        .with_show_name("Futurama")
        .with_season_no(6)
        .with_episode_no(2);
    let resp = client.get_quotes(&query).await.unwrap();
    let quote = &resp.data[0];
    assert_eq!(quote.show_name, "Futurama");
    assert_eq!(quote.parts.len(), 2);
    assert_eq!(quote.ordered_parts()[0].character_name, "Philip J. Fry");
}

#[tokio::test]
async fn get_random_quote_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/quote/random"))
        .and(query_param("character_name", "Peter Griffin"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("random_quote.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let query = RandomQuoteQuery::default().with_character_name("Peter Griffin");
    let quote = client.get_random_quote(&query).await.unwrap();
    assert_eq!(quote.episode_name.as_deref(), Some("Death Has a Shadow"));
    assert!(!quote.parts[0].quote_text.is_empty());
}

#[tokio::test]
async fn get_random_quote_rejects_season_without_show() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let query = RandomQuoteQuery::default().with_season_no(2);
    let result = client.get_random_quote(&query).await;
    assert!(matches!(result, Err(Error::InvalidQuery(_))));
}

#[tokio::test]
async fn error_payload_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/quote/random"))
        .respond_with(ResponseTemplate::new(400).set_body_string(load_fixture("error.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .get_random_quote(&RandomQuoteQuery::default())
        .await
        .unwrap_err();
    match &err {
        Error::HttpStatus { status, detail, .. } => {
            assert_eq!(*status, 400);
            let detail = detail.as_ref().unwrap();
            assert_eq!(detail.key.as_deref(), Some("quote_not_found"));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(err.message(), Some("Quote not found"));
}

#[tokio::test]
async fn server_error_without_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shows"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.get_shows(&ShowQuery::default()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::HttpStatus {
            status: 500,
            detail: None,
            ..
        }
    ));
}

#[tokio::test]
async fn malformed_json_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shows"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client.get_shows(&ShowQuery::default()).await;
    assert!(matches!(result, Err(Error::RequestFailed)));
}

struct Passthrough;

impl Interceptor for Passthrough {
    fn request(&self, params: Value) -> Value {
        params
    }
    fn response(&self, body: Value) -> Value {
        body
    }
    fn error(&self, body: Value) -> Value {
        body
    }
}

#[tokio::test]
async fn custom_interceptor_replaces_key_case_conversion() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/quotes"))
        .and(query_param("showName", "Futurama"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"page":1,"limit":10,"hasMore":false,"data":[]}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri())
        .unwrap()
        .with_interceptor(Passthrough);
    let query = QuoteQuery::default().with_show_name("Futurama");
    let resp = client.get_quotes(&query).await.unwrap();
    assert!(resp.data.is_empty());
}
