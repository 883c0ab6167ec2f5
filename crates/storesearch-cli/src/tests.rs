use std::collections::HashMap;
use std::path::Path;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn lookup_from_map(
    map: HashMap<&'static str, String>,
) -> impl Fn(&str) -> Result<String, VarError> {
    move |key| map.get(key).cloned().ok_or(VarError::NotPresent)
}

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("storesearch-cli-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn cli_for(output_dir: &Path) -> Cli {
    Cli {
        store_name: "Muji".to_string(),
        city_name: "Taipei".to_string(),
        language: "en".to_string(),
        output_dir: output_dir.to_path_buf(),
        _extra: Vec::new(),
    }
}

fn env_for(server: &MockServer) -> HashMap<&'static str, String> {
    HashMap::from([
        ("GOOGLE_KEY", "test-key".to_string()),
        ("STORESEARCH_PLACES_BASE_URL", server.uri()),
        ("STORESEARCH_PAGE_TOKEN_DELAY_MS", "0".to_string()),
        ("STORESEARCH_REQUEST_TIMEOUT_SECS", "5".to_string()),
    ])
}

// ---------------------------------------------------------------------------
// argument parsing
// ---------------------------------------------------------------------------

#[test]
fn parses_three_positionals() {
    let cli = Cli::try_parse_from(["storesearch", "Muji", "Taipei", "zh-TW"])
        .expect("expected valid cli args");
    assert_eq!(cli.store_name, "Muji");
    assert_eq!(cli.city_name, "Taipei");
    assert_eq!(cli.language, "zh-TW");
}

#[test]
fn missing_language_is_usage_error() {
    let err = Cli::try_parse_from(["storesearch", "Muji", "Taipei"]).unwrap_err();
    assert_eq!(
        err.kind(),
        clap::error::ErrorKind::MissingRequiredArgument
    );
}

#[test]
fn arguments_after_language_are_ignored() {
    let cli = Cli::try_parse_from(["storesearch", "Muji", "Taipei", "en", "extra", "more"])
        .expect("trailing arguments should be accepted");
    assert_eq!(cli.store_name, "Muji");
    assert_eq!(cli.city_name, "Taipei");
    assert_eq!(cli.language, "en");
    assert_eq!(cli.output_dir, PathBuf::from("."));
}

#[test]
fn no_arguments_is_usage_error() {
    assert!(Cli::try_parse_from(["storesearch"]).is_err());
}

#[test]
fn output_dir_flag_is_parsed() {
    let cli = Cli::try_parse_from([
        "storesearch",
        "Muji",
        "Taipei",
        "en",
        "--output-dir",
        "/tmp/exports",
    ])
    .unwrap();
    assert_eq!(cli.output_dir, PathBuf::from("/tmp/exports"));
}

// ---------------------------------------------------------------------------
// end to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn writes_one_object_per_place_with_mocked_values() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("query", "Muji in Taipei"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [{ "place_id": "place-1" }, { "place_id": "place-2" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "place-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": {
                "place_id": "place-1",
                "name": "Muji Xinyi",
                "geometry": { "location": { "lat": 25.0408, "lng": 121.5677 } },
                "international_phone_number": "+886 2 2722 0000",
                "formatted_address": "No. 11, Songgao Rd, Xinyi District, Taipei City, Taiwan 110",
                "opening_hours": {
                    "periods": [
                        { "open": { "day": 0, "time": "1100" }, "close": { "day": 0, "time": "2130" } },
                        { "open": { "day": 3, "time": "1100" }, "close": { "day": 3, "time": "2200" } }
                    ]
                },
                "address_components": [
                    { "long_name": "Xinyi District", "short_name": "Xinyi District", "types": ["administrative_area_level_2", "political"] },
                    { "long_name": "Taipei City", "short_name": "Taipei City", "types": ["administrative_area_level_1", "political"] },
                    { "long_name": "Taipei", "short_name": "Taipei", "types": ["locality", "political"] },
                    { "long_name": "Taiwan", "short_name": "TW", "types": ["country", "political"] }
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "place-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": {
                "place_id": "place-2",
                "name": "Muji Zhongshan",
                "geometry": { "location": { "lat": 25.0527, "lng": 121.5203 } },
                "formatted_address": "Zhongshan District, Taipei City, Taiwan"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = scratch_dir();
    let path = execute(&cli_for(&dir), lookup_from_map(env_for(&server)))
        .await
        .expect("export should succeed");

    assert_eq!(path, dir.join("Muji_in_Taipei.json"));
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    let stores = written.as_array().expect("top level must be an array");
    assert_eq!(stores.len(), 2);

    assert_eq!(
        stores[0],
        json!({
            "google_place_id": "place-1",
            "name": "Muji Xinyi",
            "latitude": 25.0408,
            "longitude": 121.5677,
            "phone": "+886 2 2722 0000",
            "address": "No. 11, Songgao Rd, Xinyi District, Taipei City, Taiwan 110",
            "country": "TW",
            "state": "Taipei City",
            "city": "Taipei",
            "available_time": {
                "3": ["1100", "2200"],
                "7": ["1100", "2130"]
            }
        })
    );

    assert_eq!(stores[1]["google_place_id"], "place-2");
    assert_eq!(stores[1]["name"], "Muji Zhongshan");
    assert_eq!(stores[1]["phone"], "");
    assert_eq!(stores[1]["country"], "");
    assert!(stores[1].get("available_time").is_none());

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn missing_credential_fails_without_output_file() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut env = env_for(&server);
    env.remove("GOOGLE_KEY");

    let dir = scratch_dir();
    let err = execute(&cli_for(&dir), lookup_from_map(env))
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("GOOGLE_KEY"), "got: {err:#}");
    assert!(!dir.join("Muji_in_Taipei.json").exists());

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn invalid_log_level_fails_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut env = env_for(&server);
    env.insert("STORESEARCH_LOG_LEVEL", "storesearch=loud".to_string());

    let dir = scratch_dir();
    let err = execute(&cli_for(&dir), lookup_from_map(env))
        .await
        .unwrap_err();

    assert!(
        format!("{err:#}").contains("STORESEARCH_LOG_LEVEL"),
        "got: {err:#}"
    );
    assert!(!dir.join("Muji_in_Taipei.json").exists());

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn upstream_failure_leaves_no_output_file() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [{ "place_id": "place-1" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = scratch_dir();
    let result = execute(&cli_for(&dir), lookup_from_map(env_for(&server))).await;

    assert!(result.is_err(), "expected failure, got: {result:?}");
    assert!(!dir.join("Muji_in_Taipei.json").exists());

    std::fs::remove_dir_all(&dir).ok();
}
