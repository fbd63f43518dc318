use assert_cmd::Command;
use mockito::Matcher;
use serde_json::json;

mod stubs;

/// One mock server stands in for both the vendor API and the catalog.
fn cmd_against(server_url: &str, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("trailcount").unwrap();
    cmd.env("VENDOR_API_URL", server_url)
        .env("CATALOG_API_URL", server_url)
        .env("CATALOG_APP_TOKEN", "token123")
        .env("CATALOG_USERNAME", "user")
        .env("CATALOG_PASSWORD", "pw")
        .env("READINGS_DATASET_ID", "abcd-1234")
        .env("DEVICES_DATASET_ID", "efgh-5678")
        .args(args);
    cmd
}

fn mock_devices(server: &mut mockito::Server, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/89")
        .match_query(Matcher::UrlEncoded("withNull".into(), "true".into()))
        .with_body(body)
        .expect(1)
        .create()
}

fn mock_counts(server: &mut mockito::Server, device_id: i64, body: &str) -> mockito::Mock {
    server
        .mock("GET", format!("/data/{device_id}").as_str())
        .match_query(Matcher::Any)
        .with_body(body)
        .expect(1)
        .create()
}

#[test]
fn sync_upserts_filtered_readings_and_device_metadata() {
    let mut server = mockito::Server::new();
    let m_devices = mock_devices(&mut server, stubs::vendor::DEVICE_LIST);
    let m_100 = mock_counts(&mut server, 100, stubs::vendor::COUNTS_100);
    let m_200 = mock_counts(&mut server, 200, stubs::vendor::COUNTS_200);

    // Device 100: the zero-count row is dropped, dates go to ISO midnight,
    // record ids keep the raw vendor date. Device 200 has no data, so only
    // one readings upsert happens.
    let m_readings = server
        .mock("POST", "/resource/abcd-1234.json")
        .match_header("x-app-token", "token123")
        .match_header("authorization", "Basic dXNlcjpwdw==")
        .match_body(Matcher::Json(json!([
            {
                "Date": "2022-06-01T00:00:00",
                "Count": 5,
                "Sensor ID": 100,
                "Sensor Name": "Elm St",
                "Record ID": "10001/06/2022"
            },
            {
                "Date": "2022-06-02T00:00:00",
                "Count": 3,
                "Sensor ID": 100,
                "Sensor Name": "Elm St",
                "Record ID": "10002/06/2022"
            }
        ])))
        .with_body("{}")
        .expect(1)
        .create();

    let m_metadata = server
        .mock("POST", "/resource/efgh-5678.json")
        .match_header("x-app-token", "token123")
        .match_body(Matcher::Json(json!([
            {
                "Sensor ID": 100,
                "Latitude": 30.2672,
                "Longitude": -97.7431,
                "Sensor Name": "Elm St"
            },
            {
                "Sensor ID": 200,
                "Latitude": 30.25,
                "Longitude": -97.74,
                "Sensor Name": "Lakeshore Trail"
            }
        ])))
        .with_body("{}")
        .expect(1)
        .create();

    cmd_against(
        &server.url(),
        &["sync", "--start", "2022-06-01", "--end", "2022-06-02"],
    )
    .assert()
    .success();

    m_devices.assert();
    m_100.assert();
    m_200.assert();
    m_readings.assert();
    m_metadata.assert();
}

#[test]
fn sync_with_empty_device_list_makes_no_upserts() {
    let mut server = mockito::Server::new();
    let m_devices = mock_devices(&mut server, stubs::vendor::EMPTY_DEVICE_LIST);
    let m_upserts = server
        .mock("POST", Matcher::Regex("^/resource/".to_string()))
        .expect(0)
        .create();

    cmd_against(
        &server.url(),
        &["sync", "--start", "2022-06-01", "--end", "2022-06-02"],
    )
    .assert()
    .success();

    m_devices.assert();
    m_upserts.assert();
}

#[test]
fn sync_fails_fast_when_catalog_config_is_missing() {
    let mut server = mockito::Server::new();
    let m_devices = server
        .mock("GET", "/89")
        .match_query(Matcher::Any)
        .with_body(stubs::vendor::DEVICE_LIST)
        .expect(0)
        .create();

    Command::cargo_bin("trailcount")
        .unwrap()
        .env("VENDOR_API_URL", server.url())
        .env_remove("CATALOG_API_URL")
        .arg("sync")
        .assert()
        .failure();

    m_devices.assert();
}
