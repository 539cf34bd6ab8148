//! API integration tests

use gearguard_server::{api::create_router, AppConfig, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

/// Start a server with an empty store on an ephemeral port
async fn spawn_server() -> String {
    let app = create_router(AppState::new(AppConfig::default()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{}/api", addr)
}

async fn post(client: &Client, url: String, body: Value) -> (StatusCode, Value) {
    let response = client
        .post(url)
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    (status, response.json().await.expect("Failed to parse response"))
}

async fn get(client: &Client, url: String) -> (StatusCode, Value) {
    let response = client.get(url).send().await.expect("Failed to send request");
    let status = response.status();
    (status, response.json().await.expect("Failed to parse response"))
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_server().await;
    let client = Client::new();

    let (status, body) = get(&client, format!("{}/health", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_equipment_lifecycle() {
    let base = spawn_server().await;
    let client = Client::new();

    let (status, created) = post(
        &client,
        format!("{}/equipment", base),
        json!({ "name": "CNC Mill", "category": "Machining", "teamId": "T1" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("No equipment ID").to_string();
    assert!(created["createdAt"].is_string());

    let (status, fetched) = get(&client, format!("{}/equipment/{}", base, id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let response = client
        .put(format!("{}/equipment/{}", base, id))
        .json(&json!({ "name": "CNC Mill 2" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["name"], "CNC Mill 2");
    assert_eq!(updated["category"], "Machining");

    let response = client
        .delete(format!("{}/equipment/{}", base, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Equipment deleted successfully");

    let (status, body) = get(&client, format!("{}/equipment/{}", base, id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Equipment not found");
}

#[tokio::test]
async fn test_missing_ids_return_404() {
    let base = spawn_server().await;
    let client = Client::new();

    let (status, body) = get(&client, format!("{}/teams/nope", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Team not found");

    let response = client
        .put(format!("{}/requests/nope", base))
        .json(&json!({ "stage": "Repaired" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .delete(format!("{}/equipment/nope", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/equipment", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_request_enrichment_and_board() {
    let base = spawn_server().await;
    let client = Client::new();

    let (_, team) = post(
        &client,
        format!("{}/teams", base),
        json!({ "name": "Pump crew", "members": ["Ada", "Lin"] }),
    )
    .await;
    let team_id = team["id"].as_str().expect("No team ID").to_string();

    let (_, pump) = post(
        &client,
        format!("{}/equipment", base),
        json!({ "name": "Feed Pump", "category": "Pump", "teamId": team_id }),
    )
    .await;
    let pump_id = pump["id"].as_str().expect("No equipment ID").to_string();

    let (status, request) = post(
        &client,
        format!("{}/requests", base),
        json!({ "subject": "Seal leak", "equipmentId": pump_id, "assignedTo": "lin" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(request["stage"], "New");
    assert_eq!(request["type"], "Corrective");
    assert_eq!(request["category"], "Pump");
    assert_eq!(request["teamId"], team_id.as_str());

    let (_, orphan) = post(
        &client,
        format!("{}/requests", base),
        json!({ "subject": "Strange noise", "equipmentId": "unknown", "stage": "In Progress" }),
    )
    .await;
    assert!(orphan.get("category").is_none());

    let (_, for_pump) = get(&client, format!("{}/equipment/{}/requests", base, pump_id)).await;
    assert_eq!(for_pump, json!([request]));

    let (_, board) = get(&client, format!("{}/board", base)).await;
    assert_eq!(board[0]["stage"], "New");
    assert_eq!(board[0]["cards"][0]["equipmentName"], "Feed Pump");
    assert_eq!(board[0]["cards"][0]["assigneeInitial"], "L");
    assert_eq!(board[1]["stage"], "In Progress");
    assert_eq!(board[1]["cards"][0]["equipmentName"], "Unknown Equipment");
}

#[tokio::test]
async fn test_stats_and_grouping_agree() {
    let base = spawn_server().await;
    let client = Client::new();

    for stage in ["New", "New", "In Progress", "Repaired", "Scrap", "Cancelled"] {
        let (status, _) = post(
            &client,
            format!("{}/requests", base),
            json!({ "subject": format!("{} job", stage), "stage": stage }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, groups) = get(&client, format!("{}/requests/by-stage", base)).await;
    assert_eq!(groups["New"].as_array().map(Vec::len), Some(2));
    assert_eq!(groups["In Progress"].as_array().map(Vec::len), Some(1));
    assert_eq!(groups["Repaired"].as_array().map(Vec::len), Some(1));
    assert_eq!(groups["Scrap"].as_array().map(Vec::len), Some(1));

    let (_, stats) = get(&client, format!("{}/stats", base)).await;
    assert_eq!(
        stats,
        json!({
            "totalEquipment": 0,
            "totalTeams": 0,
            "totalRequests": 6,
            "requestsByStage": { "new": 2, "inProgress": 1, "repaired": 1, "scrap": 1 }
        })
    );

    let (_, again) = get(&client, format!("{}/stats", base)).await;
    assert_eq!(again, stats);

    let (_, all) = get(&client, format!("{}/requests", base)).await;
    assert_eq!(all.as_array().map(Vec::len), Some(6));
}
