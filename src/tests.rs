//! Integration tests for the Pokédex backend.
//!
//! Each fixture runs the real router against a fake PokéAPI served from an
//! ephemeral port, so no test touches the network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::config::Config;
use crate::db::{init_database, Repository};
use crate::{create_router, AppState};

/// (id, raw name, types, abilities) served by the fake API.
const FAKE_POKEMON: &[(u32, &str, &[&str], &[&str])] = &[
    (1, "bulbasaur", &["grass", "poison"], &["overgrow", "chlorophyll"]),
    (4, "charmander", &["fire"], &["blaze", "solar-power"]),
    (6, "charizard", &["fire", "flying"], &["blaze", "solar-power"]),
    (25, "pikachu", &["electric"], &["static", "lightning-rod"]),
    (37, "vulpix", &["fire"], &["flash-fire", "drought"]),
    (80, "slowbro", &["water", "psychic"], &["oblivious", "own-tempo"]),
    (10034, "charizard-mega-x", &["fire", "dragon"], &["tough-claws"]),
    (10103, "vulpix-alola", &["ice"], &["snow-cloak", "snow-warning"]),
];

/// Number of base species the fake list endpoint returns.
const FAKE_SPECIES_COUNT: usize = 6;

const SPRITE_BASE: &str = "https://sprites.test/pokemon";

#[derive(Clone)]
struct FakeApi {
    base: String,
    hits: Arc<Mutex<HashMap<String, usize>>>,
}

impl FakeApi {
    fn hits(&self, key: &str) -> usize {
        self.hits.lock().unwrap().get(key).copied().unwrap_or(0)
    }
}

fn pokemon_json(id: u32, name: &str, types: &[&str], abilities: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "height": 10,
        "weight": 100,
        "types": types.iter().enumerate().map(|(i, t)| json!({
            "slot": i + 1,
            "type": { "name": t, "url": "" }
        })).collect::<Vec<_>>(),
        "abilities": abilities.iter().enumerate().map(|(i, a)| json!({
            "slot": i + 1,
            "is_hidden": false,
            "ability": { "name": a, "url": "" }
        })).collect::<Vec<_>>(),
        "stats": [{ "base_stat": 50, "stat": { "name": "hp" } }],
        "moves": [],
        "sprites": {
            "front_default": format!("{}/{}.png", SPRITE_BASE, id),
            "other": {
                "official-artwork": {
                    "front_default": format!("{}/other/official-artwork/{}.png", SPRITE_BASE, id)
                },
                "home": {
                    "front_default": format!("{}/other/home/{}.png", SPRITE_BASE, id)
                }
            }
        }
    })
}

async fn fake_list(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let limit: usize = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(20);
    let results: Vec<Value> = FAKE_POKEMON[..FAKE_SPECIES_COUNT]
        .iter()
        .take(limit)
        .map(|(_, name, _, _)| json!({ "name": name, "url": "" }))
        .collect();
    Json(json!({ "count": FAKE_SPECIES_COUNT, "limit": limit, "results": results }))
}

async fn fake_pokemon(State(api): State<FakeApi>, Path(key): Path<String>) -> Response {
    *api.hits.lock().unwrap().entry(key.clone()).or_default() += 1;

    if key == "boom" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    match FAKE_POKEMON
        .iter()
        .find(|(id, name, _, _)| id.to_string() == key || *name == key)
    {
        Some((id, name, types, abilities)) => {
            Json(pokemon_json(*id, name, types, abilities)).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn fake_ability(Path(name): Path<String>) -> Json<Value> {
    Json(json!({
        "effect_entries": [
            { "short_effect": format!("Effect of {}.", name), "language": { "name": "en" } }
        ]
    }))
}

async fn fake_species(State(api): State<FakeApi>, Path(id): Path<u32>) -> Response {
    if id != 6 {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({
        "evolution_chain": { "url": format!("{}/api/v2/evolution-chain/2/", api.base) }
    }))
    .into_response()
}

async fn fake_chain() -> Json<Value> {
    Json(json!({
        "chain": {
            "species": { "name": "charmander" },
            "evolution_details": [],
            "evolves_to": [{
                "species": { "name": "charmeleon" },
                "evolution_details": [{ "min_level": 16, "trigger": { "name": "level-up" } }],
                "evolves_to": [{
                    "species": { "name": "charizard" },
                    "evolution_details": [{ "min_level": 36, "trigger": { "name": "level-up" } }],
                    "evolves_to": []
                }]
            }]
        }
    }))
}

async fn spawn_fake_api() -> FakeApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get addr");
    let api = FakeApi {
        base: format!("http://{}", addr),
        hits: Arc::new(Mutex::new(HashMap::new())),
    };

    let app = Router::new()
        .route("/api/v2/pokemon", get(fake_list))
        .route("/api/v2/pokemon/{key}", get(fake_pokemon))
        .route("/api/v2/ability/{name}", get(fake_ability))
        .route("/api/v2/pokemon-species/{id}", get(fake_species))
        .route("/api/v2/evolution-chain/{id}/", get(fake_chain))
        .with_state(api.clone());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    api
}

fn test_config(api_base: String, db_path: std::path::PathBuf) -> Config {
    Config {
        db_path,
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        api_base,
        sprite_base: SPRITE_BASE.to_string(),
        species_limit: 10,
        proxy_list_limit: 151,
        fetch_concurrency: 4,
        log_level: "warn".to_string(),
    }
}

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    fake: Option<FakeApi>,
    state: AppState,
    _temp_dir: TempDir,
}

impl TestFixture {
    /// Backend wired to the fake API with the catalog loaded.
    async fn new() -> Self {
        let fake = spawn_fake_api().await;
        let api_base = format!("{}/api/v2", fake.base);
        Self::start(api_base, Some(fake)).await
    }

    /// Backend whose upstream refuses every connection.
    async fn unreachable() -> Self {
        Self::start("http://127.0.0.1:9/api/v2".to_string(), None).await
    }

    async fn start(api_base: String, fake: Option<FakeApi>) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        let pool = init_database(&db_path).await.expect("Failed to init DB");
        let state = AppState::new(test_config(api_base, db_path), Repository::new(pool))
            .expect("Failed to build state");
        if fake.is_some() {
            state.catalog.load().await.expect("Failed to load catalog");
        }

        let app = create_router(state.clone());

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
            fake,
            state,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn fake(&self) -> &FakeApi {
        self.fake.as_ref().expect("fixture has no fake API")
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = StatusCode::from_u16(resp.status().as_u16()).unwrap();
        (status, resp.json().await.unwrap())
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let resp = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = StatusCode::from_u16(resp.status().as_u16()).unwrap();
        (status, resp.json().await.unwrap())
    }

    async fn view(&self, body: Value) -> Value {
        let (status, body) = self.post("/api/pokedex/view", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        body["data"].clone()
    }
}

fn entry_ids(data: &Value) -> Vec<u64> {
    data["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["speciesId"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_health_check_without_socket() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.sqlite");
    let pool = init_database(&db_path).await.unwrap();
    let state = AppState::new(
        test_config("http://127.0.0.1:9/api/v2".to_string(), db_path),
        Repository::new(pool),
    )
    .unwrap();

    let response = create_router(state)
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ==================== PROXY ====================

#[tokio::test]
async fn test_proxy_single_pokemon_is_lowercased() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/pokemon?q=Pikachu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "pikachu");
    assert_eq!(body["id"], 25);
    assert_eq!(fixture.fake().hits("pikachu"), 2); // catalog load + proxy
}

#[tokio::test]
async fn test_proxy_list_without_query() {
    let fixture = TestFixture::new().await;

    for path in ["/api/pokemon", "/api/pokemon?q="] {
        let (status, body) = fixture.get(path).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["limit"], 151);
        assert_eq!(body["results"].as_array().unwrap().len(), FAKE_SPECIES_COUNT);
    }
}

#[tokio::test]
async fn test_proxy_upstream_not_ok_is_not_found() {
    let fixture = TestFixture::new().await;

    for query in ["missingno", "boom"] {
        let (status, body) = fixture.get(&format!("/api/pokemon?q={}", query)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Pokémon not found" }));
    }
}

#[tokio::test]
async fn test_proxy_transport_failure_is_server_error() {
    let fixture = TestFixture::unreachable().await;

    let (status, body) = fixture.get("/api/pokemon?q=pikachu").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Something went wrong" }));
}

// ==================== LIST VIEW ====================

#[tokio::test]
async fn test_view_defaults_list_whole_catalog() {
    let fixture = TestFixture::new().await;

    let data = fixture.view(json!({})).await;
    assert_eq!(entry_ids(&data), vec![1, 4, 6, 25, 37, 80]);
    assert_eq!(data["total"], 6);
    assert_eq!(data["matched"], 6);

    let pikachu = &data["entries"][3];
    assert_eq!(pikachu["number"], "#0025");
    assert_eq!(pikachu["name"], "Pikachu");
    assert_eq!(
        pikachu["imageUrl"],
        format!("{}/other/home/25.png", SPRITE_BASE)
    );
}

#[tokio::test]
async fn test_view_search_and_filters() {
    let fixture = TestFixture::new().await;

    let data = fixture.view(json!({ "search": "25" })).await;
    assert_eq!(entry_ids(&data), vec![25]);

    let data = fixture
        .view(json!({ "selectedType": "fire", "generation": "Kanto" }))
        .await;
    assert_eq!(entry_ids(&data), vec![4, 6, 37]);

    let data = fixture.view(json!({ "search": "solar power" })).await;
    assert_eq!(entry_ids(&data), vec![4, 6]);

    let data = fixture.view(json!({ "search": "zzz" })).await;
    assert!(entry_ids(&data).is_empty());
    assert_eq!(data["total"], 6);
}

#[tokio::test]
async fn test_view_sort_orders() {
    let fixture = TestFixture::new().await;

    let data = fixture.view(json!({ "sort": "number-desc" })).await;
    assert_eq!(entry_ids(&data), vec![80, 37, 25, 6, 4, 1]);

    let data = fixture.view(json!({ "sort": "name-asc" })).await;
    assert_eq!(entry_ids(&data), vec![1, 6, 4, 25, 80, 37]);
}

#[tokio::test]
async fn test_view_resolves_active_variants() {
    let fixture = TestFixture::new().await;

    let data = fixture
        .view(json!({
            "imageStyle": "official",
            "selections": {
                "6": { "mega": "x", "shiny": true },
                "37": { "regional": "active" }
            }
        }))
        .await;

    let charizard = &data["entries"][2];
    assert_eq!(charizard["speciesId"], 6);
    assert_eq!(charizard["displayId"], 10034);
    assert_eq!(charizard["number"], "#0006");
    assert_eq!(charizard["name"], "Charizard (Mega X)");
    assert_eq!(charizard["types"], json!(["fire", "dragon"]));
    assert_eq!(
        charizard["imageUrl"],
        format!("{}/other/official-artwork/shiny/10034.png", SPRITE_BASE)
    );

    let vulpix = &data["entries"][4];
    assert_eq!(vulpix["name"], "Vulpix (Alolan)");
    assert_eq!(vulpix["types"], json!(["ice"]));
}

#[tokio::test]
async fn test_view_prefetches_variant_abilities() {
    let fixture = TestFixture::new().await;
    let body = json!({ "selections": { "37": { "regional": "active" } } });

    let mut abilities = Value::Null;
    for _ in 0..40 {
        let data = fixture.view(body.clone()).await;
        abilities = data["entries"][4]["abilities"].clone();
        if abilities == json!(["snow-cloak", "snow-warning"]) {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(25)).await;
    }
    assert_eq!(abilities, json!(["snow-cloak", "snow-warning"]));
    assert_eq!(fixture.fake().hits("10103"), 1);
}

#[tokio::test]
async fn test_filters_reflect_catalog() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/pokedex/filters").await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];

    let types: Vec<&str> = data["types"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        types,
        vec!["fire", "water", "grass", "electric", "flying", "psychic", "poison"]
    );
    assert_eq!(data["types"][0]["icon"], "/icons/fire.svg");
    assert_eq!(data["generations"].as_array().unwrap().len(), 9);
    assert_eq!(data["generations"][8]["last"], 1025);
    assert_eq!(data["sortOrders"][0]["value"], "number-asc");
    assert_eq!(data["imageStyles"][0]["value"], "home");
}

// ==================== SELECTION ====================

async fn toggle(fixture: &TestFixture, species_id: u32, selection: &Value, toggle: Value) -> Value {
    let (status, body) = fixture
        .post(
            "/api/selection/toggle",
            json!({ "speciesId": species_id, "selection": selection, "toggle": toggle }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    body["data"].clone()
}

#[tokio::test]
async fn test_toggle_mega_variants_are_exclusive() {
    let fixture = TestFixture::new().await;

    let x = toggle(&fixture, 6, &json!({}), json!({ "kind": "form", "slot": "mega", "key": "x" })).await;
    assert_eq!(x["selection"], json!({ "shiny": false, "mega": "x" }));
    assert_eq!(x["entry"]["displayId"], 10034);

    let y = toggle(&fixture, 6, &x["selection"], json!({ "kind": "form", "slot": "mega", "key": "y" })).await;
    assert_eq!(y["selection"]["mega"], "y");
    assert_eq!(y["entry"]["name"], "Charizard (Mega Y)");

    let off = toggle(&fixture, 6, &y["selection"], json!({ "kind": "form", "slot": "mega", "key": "y" })).await;
    assert_eq!(off["selection"], json!({ "shiny": false }));
    assert_eq!(off["entry"]["name"], "Charizard");
}

#[tokio::test]
async fn test_toggle_slowbro_clears_other_slot() {
    let fixture = TestFixture::new().await;

    let galar = toggle(
        &fixture,
        80,
        &json!({ "shiny": true }),
        json!({ "kind": "form", "slot": "regional", "key": "galar" }),
    )
    .await;
    assert_eq!(galar["selection"], json!({ "shiny": true, "regional": "galar" }));

    let mega = toggle(&fixture, 80, &galar["selection"], json!({ "kind": "form", "slot": "mega", "key": "mega" })).await;
    assert_eq!(mega["selection"], json!({ "shiny": true, "mega": "mega" }));
    assert_eq!(mega["entry"]["name"], "Slowbro (Mega)");
}

#[tokio::test]
async fn test_toggle_shiny_and_unknown_form() {
    let fixture = TestFixture::new().await;

    let shiny = toggle(&fixture, 25, &json!({}), json!({ "kind": "shiny" })).await;
    assert_eq!(shiny["selection"]["shiny"], true);
    assert_eq!(
        shiny["entry"]["imageUrl"],
        format!("{}/other/home/shiny/25.png", SPRITE_BASE)
    );

    let unchanged = toggle(
        &fixture,
        25,
        &shiny["selection"],
        json!({ "kind": "form", "slot": "mega", "key": "mega" }),
    )
    .await;
    assert_eq!(unchanged["selection"], shiny["selection"]);

    let (status, _) = fixture
        .post(
            "/api/selection/toggle",
            json!({ "speciesId": 9999, "toggle": { "kind": "shiny" } }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ==================== VARIANT ABILITIES ====================

#[tokio::test]
async fn test_variant_abilities_fetched_once_under_concurrency() {
    let fixture = TestFixture::new().await;

    let mut requests = tokio::task::JoinSet::new();
    for _ in 0..8 {
        let client = fixture.client.clone();
        let url = fixture.url("/api/variants/10034/abilities");
        requests.spawn(async move {
            let resp = client.get(url).send().await.unwrap();
            assert_eq!(resp.status(), 200);
            resp.json::<Value>().await.unwrap()
        });
    }

    while let Some(body) = requests.join_next().await {
        let body = body.unwrap();
        assert_eq!(body["data"]["abilities"], json!(["tough-claws"]));
        assert_eq!(body["data"]["known"], true);
    }
    assert_eq!(fixture.fake().hits("10034"), 1);
}

#[tokio::test]
async fn test_variant_lookup_failure_stores_sentinel() {
    let fixture = TestFixture::new().await;

    for _ in 0..2 {
        let (status, body) = fixture.get("/api/variants/10035/abilities").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["abilities"], json!(["unknown"]));
        assert_eq!(body["data"]["known"], false);
    }
    assert_eq!(fixture.fake().hits("10035"), 1);
}

#[tokio::test]
async fn test_variant_abilities_reject_non_variant_ids() {
    let fixture = TestFixture::new().await;

    for id in ["6", "77", "4000000000"] {
        let (status, body) = fixture
            .get(&format!("/api/variants/{}/abilities", id))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(fixture.fake().hits(id), 0);
    }

    let cached = fixture.state.abilities.snapshot().await;
    assert!(cached.is_empty());
}

// ==================== DETAIL ====================

#[tokio::test]
async fn test_detail_for_base_species() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/pokedex/6").await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["number"], "#0006");
    assert_eq!(data["pokemon"]["name"], "Charizard");
    assert_eq!(data["abilities"][1]["label"], "Solar Power");
    assert_eq!(data["abilities"][1]["description"], "Effect of solar-power.");

    let chain: Vec<&str> = data["evolutionChain"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(chain, vec!["charmander", "charmeleon", "charizard"]);
    assert_eq!(data["evolutionChain"][2]["minLevel"], 36);
    assert_eq!(data["evolutionChain"][2]["stage"], 3);
}

#[tokio::test]
async fn test_detail_for_active_variant() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/pokedex/6?mega=x&shiny=true").await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["speciesId"], 6);
    assert_eq!(data["number"], "#0006");
    assert_eq!(data["pokemon"]["id"], 10034);
    assert_eq!(data["pokemon"]["name"], "Charizard (Mega X)");
    assert_eq!(data["pokemon"]["types"], json!(["fire", "dragon"]));
    assert_eq!(data["abilities"][0]["name"], "tough-claws");
}

#[tokio::test]
async fn test_detail_missing_variant_names_the_form() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/pokedex/80?regional=galar").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"]["message"],
        "Slowbro (Galarian) data not found in PokéAPI."
    );

    let (status, body) = fixture.get("/api/pokedex/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_detail_without_evolution_chain() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/pokedex/25").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["evolutionChain"], json!([]));
}

// ==================== CATALOG ====================

#[tokio::test]
async fn test_catalog_info_and_refresh() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/catalog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 6);
    assert!(body["data"]["loadedAt"].is_string());

    let (status, body) = fixture.post("/api/catalog/refresh", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 6);
    assert_eq!(fixture.fake().hits("charizard"), 2);
}

#[tokio::test]
async fn test_failed_refresh_keeps_empty_catalog() {
    let fixture = TestFixture::unreachable().await;

    let (status, body) = fixture.post("/api/catalog/refresh", json!({})).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");

    let (_, body) = fixture.get("/api/catalog").await;
    assert_eq!(body["data"]["count"], 0);
    assert!(body["data"]["loadedAt"].is_null());

    let data = fixture.view(json!({})).await;
    assert_eq!(data["total"], 0);
}

// ==================== PREFERENCES ====================

#[tokio::test]
async fn test_dark_mode_round_trip() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/preferences/dark-mode").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["enabled"], false);

    let resp = fixture
        .client
        .put(fixture.url("/api/preferences/dark-mode"))
        .json(&json!({ "enabled": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let (_, body) = fixture.get("/api/preferences/dark-mode").await;
    assert_eq!(body["data"]["enabled"], true);
    assert!(body["data"]["updatedAt"].is_string());
}

#[tokio::test]
async fn test_dark_mode_rejects_malformed_body() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .put(fixture.url("/api/preferences/dark-mode"))
        .json(&json!({ "enabled": "yes" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (status, body) = fixture.get("/api/preferences/dark-mode").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["enabled"], false);
}
