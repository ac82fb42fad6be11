//! Integration tests for HttpApi and the controller using wiremock.

use serde_json::json;
use stylemate_core::{
    ApiError, Category, CategoryContent, FormInput, HealthCheck, HttpApi, RecommendationController,
    StyleApi, UiState,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> HttpApi {
    HttpApi::new(&format!("{}/api", server.uri())).unwrap()
}

fn form() -> FormInput {
    FormInput {
        location: "Yogyakarta".to_string(),
        gender: "Women".to_string(),
        theme: "Ethnic".to_string(),
        color: "Red".to_string(),
    }
}

fn test_item(name: &str, link: Option<&str>) -> serde_json::Value {
    let mut item = json!({
        "productDisplayName": name,
        "baseColour": "Red",
        "season": "Summer",
        "usage": "Ethnic"
    });
    if let Some(link) = link {
        item["link"] = json!(link);
    }
    item
}

#[tokio::test]
async fn test_health_reports_model_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "model_loaded": true
        })))
        .mount(&mock_server)
        .await;

    let status = api_for(&mock_server).health().await.unwrap();
    assert!(status.model_loaded);
}

#[tokio::test]
async fn test_weather_sends_location_and_decodes_flat_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/weather"))
        .and(body_json(json!({ "location": "Yogyakarta" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "temperature": 28.7,
            "description": "cerah berawan",
            "location": "Yogyakarta",
            "season": "Summer"
        })))
        .mount(&mock_server)
        .await;

    let info = api_for(&mock_server).weather("Yogyakarta").await.unwrap();

    assert_eq!(info.location, "Yogyakarta");
    assert_eq!(info.rounded_temperature(), Some(29));
}

#[tokio::test]
async fn test_weather_unsuccessful_is_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "City not found"
        })))
        .mount(&mock_server)
        .await;

    let err = api_for(&mock_server).weather("Atlantis").await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected { message: Some(ref m) } if m == "City not found"));
}

#[tokio::test]
async fn test_recommend_posts_form_with_server_field_names() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .and(body_json(json!({
            "location": "Yogyakarta",
            "gender": "Women",
            "tema": "Ethnic",
            "warna": "Red"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "recommendations": {
                "Atasan": [test_item("Batik Kurta", Some("https://shop.example/kurta"))],
                "Bawahan": [],
                "Sepatu": [test_item("Flat Sandals", None)]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let set = api_for(&mock_server).recommend(&form()).await.unwrap();

    assert_eq!(set.items(Category::Atasan)[0].product_link(), Some("https://shop.example/kurta"));
    assert!(set.items(Category::Bawahan).is_empty());
    assert_eq!(set.items(Category::Sepatu).len(), 1);
}

#[tokio::test]
async fn test_recommend_rejection_on_error_status_keeps_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "error": "No items found"
        })))
        .mount(&mock_server)
        .await;

    let err = api_for(&mock_server).recommend(&form()).await.unwrap_err();
    assert_eq!(err.user_message(), "No items found");
}

#[tokio::test]
async fn test_recommend_server_error_with_html_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Internal Server Error</h1>"))
        .mount(&mock_server)
        .await;

    let err = api_for(&mock_server).recommend(&form()).await.unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    let msg = err.user_message();
    assert!(msg.contains("500"), "Error should mention 500 status: {}", msg);
}

#[tokio::test]
async fn test_recommend_success_without_recommendations_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&mock_server)
        .await;

    let err = api_for(&mock_server).recommend(&form()).await.unwrap_err();
    assert!(matches!(err, ApiError::MissingField("recommendations")));
}

#[tokio::test]
async fn test_controller_renders_items_with_null_attributes() {
    let mock_server = MockServer::start().await;

    let mut sparse = test_item("Canvas Sneakers", None);
    sparse["usage"] = serde_json::Value::Null;

    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "recommendations": {
                "Atasan": [test_item("Batik Kurta", None)],
                "Sepatu": [sparse]
            }
        })))
        .mount(&mock_server)
        .await;

    let mut controller = RecommendationController::new(api_for(&mock_server));
    controller.fill_form(form());
    let state = controller.get_recommendations().await;

    assert_eq!(state, UiState::ShowingResults);
    let page = controller.page();
    assert_eq!(page.category(Category::Atasan).cards()[0].title, "Batik Kurta");
    let shoes = &page.category(Category::Sepatu).cards()[0];
    assert_eq!(shoes.title, "Canvas Sneakers");
    assert_eq!(shoes.badges[2], "");
    assert!(!page.error().is_visible());
}

#[tokio::test]
async fn test_controller_shows_fallback_for_empty_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": ""
        })))
        .mount(&mock_server)
        .await;

    let mut controller = RecommendationController::new(api_for(&mock_server));
    let state = controller.get_recommendations().await;

    assert_eq!(state, UiState::ShowingError);
    assert_eq!(controller.page().error().content(), "Gagal mendapatkan rekomendasi");
}

#[tokio::test]
async fn test_controller_full_flow_against_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "model_loaded": true })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/weather"))
        .respond_with(ResponseTemplate::new(500).set_body_string("weather backend down"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "recommendations": {
                "Atasan": [test_item("Batik Kurta", None)],
                "weather_info": {
                    "temperature": 26.2,
                    "description": "hujan",
                    "location": "Yogyakarta",
                    "season": "Fall"
                }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut controller = RecommendationController::new(api_for(&mock_server));
    assert_eq!(controller.check_health().await, HealthCheck::Ready);

    controller.fill_form(form());
    let state = controller.get_recommendations().await;

    assert_eq!(state, UiState::ShowingResults);
    let page = controller.page();
    assert_eq!(page.category(Category::Atasan).cards()[0].title, "Batik Kurta");
    assert!(matches!(page.category(Category::Bawahan), CategoryContent::NoMatch(_)));
    assert!(matches!(page.category(Category::Sepatu), CategoryContent::NoMatch(_)));
    assert_eq!(page.weather().content().as_ref().and_then(|w| w.temperature_c), Some(26));
    assert!(!page.submit().disabled);
}

#[tokio::test]
async fn test_controller_reports_unreachable_server() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = HttpApi::new(&format!("http://{addr}/api")).unwrap();

    let mut controller = RecommendationController::new(api);

    assert_eq!(controller.check_health().await, HealthCheck::Unreachable);
    assert_eq!(controller.get_recommendations().await, UiState::ShowingError);
    assert!(
        controller
            .page()
            .error()
            .content()
            .starts_with("Terjadi kesalahan saat mengambil rekomendasi: ")
    );
}
