//! End-to-end tests against a running contestd server

mod common;

use common::{ContestTest, StubBehavior, STUB_SUGGESTION};
use contestd::advisor::AdvisoryPolicy;

#[tokio::test]
async fn test_health_and_root() {
    let test = ContestTest::start(AdvisoryPolicy::Disabled).await.unwrap();

    let health: serde_json::Value = test.get("/health").await.unwrap().json().await.unwrap();
    assert_eq!(health["status"], "healthy");

    let root: serde_json::Value = test.get("/").await.unwrap().json().await.unwrap();
    assert_eq!(root["name"], "contestd");
}

#[tokio::test]
async fn test_sport_wheel_without_brand() {
    let test = ContestTest::start(AdvisoryPolicy::Disabled).await.unwrap();

    let (status, body) = test
        .generate(serde_json::json!({
            "prompt": "Crée une roue de la fortune pour une marque de sport",
            "dominantColor": "#FF3B30"
        }))
        .await
        .unwrap();

    assert_eq!(status, 200);
    let game = &body["gameData"];
    assert_eq!(game["type"], "wheel");
    assert_eq!(game["theme"], "sport");
    assert_eq!(game["colors"]["primary"], "#FF3B30");
    assert_eq!(game["colors"]["secondary"], "#eb271c");
    assert_eq!(game["colors"]["accent"], "#ff6358");
    assert_eq!(game["content"]["prizes"].as_array().unwrap().len(), 8);
    assert_eq!(game["provenance"]["brandDataUsed"], false);
    assert_eq!(body["debug"]["apiCalled"], false);
}

#[tokio::test]
async fn test_brand_lookup_fills_palette_and_logo() {
    let test = ContestTest::start(AdvisoryPolicy::BestEffort).await.unwrap();

    let (status, body) = test
        .generate(serde_json::json!({
            "prompt": "Un quiz pour nos clientes",
            "brandUrl": "https://www.ExampleShop.com/page",
            "dominantColor": "#FF0000",
            "logo": "data:image/png;base64,AAAA"
        }))
        .await
        .unwrap();

    assert_eq!(status, 200);
    let game = &body["gameData"];
    assert_eq!(game["type"], "quiz");
    assert_eq!(game["brandName"], "Example Shop");
    assert_eq!(game["theme"], "fashion");
    assert_eq!(game["brandTone"], "elegant and trendy");
    assert_eq!(game["colors"]["primary"], "#FF0000");
    assert_eq!(game["colors"]["secondary"], "#445566");
    assert_eq!(game["colors"]["accent"], "#778899");
    assert_eq!(game["brandLogo"], "https://cdn.example/logo.png");
    assert_eq!(game["customLogo"], "data:image/png;base64,AAAA");
    assert_eq!(game["provenance"]["userAssetsUsed"], true);

    let questions = game["content"]["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 2);
    for q in questions {
        assert_eq!(q["answers"].as_array().unwrap().len(), 4);
        assert!(q["correct"].as_u64().unwrap() <= 3);
    }

    let debug = &body["debug"];
    assert_eq!(debug["brandDataRetrieved"], true);
    assert_eq!(debug["apiCalled"], true);
    assert_eq!(debug["suggestion"], STUB_SUGGESTION);
    assert_eq!(debug["allInputsUsed"], true);
}

#[tokio::test]
async fn test_brand_url_port_and_query_ignored() {
    let test = ContestTest::start(AdvisoryPolicy::Disabled).await.unwrap();

    for url in ["exampleshop.com:443", "https://exampleshop.com?utm=mail#top"] {
        let (status, body) = test
            .generate(serde_json::json!({
                "prompt": "Une roue",
                "brandUrl": url
            }))
            .await
            .unwrap();

        assert_eq!(status, 200);
        assert_eq!(body["gameData"]["brandName"], "Example Shop", "{}", url);
        assert_eq!(body["debug"]["brandDataRetrieved"], true);
    }
}

#[tokio::test]
async fn test_brand_service_failures_fall_back() {
    let test = ContestTest::start(AdvisoryPolicy::Disabled).await.unwrap();

    for url in ["broken.com", "garbage.com", "https://sportmax.fr"] {
        let (status, body) = test
            .generate(serde_json::json!({
                "prompt": "Une carte à gratter",
                "brandUrl": url
            }))
            .await
            .unwrap();

        assert_eq!(status, 200, "{} should still generate", url);
        assert_eq!(body["gameData"]["type"], "scratch");
        assert_eq!(body["gameData"]["provenance"]["brandDataUsed"], true);
        assert_eq!(body["debug"]["brandDataRetrieved"], false);
    }

    let (_, body) = test
        .generate(serde_json::json!({
            "prompt": "Une carte à gratter",
            "brandUrl": "https://sportmax.fr"
        }))
        .await
        .unwrap();
    assert_eq!(body["gameData"]["brandName"], "Sportmax");
    assert_eq!(body["gameData"]["theme"], "sport");
    assert_eq!(body["gameData"]["brandTone"], "dynamic and energetic");
}

#[tokio::test]
async fn test_required_advisory_failure_aborts() {
    let test = ContestTest::start_with(AdvisoryPolicy::Required, StubBehavior { advisor_ok: false })
        .await
        .unwrap();

    let (status, body) = test
        .generate(serde_json::json!({ "prompt": "Une roue" }))
        .await
        .unwrap();

    assert_eq!(status, 502);
    assert!(body["error"].as_str().unwrap().contains("500"));
    assert!(body["error"].as_str().unwrap().contains("upstream exploded"));
}

#[tokio::test]
async fn test_best_effort_advisory_failure_continues() {
    let test = ContestTest::start_with(AdvisoryPolicy::BestEffort, StubBehavior { advisor_ok: false })
        .await
        .unwrap();

    let (status, body) = test
        .generate(serde_json::json!({ "prompt": "Une roue" }))
        .await
        .unwrap();

    assert_eq!(status, 200);
    assert_eq!(body["debug"]["apiCalled"], false);
    assert!(body["debug"].get("suggestion").is_none());
}

#[tokio::test]
async fn test_bad_requests() {
    let test = ContestTest::start(AdvisoryPolicy::Disabled).await.unwrap();

    let (status, body) = test
        .generate(serde_json::json!({ "prompt": "" }))
        .await
        .unwrap();
    assert_eq!(status, 400);
    assert_eq!(body["error"], "prompt is empty");

    let (status, body) = test
        .generate(serde_json::json!({ "prompt": "Un jeu", "gameType": "memory" }))
        .await
        .unwrap();
    assert_eq!(status, 400);
    assert_eq!(body["error"], "unknown game type: memory");

    let (status, _) = test
        .generate(serde_json::json!({ "prompt": "Un jeu", "dominantColor": "#12" }))
        .await
        .unwrap();
    assert_eq!(status, 400);
}
