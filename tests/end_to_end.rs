//! Full-stack tests: router, race and HTTP lookups against mock providers.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use cep_race::api::rest::{AppState, create_router};
use cep_race::application::services::{RaceAggregator, RaceConfig};
use cep_race::application::use_cases::ResolveAddressUseCase;
use cep_race::infrastructure::providers::{HttpClient, HttpLookupClient, ProviderRegistry};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt as _;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts the three public provider shapes on one mock server.
struct Providers {
    server: MockServer,
}

impl Providers {
    async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    async fn viacep(&self, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/ws/01001000/json/"))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    async fn postmon(&self, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/v1/cep/01001000"))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    async fn republicavirtual(&self, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/web_cep.php"))
            .and(query_param("cep", "01001000"))
            .and(query_param("formato", "json"))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    fn app(&self, provider_timeout_ms: u64, race: RaceConfig) -> Router {
        let base = self.server.uri();
        let registry = ProviderRegistry::from_pairs([
            ("viacep", format!("{base}/ws/{{cep}}/json/")),
            ("postmon", format!("{base}/v1/cep/{{cep}}")),
            (
                "republicavirtual",
                format!("{base}/web_cep.php?cep={{cep}}&formato=json"),
            ),
        ])
        .unwrap();
        let client = HttpLookupClient::new(HttpClient::new(provider_timeout_ms).unwrap());
        let aggregator = RaceAggregator::new(Arc::new(registry), Arc::new(client), race);
        let state = AppState::new(ResolveAddressUseCase::new(Arc::new(aggregator)));
        create_router(Arc::new(state))
    }
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

fn delayed(status: u16, body: Value, delay_ms: u64) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .set_body_json(body)
        .set_delay(Duration::from_millis(delay_ms))
}

#[tokio::test]
async fn viacep_wins_while_others_fail_or_time_out() {
    let providers = Providers::start().await;
    providers
        .viacep(delayed(
            200,
            json!({
                "localidade": "São Paulo",
                "uf": "SP",
                "bairro": "Sé",
                "logradouro": "Praça da Sé"
            }),
            20,
        ))
        .await;
    providers.postmon(ResponseTemplate::new(503)).await;
    providers
        .republicavirtual(delayed(200, json!({"uf": "SP"}), 2_000))
        .await;

    let (status, body) = get(providers.app(500, RaceConfig::default()), "/01001000").await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        value,
        json!({
            "cidade": "São Paulo",
            "estado": "SP",
            "bairro": "Sé",
            "logradouro": "Praça da Sé",
            "source": "viacep"
        })
    );
}

#[tokio::test]
async fn faster_provider_beats_slower_valid_provider() {
    let providers = Providers::start().await;
    providers
        .viacep(delayed(200, json!({"localidade": "A", "uf": "SP"}), 300))
        .await;
    providers
        .postmon(delayed(200, json!({"cidade": "B", "estado": "SP"}), 10))
        .await;
    providers.republicavirtual(ResponseTemplate::new(500)).await;

    let (status, body) = get(providers.app(2_000, RaceConfig::default()), "/01001000").await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["source"], "postmon");
    assert_eq!(value["cidade"], "B");
}

#[tokio::test]
async fn false_positive_does_not_win() {
    let providers = Providers::start().await;
    providers
        .viacep(delayed(200, json!({"localidade": "", "uf": ""}), 0))
        .await;
    providers
        .postmon(delayed(200, json!({"cidade": "Salvador", "estado": "BA"}), 100))
        .await;
    providers.republicavirtual(ResponseTemplate::new(404)).await;

    let (status, body) = get(providers.app(2_000, RaceConfig::default()), "/01001000").await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["source"], "postmon");
    assert_eq!(value["estado"], "BA");
}

#[tokio::test]
async fn every_provider_empty_is_not_found() {
    let providers = Providers::start().await;
    providers
        .viacep(delayed(200, json!({"erro": true}), 0))
        .await;
    providers.postmon(ResponseTemplate::new(404)).await;
    providers
        .republicavirtual(delayed(
            200,
            json!({"resultado": "0", "uf": "", "cidade": ""}),
            0,
        ))
        .await;

    let (status, body) = get(
        providers.app(2_000, RaceConfig::without_timeout()),
        "/01001000",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn overall_deadline_expiry_is_not_found() {
    let providers = Providers::start().await;
    providers
        .viacep(delayed(200, json!({"uf": "SP"}), 1_000))
        .await;
    providers
        .postmon(delayed(200, json!({"estado": "SP"}), 1_000))
        .await;
    providers
        .republicavirtual(delayed(200, json!({"uf": "SP"}), 1_000))
        .await;

    let (status, _) = get(providers.app(5_000, RaceConfig::with_timeout(100)), "/01001000").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_code_never_reaches_providers() {
    let providers = Providers::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uf": "SP"})))
        .expect(0)
        .mount(&providers.server)
        .await;

    let (status, _) = get(providers.app(1_000, RaceConfig::default()), "/123").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    providers.server.verify().await;
}
