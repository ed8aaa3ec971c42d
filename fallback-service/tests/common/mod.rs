#![allow(dead_code)]

use fallback_service::config::{FallbackConfig, GeminiSettings, DEFAULT_GEMINI_MODEL};
use fallback_service::services::TextProvider;
use fallback_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use std::time::Duration;

/// Config with a random port and an unreachable Gemini endpoint.
pub fn test_config() -> FallbackConfig {
    FallbackConfig {
        common: CoreConfig { port: 0 },
        gemini: GeminiSettings {
            api_key: "test-api-key".to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
            timeout_secs: 5,
        },
        static_dir: None,
    }
}

pub struct TestApp {
    pub address: String,
    pub http_port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service around `provider`.
    pub async fn spawn(provider: Arc<dyn TextProvider>) -> Self {
        let app = Application::build_with_provider(test_config(), provider)
            .await
            .expect("Failed to build test application");
        Self::start(app).await
    }

    /// Spawn the service with the Gemini provider and the given config.
    pub async fn spawn_with_config(config: FallbackConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        Self::start(app).await
    }

    async fn start(app: Application) -> Self {
        let http_port = app.http_port();
        let address = format!("http://127.0.0.1:{}", http_port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            http_port,
            client,
        }
    }

    pub async fn post_fallback(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/fallback", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }
}
