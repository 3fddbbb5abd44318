use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::debug;

use crate::config::NutritionixConfig;

/// One entry of the `foods` array returned by the natural-language endpoint.
/// Numbers are kept as raw JSON numbers so they can be turned into decimals
/// from their textual form.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Food {
    pub food_name: Option<String>,
    pub nf_calories: Option<Number>,
    pub nf_total_carbohydrate: Option<Number>,
    pub nf_protein: Option<Number>,
    pub nf_total_fat: Option<Number>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NutrientsResponse {
    #[serde(default)]
    pub foods: Option<Vec<Food>>,
}

#[derive(Debug, Serialize)]
struct NutrientsQuery<'a> {
    query: &'a str,
}

#[async_trait]
pub trait NutritionApi: Send + Sync {
    /// Free-text lookup; returns the candidate foods, possibly empty.
    async fn natural_nutrients(&self, query: &str) -> anyhow::Result<Vec<Food>>;
}

#[derive(Clone)]
pub struct Nutritionix {
    http: reqwest::Client,
    config: NutritionixConfig,
}

impl Nutritionix {
    pub fn new(config: NutritionixConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl NutritionApi for Nutritionix {
    async fn natural_nutrients(&self, query: &str) -> anyhow::Result<Vec<Food>> {
        let res = self
            .http
            .post(&self.config.url)
            .header("x-app-id", &self.config.app_id)
            .header("x-app-key", &self.config.app_key)
            .json(&NutrientsQuery { query })
            .send()
            .await
            .context("nutritionix request")?
            .error_for_status()
            .context("nutritionix status")?;

        let body: NutrientsResponse = res.json().await.context("nutritionix decode")?;
        let foods = body.foods.unwrap_or_default();
        debug!(query, count = foods.len(), "nutritionix foods");
        Ok(foods)
    }
}

#[cfg(test)]
mod nutritionix_tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> Nutritionix {
        Nutritionix::new(NutritionixConfig {
            app_id: "test-app".into(),
            app_key: "test-key".into(),
            url: format!("{}/v2/natural/nutrients", server.uri()),
        })
    }

    #[tokio::test]
    async fn posts_query_with_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/natural/nutrients"))
            .and(header("x-app-id", "test-app"))
            .and(header("x-app-key", "test-key"))
            .and(body_json(json!({ "query": "Pizza" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "foods": [{
                    "food_name": "pizza",
                    "nf_calories": 285,
                    "nf_total_carbohydrate": 35.66,
                    "nf_protein": 12.2,
                    "nf_total_fat": 10.4
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let foods = client(&server).natural_nutrients("Pizza").await.unwrap();
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].food_name.as_deref(), Some("pizza"));
        assert_eq!(foods[0].nf_calories.as_ref().map(|n| n.to_string()), Some("285".into()));
        assert_eq!(
            foods[0].nf_total_carbohydrate.as_ref().map(|n| n.to_string()),
            Some("35.66".into())
        );
    }

    #[tokio::test]
    async fn missing_foods_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let foods = client(&server).natural_nutrients("rock").await.unwrap();
        assert!(foods.is_empty());
    }

    #[tokio::test]
    async fn error_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "unauthorized"
            })))
            .mount(&server)
            .await;

        let err = client(&server).natural_nutrients("pizza").await.unwrap_err();
        assert_eq!(err.to_string(), "nutritionix status");
    }
}
