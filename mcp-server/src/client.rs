//! HTTP client for the Catalog API
//!
//! Reads work without credentials. Mutating calls need the admin key and
//! otherwise come back from the API as 401.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Serialize;

/// HTTP client for communicating with the Catalog API
#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client from environment variables
    ///
    /// - CATALOG_API_URL: Base URL of the API (default http://localhost:8080)
    /// - CATALOG_API_KEY: Admin key for mutating tools (optional)
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("CATALOG_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let api_key = std::env::var("CATALOG_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        if api_key.is_none() {
            tracing::warn!("CATALOG_API_KEY not set, only read tools will succeed");
        }

        Self::new(&base_url, api_key.as_deref())
    }

    /// Create a new client with explicit configuration
    pub fn new(base_url: &str, api_key: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(api_key) = api_key {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", api_key))
                    .context("Invalid API key format")?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // --- Categories ---

    pub async fn list_categories(&self, include_inactive: bool) -> Result<String> {
        self.get_text(
            "/categories",
            &[("include_inactive", include_inactive.to_string())],
        )
        .await
    }

    pub async fn get_category(&self, id: &str) -> Result<String> {
        self.get_text(&format!("/categories/{}", id), &[]).await
    }

    pub async fn create_category(&self, name: &str, description: Option<&str>) -> Result<String> {
        self.post_text("/categories", &CategoryRequest { name, description })
            .await
    }

    pub async fn update_category(
        &self,
        id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<String> {
        self.put_text(
            &format!("/categories/{}", id),
            &CategoryRequest { name, description },
        )
        .await
    }

    pub async fn deactivate_category(&self, id: &str) -> Result<String> {
        self.delete_text(&format!("/categories/{}", id)).await?;
        Ok(format!("Category {} deactivated", id))
    }

    pub async fn reactivate_category(&self, id: &str) -> Result<String> {
        self.post_text(&format!("/categories/{}/reactivate", id), &serde_json::json!({}))
            .await?;
        Ok(format!("Category {} reactivated", id))
    }

    // --- Products ---

    pub async fn list_products(
        &self,
        include_inactive: bool,
        category_id: Option<&str>,
    ) -> Result<String> {
        let mut query = vec![("include_inactive", include_inactive.to_string())];
        if let Some(category_id) = category_id {
            query.push(("category_id", category_id.to_string()));
        }
        self.get_text("/products", &query).await
    }

    pub async fn get_product(&self, id: &str) -> Result<String> {
        self.get_text(&format!("/products/{}", id), &[]).await
    }

    pub async fn create_product(&self, product: &CreateProductRequest<'_>) -> Result<String> {
        self.post_text("/products", product).await
    }

    pub async fn update_product(
        &self,
        id: &str,
        product: &UpdateProductRequest<'_>,
    ) -> Result<String> {
        self.put_text(&format!("/products/{}", id), product).await
    }

    pub async fn deactivate_product(&self, id: &str) -> Result<String> {
        self.delete_text(&format!("/products/{}", id)).await?;
        Ok(format!("Product {} deactivated", id))
    }

    pub async fn reactivate_product(&self, id: &str) -> Result<String> {
        self.post_text(&format!("/products/{}/reactivate", id), &serde_json::json!({}))
            .await?;
        Ok(format!("Product {} reactivated", id))
    }

    // --- Internal helpers ---

    async fn get_text(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", path))?;

        handle_text_response(response).await
    }

    async fn post_text<T: Serialize>(&self, path: &str, body: &T) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to POST {}", path))?;

        handle_text_response(response).await
    }

    async fn put_text<T: Serialize>(&self, path: &str, body: &T) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to PUT {}", path))?;

        handle_text_response(response).await
    }

    async fn delete_text(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .with_context(|| format!("Failed to DELETE {}", path))?;

        handle_text_response(response).await
    }
}

async fn handle_text_response(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        anyhow::bail!("API error ({}): {}", status, body);
    }

    Ok(body)
}

// --- Request Types ---

#[derive(Debug, Serialize)]
struct CategoryRequest<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct CreateProductRequest<'a> {
    pub name: &'a str,
    pub sku: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    /// Decimal string, e.g. "19.90"
    pub price: &'a str,
    pub category_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct UpdateProductRequest<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub price: &'a str,
    pub category_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new_without_key() {
        let client = CatalogClient::new("http://localhost:8080", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = CatalogClient::new("https://catalog.example.com/", Some("secret")).unwrap();
        assert_eq!(client.base_url(), "https://catalog.example.com");
    }

    #[test]
    fn test_client_rejects_invalid_key() {
        assert!(CatalogClient::new("http://localhost:8080", Some("bad\nkey")).is_err());
    }

    #[test]
    fn test_category_request_serialization() {
        let req = CategoryRequest {
            name: "Lanches",
            description: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"name":"Lanches"}"#);
    }

    #[test]
    fn test_create_product_request_serialization() {
        let req = CreateProductRequest {
            name: "X-Burger",
            sku: "SKU1",
            description: None,
            price: "19.90",
            category_id: "0b6b0a5e-9a57-4a0c-8f43-3c9d0f1c2d11",
            image: Some("produtos/x-burger.png"),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""sku":"SKU1""#));
        assert!(json.contains(r#""price":"19.90""#));
        assert!(json.contains(r#""image":"produtos/x-burger.png""#));
        assert!(!json.contains("description"));
    }

    #[test]
    fn test_update_product_request_has_no_sku() {
        let req = UpdateProductRequest {
            name: "X-Salada",
            description: Some("Com alface"),
            price: "22.50",
            category_id: "0b6b0a5e-9a57-4a0c-8f43-3c9d0f1c2d11",
            image: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("sku"));
        assert!(json.contains(r#""description":"Com alface""#));
    }
}
