//! Catalog MCP Server implementation
//!
//! Every tool is one call to the Catalog API. API failures come back as tool
//! errors so the calling model can read them.

use crate::client::{CatalogClient, CreateProductRequest, UpdateProductRequest};
use anyhow::Result;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;

/// Catalog MCP Server
///
/// Browse and administer the product catalog: categories and products.
#[derive(Clone)]
pub struct CatalogServer {
    client: CatalogClient,
    tool_router: ToolRouter<Self>,
}

impl CatalogServer {
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(CatalogClient::from_env()?))
    }

    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }
}

fn to_tool_result(result: Result<String>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(content) => Ok(CallToolResult::success(vec![Content::text(content)])),
        Err(e) => {
            tracing::debug!(error = %e, "Catalog API call failed");
            Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
        }
    }
}

// --- Tool Parameter Types ---

#[derive(Debug, Deserialize, JsonSchema)]
pub struct IdParams {
    /// UUID of the category or product
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListCategoriesParams {
    /// Also return deactivated categories
    #[serde(default)]
    pub include_inactive: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateCategoryParams {
    /// Category name, unique across the catalog
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateCategoryParams {
    /// UUID of the category
    pub id: String,
    /// New name
    pub name: String,
    /// New description; omit to clear it
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListProductsParams {
    /// Also return deactivated products
    #[serde(default)]
    pub include_inactive: bool,
    /// Restrict to one category (UUID)
    #[serde(default)]
    pub category_id: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateProductParams {
    /// Product name
    pub name: String,
    /// Stock keeping unit, unique across the catalog
    pub sku: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price as a decimal string greater than zero, e.g. "19.90"
    pub price: String,
    /// UUID of an existing category
    pub category_id: String,
    /// Image reference
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateProductParams {
    /// UUID of the product
    pub id: String,
    /// New name
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price as a decimal string greater than zero, e.g. "19.90"
    pub price: String,
    /// UUID of the category
    pub category_id: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[tool_router]
impl CatalogServer {
    // === Categories ===

    #[tool(description = "List categories. Only active ones unless include_inactive is true.")]
    async fn list_categories(
        &self,
        params: Parameters<ListCategoriesParams>,
    ) -> Result<CallToolResult, McpError> {
        to_tool_result(self.client.list_categories(params.0.include_inactive).await)
    }

    #[tool(description = "Get one category by its UUID.")]
    async fn get_category(&self, params: Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        to_tool_result(self.client.get_category(&params.0.id).await)
    }

    #[tool(description = "Create a new active category. Names must be unique.")]
    async fn create_category(
        &self,
        params: Parameters<CreateCategoryParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        to_tool_result(
            self.client
                .create_category(&p.name, p.description.as_deref())
                .await,
        )
    }

    #[tool(description = "Rename a category and replace its description.")]
    async fn update_category(
        &self,
        params: Parameters<UpdateCategoryParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        to_tool_result(
            self.client
                .update_category(&p.id, &p.name, p.description.as_deref())
                .await,
        )
    }

    #[tool(
        description = "Deactivate (soft-delete) a category. Its products stay as they are."
    )]
    async fn deactivate_category(
        &self,
        params: Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        to_tool_result(self.client.deactivate_category(&params.0.id).await)
    }

    #[tool(description = "Reactivate a previously deactivated category.")]
    async fn reactivate_category(
        &self,
        params: Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        to_tool_result(self.client.reactivate_category(&params.0.id).await)
    }

    // === Products ===

    #[tool(
        description = "List products, optionally within one category. Only active ones unless include_inactive is true."
    )]
    async fn list_products(
        &self,
        params: Parameters<ListProductsParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        to_tool_result(
            self.client
                .list_products(p.include_inactive, p.category_id.as_deref())
                .await,
        )
    }

    #[tool(description = "Get one product by its UUID.")]
    async fn get_product(&self, params: Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        to_tool_result(self.client.get_product(&params.0.id).await)
    }

    #[tool(
        description = "Create a new active product. The SKU must be unique, the price above zero and the category must exist."
    )]
    async fn create_product(
        &self,
        params: Parameters<CreateProductParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let request = CreateProductRequest {
            name: &p.name,
            sku: &p.sku,
            description: p.description.as_deref(),
            price: &p.price,
            category_id: &p.category_id,
            image: p.image.as_deref(),
        };
        to_tool_result(self.client.create_product(&request).await)
    }

    #[tool(description = "Replace a product's name, description, price, category and image. The SKU never changes.")]
    async fn update_product(
        &self,
        params: Parameters<UpdateProductParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let request = UpdateProductRequest {
            name: &p.name,
            description: p.description.as_deref(),
            price: &p.price,
            category_id: &p.category_id,
            image: p.image.as_deref(),
        };
        to_tool_result(self.client.update_product(&p.id, &request).await)
    }

    #[tool(description = "Deactivate (soft-delete) a product.")]
    async fn deactivate_product(
        &self,
        params: Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        to_tool_result(self.client.deactivate_product(&params.0.id).await)
    }

    #[tool(description = "Reactivate a previously deactivated product.")]
    async fn reactivate_product(
        &self,
        params: Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        to_tool_result(self.client.reactivate_product(&params.0.id).await)
    }
}

#[tool_handler]
impl ServerHandler for CatalogServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "catalog".into(),
                title: Some("Catalog MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"Product catalog for the ordering platform.

READ (no key needed):
- 'list_categories', 'get_category'
- 'list_products' (filter by category_id), 'get_product'

WRITE (needs CATALOG_API_KEY):
- 'create_category', 'update_category'
- 'deactivate_category', 'reactivate_category'
- 'create_product', 'update_product'
- 'deactivate_product', 'reactivate_product'

RULES:
- Category names and product SKUs are unique
- Prices are decimal strings and must be greater than zero
- Deactivation is a soft delete; nothing is ever removed"#
                    .into(),
            ),
        }
    }
}
