//! OpenAPI document and the interactive docs page.
//!
//! The document is generated from the handler annotations; the page pulls the
//! Swagger UI bundle from a CDN and points it at `/v3/api-docs`.

use axum::{
    response::{Html, Redirect},
    Json,
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

use productapi_auth::API_KEY_HEADER;

use crate::app::dto::{ApiKeyResponse, ErrorBody, ProductRequest, ProductResponse};
use crate::app::routes::{auth, products};

pub const SECURITY_SCHEME: &str = "apiKey";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Management API",
        version = "1.0.0",
        description = "REST API for Product Management with CRUD operations",
        contact(name = "API Support", email = "support@example.com", url = "http://example.com"),
        license(name = "Apache 2.0", url = "http://springdoc.org"),
    ),
    paths(
        products::create_product,
        products::list_products,
        products::get_product,
        products::update_product,
        products::delete_product,
        auth::api_key,
    ),
    components(schemas(ProductRequest, ProductResponse, ApiKeyResponse, ErrorBody)),
    modifiers(&ApiKeyScheme),
    tags(
        (name = "Products", description = "Product management APIs"),
        (name = "Authentication", description = "Authentication endpoints"),
    )
)]
pub struct ApiDoc;

struct ApiKeyScheme;

impl Modify for ApiKeyScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            SECURITY_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                API_KEY_HEADER,
                "API Key for authentication",
            ))),
        );
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

pub async fn swagger_ui_redirect() -> Redirect {
    Redirect::permanent("/swagger-ui")
}

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Product Management API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({
        url: "/v3/api-docs",
        dom_id: "#swagger-ui",
        persistAuthorization: true,
      });
    };
  </script>
</body>
</html>
"##;
