use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::errors::{WebError, WebResult};
use crate::extract;
use crate::gemini::Generator;
use crate::models::{ImageRequest, ImageResponse, RecipeRequest};
use crate::prompt;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn Generator>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // `GET /health` goes to `health`
        .route("/health", get(health))
        // `POST /api/recipes` goes to `recommend_recipe`
        .route("/api/recipes", post(recommend_recipe))
        // `POST /api/genFoodImage` goes to `gen_food_image`
        .route("/api/genFoodImage", post(gen_food_image))
        // The web frontend is served from a different origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Just reply that everything is okay
async fn health() -> StatusCode {
    StatusCode::OK
}

/// Recommend one traditional dish for the given ingredients.
///
/// The model's JSON object is relayed verbatim, so the exclusion-aware
/// variant's extra `usedIngredients` key passes through without a schema
/// change here.
async fn recommend_recipe(
    State(state): State<AppState>,
    Json(request): Json<RecipeRequest>,
) -> WebResult<Json<serde_json::Value>> {
    if request.ingredients.is_empty() {
        return Err(WebError::Validation("No ingredients provided".into()));
    }
    let prompt = prompt::recipe_prompt(&request.ingredients, &request.exclude);
    let text = state
        .generator
        .generate_text(&prompt)
        .await
        .map_err(WebError::Generation)?;
    tracing::debug!("Generated recipe response: {}", text);
    let recipe = extract::extract_json_object(&text)?;
    Ok(Json(recipe))
}

/// Generate a photograph of a dish and return it as a data URI.
async fn gen_food_image(
    State(state): State<AppState>,
    Json(request): Json<ImageRequest>,
) -> WebResult<Json<ImageResponse>> {
    if request.dish_name.is_empty() {
        return Err(WebError::Validation("No dish name provided".into()));
    }
    let prompt = prompt::image_prompt(&request.dish_name);
    let image = state
        .generator
        .generate_image(&prompt)
        .await
        .map_err(WebError::Generation)?;
    Ok(Json(ImageResponse {
        success: true,
        image_url: extract::to_data_uri(&image),
    }))
}
