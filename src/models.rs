use serde::{Deserialize, Serialize};

/// Body of `POST /api/recipes`.
///
/// Both fields default to empty so that a missing key and an empty array are
/// rejected the same way by the handler, rather than by the JSON extractor
/// with a framework-worded message.
#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Dishes the client has already seen and does not want again.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Body of `POST /api/genFoodImage`.
#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    #[serde(default, rename = "dishName")]
    pub dish_name: String,
}

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub success: bool,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
