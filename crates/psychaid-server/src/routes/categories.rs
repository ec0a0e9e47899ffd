use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use psychaid_core::models::category::CategoryId;
use psychaid_instruments::scoring::Question;
use psychaid_instruments::{Category, all_categories, find_category};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct CategorySummary {
    id: CategoryId,
    name: String,
    description: String,
    question_count: usize,
    max_score: u32,
}

#[derive(Serialize)]
pub struct CategoryDetail {
    id: CategoryId,
    name: String,
    description: String,
    max_score: u32,
    questions: Vec<Question>,
}

fn summary(category: &dyn Category) -> CategorySummary {
    CategorySummary {
        id: category.id(),
        name: category.name().to_string(),
        description: category.description().to_string(),
        question_count: category.questions().len(),
        max_score: category.max_score(),
    }
}

pub async fn list_categories() -> Json<Vec<CategorySummary>> {
    Json(all_categories().iter().map(|c| summary(c.as_ref())).collect())
}

pub async fn get_category_detail(
    Path(id): Path<String>,
) -> Result<Json<CategoryDetail>, ApiError> {
    let category = find_category(&id)?;

    Ok(Json(CategoryDetail {
        id: category.id(),
        name: category.name().to_string(),
        description: category.description().to_string(),
        max_score: category.max_score(),
        questions: category.questions().to_vec(),
    }))
}
