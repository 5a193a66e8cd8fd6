use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{get_all_categories, get_category},
            questions::get_questions_for_category,
        },
        Category, Question,
    },
    server::{app::AppState, error::ApiError},
};

use super::{ApiResponse, AppPath};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoriesList {
    success: bool,
    categories: Vec<Category>,
    total_categories: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryQuestions {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: i64,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesList>> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesList {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

async fn category_questions(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> ApiResponse<Json<CategoryQuestions>> {
    if get_category(&pool, id).await?.is_none() {
        tracing::info!("Category {id} does not exist");
        return Err(ApiError::NotFound);
    }
    let questions = get_questions_for_category(&pool, id).await?;
    Ok(Json(CategoryQuestions {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: id,
    }))
}

pub fn category_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(category_questions))
}
