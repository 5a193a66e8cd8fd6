use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_all_categories, questions},
        Category, NewQuestion, Question,
    },
    server::{
        app::AppState,
        deserializers::page_param,
        error::ApiError,
    },
};

use super::{ApiResponse, AppJson, AppPath, AppQuery};

pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Sent as `currentCategory` with the paginated listing, which is not scoped to a category.
const LISTING_CURRENT_CATEGORY: i64 = 2;

#[derive(Deserialize)]
struct QuestionForm {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(default, rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    categories: Vec<Category>,
    current_category: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created_id: i64,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
}

/// Row offset of a 1-indexed page, `None` when the page lies before the first row.
fn page_offset(page: i64) -> Option<i64> {
    page.checked_sub(1)
        .filter(|p| *p >= 0)
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
}

async fn questions_page(
    State(pool): State<SqlitePool>,
    AppQuery(params): AppQuery<Vec<(String, String)>>,
) -> ApiResponse<Json<QuestionsPage>> {
    let page = page_param(&params);
    let total_questions = questions::count_questions(&pool).await?;
    let categories = get_all_categories(&pool).await?;
    if total_questions == 0 || categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    let questions = match page_offset(page) {
        Some(offset) => questions::get_questions_page(&pool, QUESTIONS_PER_PAGE, offset).await?,
        None => vec![],
    };
    Ok(Json(QuestionsPage {
        success: true,
        questions,
        total_questions,
        categories,
        current_category: LISTING_CURRENT_CATEGORY,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    AppJson(form): AppJson<QuestionForm>,
) -> ApiResponse<Json<Created>> {
    let (Some(question), Some(answer), Some(category), Some(difficulty)) =
        (form.question, form.answer, form.category, form.difficulty)
    else {
        return Err(ApiError::Unprocessable);
    };

    let id = questions::create_question(
        &pool,
        NewQuestion {
            question: &question,
            answer: &answer,
            category,
            difficulty,
        },
    )
    .await
    .map_err(ApiError::BadRequest)?;
    tracing::info!("Created question {id}");

    Ok(Json(Created {
        success: true,
        created_id: id,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> ApiResponse<Json<Deleted>> {
    if questions::get_question_by_id(&pool, id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    questions::delete_question(&pool, id)
        .await
        .map_err(ApiError::BadRequest)?;
    tracing::info!("Deleted question {id}");

    Ok(Json(Deleted { success: true }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    AppJson(body): AppJson<SearchBody>,
) -> ApiResponse<Json<SearchResults>> {
    let term = body
        .search_term
        .filter(|term| !term.is_empty())
        .ok_or(ApiError::Unprocessable)?;

    let questions = questions::search_questions(&pool, &term)
        .await
        .map_err(ApiError::BadRequest)?;
    Ok(Json(SearchResults {
        success: true,
        total_questions: questions.len(),
        questions,
    }))
}

pub fn questions_router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(questions_page).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
}
