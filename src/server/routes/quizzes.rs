use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::get_category,
            questions::{get_all_questions, get_questions_for_category},
        },
        Question,
    },
    quiz::{pick_question, Pick, ALL_CATEGORIES},
    server::{app::AppState, error::ApiError},
    telemetry::{QUIZ_EXHAUSTED_CNTR, QUIZ_QUESTIONS_CNTR},
};

use super::{ApiResponse, AppJson};

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Deserialize)]
struct QuizBody {
    quiz_category: QuizCategory,
    #[serde(default)]
    previous_questions: Vec<i64>,
}

#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    question: Option<Question>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    AppJson(body): AppJson<QuizBody>,
) -> ApiResponse<Json<QuizQuestion>> {
    let category = body.quiz_category.id;
    let pool_questions = if category == ALL_CATEGORIES {
        get_all_questions(&pool).await?
    } else {
        if get_category(&pool, category).await?.is_none() {
            return Err(ApiError::NotFound);
        }
        get_questions_for_category(&pool, category).await?
    };
    if pool_questions.is_empty() {
        tracing::warn!("No questions to play with in category {category}");
        return Err(ApiError::NotFound);
    }

    let label = category.to_string();
    let pick = pick_question(
        pool_questions,
        &body.previous_questions,
        &mut rand::thread_rng(),
    );
    let question = match pick {
        Pick::Next(question) => {
            QUIZ_QUESTIONS_CNTR.with_label_values(&[label.as_str()]).inc();
            Some(question)
        }
        Pick::Exhausted => {
            tracing::info!(
                "Quiz in category {category} exhausted after {} questions",
                body.previous_questions.len()
            );
            QUIZ_EXHAUSTED_CNTR.with_label_values(&[label.as_str()]).inc();
            None
        }
    };

    Ok(Json(QuizQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router() -> Router<AppState> {
    Router::new().route("/quizzes", post(play_quiz))
}
