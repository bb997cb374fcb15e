use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    common::{app_state::AppState, error::ServerError, models::ApiResponse},
    quiz::{
        db,
        generator::derive_quiz,
        models::{QuizQuery, ScoreRequest},
        scorer::score_quiz,
    },
};

pub fn quiz_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_quiz))
        .route("/score", post(get_quiz_score))
        .with_state(state)
}

async fn get_quiz(
    State(state): State<Arc<AppState>>,
    query: Result<Query<QuizQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Query(query) = query.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let request = query.validate()?;
    debug!("Quiz requested: {:?}", request);

    let sample = db::sample_questions(
        state.get_pool(),
        &request.category,
        request.difficulty,
        request.amount,
    )
    .await?;

    let mut rng = ChaCha8Rng::from_os_rng();
    let quiz = derive_quiz(sample, request.amount, &mut rng)?;

    info!(
        "Generated quiz of {} {} questions in {}",
        quiz.len(),
        request.difficulty,
        request.category
    );
    Ok((StatusCode::OK, Json(ApiResponse::ok(quiz))))
}

async fn get_quiz_score(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Json(request) = payload.map_err(|e| {
        ServerError::BadRequest(format!(
            "The request must contain an array of `user_answers`. {}",
            e.body_text()
        ))
    })?;

    let user_answers = request.user_answers;
    let ids: Vec<Uuid> = user_answers.iter().filter_map(|a| a.parsed_id()).collect();
    let questions = db::get_questions_by_ids(state.get_pool(), &ids).await?;

    let results = score_quiz(&user_answers, questions)?;
    info!(
        "Scored quiz: {}/{} correct",
        results.correct_answers, results.total_questions
    );

    Ok((StatusCode::OK, Json(ApiResponse::ok(results))))
}
