use askama::Template;
use axum::http::HeaderMap;
use axum::response::Response;
use axum::{
    Extension, Form, Router,
    extract::State,
    routing::{get, post},
};
use serde::Deserialize;

use crate::app::AppState;
use crate::error::InternalError;
use crate::models::quiz::{QuizQuestion, QuizState, QuizSummary, apply_submit, summary};
use crate::models::session::{load_quiz_state, save_quiz_state};
use crate::routes::index::page_response;
use crate::routes::session::SessionToken;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_quiz))
        .route("/answer", post(submit_answer))
        .route("/restart", post(restart_quiz))
        .with_state(state)
}

#[derive(Template)]
#[template(path = "quiz_question.html")]
struct QuestionTemplate<'a> {
    number: usize,
    total: usize,
    question: &'a QuizQuestion,
}

#[derive(Template)]
#[template(path = "quiz_summary.html")]
struct SummaryTemplate<'a> {
    summary: QuizSummary<'a>,
}

fn render_quiz_section(questions: &'static [QuizQuestion], quiz: &QuizState) -> String {
    match quiz.current_question(questions) {
        Some(question) => QuestionTemplate {
            number: quiz.current_index + 1,
            total: questions.len(),
            question,
        }
        .render(),
        None => SummaryTemplate {
            summary: summary(quiz, questions)
                .expect("A quiz without a current question is finished"),
        }
        .render(),
    }
    .expect("Template rendering should always succeed")
}

async fn get_quiz(
    Extension(token): Extension<SessionToken>,
    headers: HeaderMap,
    State(state): State<AppState>,
) -> Result<Response, InternalError> {
    let quiz = load_quiz_state(&state.store, &token.0).await?;
    Ok(page_response(
        &headers,
        render_quiz_section(state.questions, &quiz),
    ))
}

#[derive(Deserialize, Debug)]
struct AnswerForm {
    choice: String,
}

async fn submit_answer(
    Extension(token): Extension<SessionToken>,
    headers: HeaderMap,
    State(state): State<AppState>,
    Form(form): Form<AnswerForm>,
) -> Result<Response, InternalError> {
    let quiz = load_quiz_state(&state.store, &token.0).await?;
    let quiz = apply_submit(&quiz, state.questions, &form.choice);
    save_quiz_state(&state.store, &token.0, &quiz).await?;
    Ok(page_response(
        &headers,
        render_quiz_section(state.questions, &quiz),
    ))
}

async fn restart_quiz(
    Extension(token): Extension<SessionToken>,
    headers: HeaderMap,
    State(state): State<AppState>,
) -> Result<Response, InternalError> {
    let quiz = QuizState::new();
    save_quiz_state(&state.store, &token.0, &quiz).await?;
    Ok(page_response(
        &headers,
        render_quiz_section(state.questions, &quiz),
    ))
}
