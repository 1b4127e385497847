use axum::{Json, Router, extract::Query, http::StatusCode, response::IntoResponse, routing::get};
use qa_answer_client::messages::Messages;
use qa_answer_client::models::AnswerResponse;
use qa_answer_client::page::{ANSWER_ELEMENT, MemoryPage, QUESTION_ELEMENT};
use qa_answer_client::transport::HttpTransport;
use qa_answer_client::{AnswerRequester, AskOutcome};
use serde::Deserialize;

#[derive(Deserialize)]
struct QuestionParams {
    question: String,
}

async fn echo_answer(Query(params): Query<QuestionParams>) -> Json<AnswerResponse> {
    let answer = format!("You asked: {}", params.question);
    Json(AnswerResponse::new(params.question, answer))
}

async fn server_error() -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "detail": "database unavailable" })),
    )
}

async fn plain_text() -> &'static str {
    "Internal Server Error"
}

async fn spawn_mock_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn build_requester(
    backend_url: &str,
    question: &str,
) -> AnswerRequester<MemoryPage, HttpTransport> {
    let page = MemoryPage::question_form()
        .with_element(QUESTION_ELEMENT, question)
        .with_element(ANSWER_ELEMENT, "previous");
    AnswerRequester::new(
        page,
        HttpTransport::new(backend_url).unwrap(),
        Messages::default(),
    )
}

#[tokio::test]
async fn e2e_question_round_trips_through_query_string() {
    let backend_url =
        spawn_mock_backend(Router::new().route("/get_answer/", get(echo_answer))).await;
    let question = "Что такое 2 + 2 & why? #math";
    let requester = build_requester(&backend_url, question);

    let outcome = requester.request_answer().await;

    let expected = format!("You asked: {question}");
    assert_eq!(outcome, AskOutcome::Answered(expected.clone()));
    assert_eq!(
        requester.page().text(ANSWER_ELEMENT).as_deref(),
        Some(expected.as_str())
    );
    assert!(requester.page().alerts().is_empty());
}

#[tokio::test]
async fn e2e_error_status_with_json_body_is_still_rendered() {
    let backend_url =
        spawn_mock_backend(Router::new().route("/get_answer/", get(server_error))).await;
    let requester = build_requester(&backend_url, "anything");

    let outcome = requester.request_answer().await;

    assert_eq!(outcome, AskOutcome::Answered("undefined".to_string()));
    assert_eq!(
        requester.page().text(ANSWER_ELEMENT).as_deref(),
        Some("undefined")
    );
    assert!(requester.page().alerts().is_empty());
}

#[tokio::test]
async fn e2e_non_json_body_alerts_and_keeps_previous_answer() {
    let backend_url =
        spawn_mock_backend(Router::new().route("/get_answer/", get(plain_text))).await;
    let requester = build_requester(&backend_url, "anything");

    let outcome = requester.request_answer().await;

    assert_eq!(outcome, AskOutcome::Failed);
    assert_eq!(
        requester.page().text(ANSWER_ELEMENT).as_deref(),
        Some("previous")
    );
    assert_eq!(
        requester.page().alerts(),
        vec!["An error occurred while processing the question"]
    );
}

#[tokio::test]
async fn e2e_unreachable_backend_alerts_once() {
    let requester = build_requester("http://127.0.0.1:1", "anything");

    let outcome = requester.request_answer().await;

    assert_eq!(outcome, AskOutcome::Failed);
    assert_eq!(requester.page().alerts().len(), 1);
    assert_eq!(
        requester.page().text(ANSWER_ELEMENT).as_deref(),
        Some("previous")
    );
}
