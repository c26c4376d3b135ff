//! End-to-end tests against a real in-process HTTP server.

use std::sync::{Arc, Mutex};

use axum::{Json, Router, http::StatusCode, routing::post};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use salary_core::calculations::format_inr;
use salary_core::controller::{CONNECTIVITY_MESSAGE, RequestController};
use salary_core::{
    DisplayPlan, FormInput, RequestState, SalaryResult, SalaryService, ServiceConfig,
    ServiceError, interpret,
};
use salary_http::HttpSalaryService;

type Captured = Arc<Mutex<Vec<Value>>>;

/// Starts a server whose `/api/salary` answers with `status` and `body`,
/// recording every request body it receives.
async fn spawn_server(
    status: StatusCode,
    body: Value,
) -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let seen = captured.clone();

    let app = Router::new().route(
        "/api/salary",
        post(move |Json(request): Json<Value>| {
            let seen = seen.clone();
            let body = body.clone();
            async move {
                seen.lock().unwrap().push(request);
                (status, Json(body))
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });

    (format!("http://{addr}"), captured)
}

/// Starts a server that answers every request with a plain-text body.
async fn spawn_text_server(
    status: StatusCode,
    body: &'static str,
) -> String {
    let app = Router::new().route("/api/salary", post(move || async move { (status, body) }));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });

    format!("http://{addr}")
}

fn service_for(base_url: &str) -> HttpSalaryService {
    let config = ServiceConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..Default::default()
    };
    HttpSalaryService::new(&config).expect("Failed to build http service")
}

fn acme_form() -> FormInput {
    FormInput {
        company: "Acme".to_string(),
        position: "SDE1".to_string(),
        ctc: "15,00,000".to_string(),
        location: "Bangalore".to_string(),
    }
}

#[tokio::test]
async fn breakdown_response_reaches_succeeded_and_formats_in_hand() {
    let (base, captured) = spawn_server(
        StatusCode::OK,
        json!({
            "status": "success",
            "company": "Acme",
            "position": "SDE1",
            "ctc": "15,00,000",
            "location": "Bangalore",
            "monthly_breakdown": {
                "gross_monthly_cash": 83333,
                "deductions": { "pf": 1800, "tax_monthly": 16333, "professional_tax": 200 },
                "final_in_hand_salary": 65000
            }
        }),
    )
    .await;
    let service = service_for(&base);
    let mut controller = RequestController::new();
    assert_eq!(controller.state(), &RequestState::Idle);

    let pending = controller.begin(&acme_form()).expect("form should validate");
    assert_eq!(controller.state(), &RequestState::Loading);
    let outcome = service.calculate(&pending.request).await;
    assert!(controller.complete(pending.id, outcome));

    let Some(SalaryResult::Breakdown(result)) = controller.state().result() else {
        panic!("expected breakdown, got {:?}", controller.state());
    };
    let monthly = result.monthly_breakdown.as_ref().unwrap();
    assert_eq!(monthly.final_in_hand_salary, Some(dec!(65000)));
    assert_eq!(format_inr(monthly.final_in_hand_salary), "₹65,000");

    let sent = captured.lock().unwrap();
    assert_eq!(
        sent.as_slice(),
        &[json!({
            "company": "Acme",
            "position": "SDE1",
            "ctc": "15,00,000",
            "location": "Bangalore"
        })]
    );
}

#[tokio::test]
async fn submitted_values_are_trimmed_on_the_wire() {
    let (base, captured) = spawn_server(StatusCode::OK, json!({ "status": "success" })).await;
    let service = service_for(&base);
    let mut controller = RequestController::new();
    let form = FormInput {
        company: "  Acme  ".to_string(),
        position: " SDE1".to_string(),
        ctc: "18 LPA ".to_string(),
        location: "\tPune".to_string(),
    };

    controller.submit(&service, &form).await;

    let sent = captured.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["company"], "Acme");
    assert_eq!(sent[0]["ctc"], "18 LPA");
    assert_eq!(sent[0]["location"], "Pune");
}

#[tokio::test]
async fn mismatch_response_plans_only_the_mismatch_panel() {
    let (base, _) = spawn_server(
        StatusCode::OK,
        json!({
            "status": "mismatch",
            "company": "Acme",
            "position": "Intern",
            "ctc": "90 LPA",
            "location": "Pune",
            "analysis": "Intern roles at Acme pay far less.",
            "monthly_breakdown": { "final_in_hand_salary": 500000 }
        }),
    )
    .await;
    let service = service_for(&base);
    let mut controller = RequestController::new();

    let state = controller.submit(&service, &acme_form()).await;

    let result = state.result().expect("expected success");
    assert_eq!(interpret(result), DisplayPlan::Mismatch);
}

#[tokio::test]
async fn error_field_of_400_body_is_shown_verbatim() {
    let (base, _) = spawn_server(
        StatusCode::BAD_REQUEST,
        json!({ "error": "Invalid CTC format" }),
    )
    .await;
    let service = service_for(&base);
    let mut controller = RequestController::new();

    let state = controller.submit(&service, &acme_form()).await;

    assert_eq!(state, &RequestState::Failed("Invalid CTC format".to_string()));
}

#[tokio::test]
async fn status_error_without_body_field_uses_status_message() {
    let base = spawn_text_server(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").await;
    let service = service_for(&base);

    let err = service
        .calculate(&acme_form().validate().unwrap())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::Status {
            status: 500,
            body_error: None,
        }
    );

    let mut controller = RequestController::new();
    let state = controller.submit(&service, &acme_form()).await;
    assert_eq!(
        state,
        &RequestState::Failed("Request failed with status code 500".to_string())
    );
}

#[tokio::test]
async fn undecodable_success_body_is_a_decode_error() {
    let base = spawn_text_server(StatusCode::OK, "definitely not json").await;
    let service = service_for(&base);

    let err = service
        .calculate(&acme_form().validate().unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Decode(ref msg) if !msg.is_empty()), "{err:?}");
}

#[tokio::test]
async fn refused_connection_shows_connectivity_guidance() {
    // Bind and immediately drop a listener so the port is known to be closed.
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);

    let service = service_for(&format!("http://{addr}"));
    let mut controller = RequestController::new();

    let state = controller.submit(&service, &acme_form()).await;

    assert_eq!(state, &RequestState::Failed(CONNECTIVITY_MESSAGE.to_string()));
}

#[tokio::test]
async fn invalid_form_never_reaches_the_server() {
    let (base, captured) = spawn_server(StatusCode::OK, json!({ "status": "success" })).await;
    let service = service_for(&base);
    let mut controller = RequestController::new();
    let mut form = acme_form();
    form.location.clear();

    let state = controller.submit(&service, &form).await;

    assert_eq!(state, &RequestState::Failed("Please enter work location".to_string()));
    assert!(captured.lock().unwrap().is_empty());
}
