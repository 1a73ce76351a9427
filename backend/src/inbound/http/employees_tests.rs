//! Tests for the employee page handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use rstest::rstest;

use super::*;
use crate::domain::ports::{EmployeeForm, EmployeeView, MockEmployeeRequests};
use crate::domain::{EmployeeId, Error, seed_employees};

const MARK_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

async fn call(
    requests: MockEmployeeRequests,
    req: test::TestRequest,
) -> actix_web::dev::ServiceResponse {
    let state = HttpState::new(Arc::new(requests));
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;
    test::call_service(&app, req.to_request()).await
}

fn redirect_response() -> EmployeeResponse {
    EmployeeResponse::Redirect(EmployeeRoute::List)
}

fn location(res: &actix_web::dev::ServiceResponse) -> Option<&str> {
    res.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

#[actix_web::test]
async fn root_redirects_to_index() {
    let res = call(MockEmployeeRequests::new(), test::TestRequest::get().uri("/")).await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/Employees"));
}

#[actix_web::test]
async fn index_renders_html() {
    let mut requests = MockEmployeeRequests::new();
    requests.expect_list().times(1).return_once(|| {
        Ok(EmployeeResponse::Render(EmployeeView::Index(
            seed_employees(),
        )))
    });

    let res = call(requests, test::TestRequest::get().uri("/Employees")).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = test::read_body(res).await;
    let body = std::str::from_utf8(&body).expect("utf8 body");
    assert!(body.contains("Mark Miens"));
    assert!(body.contains("Evelin Rhodes"));
}

#[actix_web::test]
async fn index_failure_renders_error_page() {
    let mut requests = MockEmployeeRequests::new();
    requests
        .expect_list()
        .times(1)
        .return_once(|| Err(Error::service_unavailable("database offline")));

    let res = call(requests, test::TestRequest::get().uri("/Employees")).await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn create_form_renders_prompt() {
    let mut requests = MockEmployeeRequests::new();
    requests.expect_create_form().times(1).return_once(|| {
        EmployeeResponse::Render(EmployeeView::Create(EmployeeForm::default()))
    });

    let res = call(requests, test::TestRequest::get().uri("/Employees/Create")).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = test::read_body(res).await;
    assert!(
        std::str::from_utf8(&body)
            .expect("utf8 body")
            .contains(views::CREATE_PROMPT)
    );
}

#[actix_web::test]
async fn create_passes_form_fields_to_domain() {
    let mut requests = MockEmployeeRequests::new();
    requests
        .expect_create()
        .withf(|draft: &EmployeeDraft| {
            draft.name.as_deref() == Some("New Employee")
                && draft.age.as_deref() == Some("25")
                && draft.account_number.as_deref() == Some("214-5874986532-21")
        })
        .times(1)
        .return_once(|_| Ok(redirect_response()));

    let res = call(
        requests,
        test::TestRequest::post().uri("/Employees/Create").set_form([
            ("Name", "New Employee"),
            ("Age", "25"),
            ("AccountNumber", "214-5874986532-21"),
        ]),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/Employees"));
}

#[actix_web::test]
async fn create_leaves_absent_fields_empty() {
    let mut requests = MockEmployeeRequests::new();
    requests
        .expect_create()
        .withf(|draft: &EmployeeDraft| draft.account_number.is_none())
        .times(1)
        .return_once(|draft| {
            Ok(EmployeeResponse::Render(EmployeeView::Create(
                EmployeeForm::rejected(None, draft, Default::default()),
            )))
        });

    let res = call(
        requests,
        test::TestRequest::post()
            .uri("/Employees/Create")
            .set_form([("Name", "New Employee"), ("Age", "25")]),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn edit_form_parses_path_id() {
    let mut requests = MockEmployeeRequests::new();
    requests
        .expect_edit_form()
        .withf(|id: &EmployeeId| id.to_string() == MARK_ID)
        .times(1)
        .return_once(|id| {
            Ok(EmployeeResponse::Render(EmployeeView::Edit(EmployeeForm {
                id: Some(*id),
                ..EmployeeForm::default()
            })))
        });

    let res = call(
        requests,
        test::TestRequest::get().uri(&format!("/Employees/Edit/{MARK_ID}")),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[rstest]
#[case("/Employees/Edit/not-a-uuid")]
#[actix_web::test]
async fn malformed_path_ids_are_not_found(#[case] uri: &str) {
    let mut requests = MockEmployeeRequests::new();
    requests.expect_edit_form().times(0);

    let res = call(requests, test::TestRequest::get().uri(uri)).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case(test::TestRequest::put())]
#[case(test::TestRequest::post())]
#[actix_web::test]
async fn update_accepts_put_and_post(#[case] req: test::TestRequest) {
    let mut requests = MockEmployeeRequests::new();
    requests
        .expect_update()
        .withf(|request: &UpdateEmployeeRequest| {
            request.id.to_string() == MARK_ID && request.draft.age.as_deref() == Some("31")
        })
        .times(1)
        .return_once(|_| Ok(redirect_response()));

    let res = call(
        requests,
        req.uri("/Employees/Update").set_form([
            ("Id", MARK_ID),
            ("Name", "Mark Miens"),
            ("Age", "31"),
            ("AccountNumber", "123-3452134543-32"),
        ]),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/Employees"));
}

#[rstest]
#[case(vec![("Name", "Mark Miens")])]
#[case(vec![("Id", "seven"), ("Name", "Mark Miens")])]
#[actix_web::test]
async fn update_without_valid_id_is_bad_request(#[case] form: Vec<(&'static str, &'static str)>) {
    let mut requests = MockEmployeeRequests::new();
    requests.expect_update().times(0);

    let res = call(
        requests,
        test::TestRequest::put().uri("/Employees/Update").set_form(form),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[case(test::TestRequest::delete())]
#[case(test::TestRequest::post())]
#[actix_web::test]
async fn delete_accepts_delete_and_post(#[case] req: test::TestRequest) {
    let mut requests = MockEmployeeRequests::new();
    requests
        .expect_delete()
        .withf(|id: &EmployeeId| id.to_string() == MARK_ID)
        .times(1)
        .return_once(|_| Ok(redirect_response()));

    let res = call(requests, req.uri(&format!("/Employees/Delete/{MARK_ID}"))).await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
}

#[actix_web::test]
async fn delete_of_unknown_employee_is_not_found() {
    let mut requests = MockEmployeeRequests::new();
    requests
        .expect_delete()
        .times(1)
        .return_once(|_| Err(Error::not_found("employee missing")));

    let res = call(
        requests,
        test::TestRequest::delete().uri(&format!("/Employees/Delete/{}", EmployeeId::random())),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn undecodable_form_body_is_bad_request() {
    let mut requests = MockEmployeeRequests::new();
    requests.expect_create().times(0);

    let res = call(
        requests,
        test::TestRequest::post()
            .uri("/Employees/Create")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{}"),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
