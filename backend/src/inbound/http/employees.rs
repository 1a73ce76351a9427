//! Employee page handlers.
//!
//! ```text
//! GET         /Employees
//! GET         /Employees/Create
//! POST        /Employees/Create
//! GET         /Employees/Edit/{id}
//! PUT|POST    /Employees/Update
//! DELETE|POST /Employees/Delete/{id}
//! ```
//!
//! HTML forms can only submit GET and POST, so update and delete also
//! accept POST.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::EmployeeDraft;
use crate::domain::ports::{EmployeeResponse, EmployeeRoute, UpdateEmployeeRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::form_error_handler;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{ID_FIELD, parse_form_id, parse_path_id};
use crate::inbound::http::views;

/// Form body submitted by the create and edit pages.
///
/// Every field is optional at the transport level; missing values are
/// reported on the re-rendered form.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeFormPayload {
    /// Employee identifier; required on update, ignored on create.
    pub id: Option<String>,
    pub name: Option<String>,
    pub age: Option<String>,
    /// `AAA-BBBBBBBBBB-CC` account number.
    pub account_number: Option<String>,
}

impl EmployeeFormPayload {
    fn into_draft(self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name,
            age: self.age,
            account_number: self.account_number,
        }
    }

    fn into_update_request(self) -> ApiResult<UpdateEmployeeRequest> {
        let id = parse_form_id(self.id.as_deref(), ID_FIELD)?;
        Ok(UpdateEmployeeRequest {
            id,
            draft: self.into_draft(),
        })
    }
}

/// Translate a domain response descriptor into HTTP.
fn respond(response: EmployeeResponse) -> HttpResponse {
    match response {
        EmployeeResponse::Render(view) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(views::render(&view)),
        EmployeeResponse::Redirect(route) => redirect(route),
    }
}

fn redirect(route: EmployeeRoute) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, route.path()))
        .finish()
}

/// Register every employee route on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(form_error_handler))
        .service(home)
        .service(list_employees)
        .service(create_form)
        .service(create_employee)
        .service(edit_form)
        .service(update_employee)
        .service(submit_update)
        .service(delete_employee)
        .service(submit_delete);
}

/// Send visitors of the site root to the employee index.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 303, description = "Redirect to /Employees")),
    tags = ["employees"],
    operation_id = "home"
)]
#[get("/")]
pub async fn home() -> HttpResponse {
    redirect(EmployeeRoute::List)
}

/// Employee index.
#[utoipa::path(
    get,
    path = "/Employees",
    responses(
        (status = 200, description = "Employee table", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", content_type = "text/html", body = String),
        (status = 503, description = "Storage unavailable", content_type = "text/html", body = String)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/Employees")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let response = state.employees.list().await?;
    Ok(respond(response))
}

/// Empty create form.
#[utoipa::path(
    get,
    path = "/Employees/Create",
    responses((status = 200, description = "Create form", content_type = "text/html", body = String)),
    tags = ["employees"],
    operation_id = "createEmployeeForm"
)]
#[get("/Employees/Create")]
pub async fn create_form(state: web::Data<HttpState>) -> HttpResponse {
    respond(state.employees.create_form())
}

/// Validate and store a new employee.
#[utoipa::path(
    post,
    path = "/Employees/Create",
    request_body(
        content = EmployeeFormPayload,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 303, description = "Employee created; redirect to /Employees"),
        (status = 200, description = "Form re-rendered with validation messages", content_type = "text/html", body = String),
        (status = 400, description = "Undecodable form body", content_type = "text/html", body = String)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/Employees/Create")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Form<EmployeeFormPayload>,
) -> ApiResult<HttpResponse> {
    let response = state.employees.create(payload.into_inner().into_draft()).await?;
    Ok(respond(response))
}

/// Edit form pre-filled with a stored employee.
#[utoipa::path(
    get,
    path = "/Employees/Edit/{id}",
    params(("id" = String, Path, description = "Employee UUID")),
    responses(
        (status = 200, description = "Edit form", content_type = "text/html", body = String),
        (status = 404, description = "Unknown employee", content_type = "text/html", body = String)
    ),
    tags = ["employees"],
    operation_id = "editEmployeeForm"
)]
#[get("/Employees/Edit/{id}")]
pub async fn edit_form(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path)?;
    let response = state.employees.edit_form(&id).await?;
    Ok(respond(response))
}

async fn apply_update(state: &HttpState, payload: EmployeeFormPayload) -> ApiResult<HttpResponse> {
    let request = payload.into_update_request()?;
    debug!(employee_id = %request.id, "update submitted");
    let response = state.employees.update(request).await?;
    Ok(respond(response))
}

/// Validate and apply new values to an existing employee.
#[utoipa::path(
    put,
    path = "/Employees/Update",
    request_body(
        content = EmployeeFormPayload,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 303, description = "Employee updated; redirect to /Employees"),
        (status = 200, description = "Form re-rendered with validation messages", content_type = "text/html", body = String),
        (status = 400, description = "Missing or malformed Id", content_type = "text/html", body = String),
        (status = 404, description = "Unknown employee", content_type = "text/html", body = String)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/Employees/Update")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    payload: web::Form<EmployeeFormPayload>,
) -> ApiResult<HttpResponse> {
    apply_update(&state, payload.into_inner()).await
}

/// Form-friendly alias of [`update_employee`].
#[utoipa::path(
    post,
    path = "/Employees/Update",
    request_body(
        content = EmployeeFormPayload,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 303, description = "Employee updated; redirect to /Employees"),
        (status = 200, description = "Form re-rendered with validation messages", content_type = "text/html", body = String),
        (status = 400, description = "Missing or malformed Id", content_type = "text/html", body = String),
        (status = 404, description = "Unknown employee", content_type = "text/html", body = String)
    ),
    tags = ["employees"],
    operation_id = "submitEmployeeUpdate"
)]
#[post("/Employees/Update")]
pub async fn submit_update(
    state: web::Data<HttpState>,
    payload: web::Form<EmployeeFormPayload>,
) -> ApiResult<HttpResponse> {
    apply_update(&state, payload.into_inner()).await
}

async fn apply_delete(state: &HttpState, raw_id: &str) -> ApiResult<HttpResponse> {
    let id = parse_path_id(raw_id)?;
    let response = state.employees.delete(&id).await?;
    Ok(respond(response))
}

/// Remove an employee.
#[utoipa::path(
    delete,
    path = "/Employees/Delete/{id}",
    params(("id" = String, Path, description = "Employee UUID")),
    responses(
        (status = 303, description = "Employee deleted; redirect to /Employees"),
        (status = 404, description = "Unknown employee", content_type = "text/html", body = String)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/Employees/Delete/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    apply_delete(&state, &path).await
}

/// Form-friendly alias of [`delete_employee`].
#[utoipa::path(
    post,
    path = "/Employees/Delete/{id}",
    params(("id" = String, Path, description = "Employee UUID")),
    responses(
        (status = 303, description = "Employee deleted; redirect to /Employees"),
        (status = 404, description = "Unknown employee", content_type = "text/html", body = String)
    ),
    tags = ["employees"],
    operation_id = "submitEmployeeDelete"
)]
#[post("/Employees/Delete/{id}")]
pub async fn submit_delete(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    apply_delete(&state, &path).await
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
