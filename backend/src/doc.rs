//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every employee page, the health probes, and the form
//! payload schema. The document backs Swagger UI (debug builds) and is
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::employees::EmployeeFormPayload;

/// OpenAPI document for the roster.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee roster",
        description = "Server-rendered pages for listing, creating, editing and deleting employees."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::home,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::create_form,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::edit_form,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::submit_update,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::employees::submit_delete,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(EmployeeFormPayload)),
    tags(
        (name = "employees", description = "Employee roster pages"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
