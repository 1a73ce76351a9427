//! Server-rendered HTML pages for the employee roster.
//!
//! Pages are small enough to assemble with `format!`; every value that came
//! from a user or the store passes through [`escape_html`].

use crate::domain::ports::{EmployeeForm, EmployeeRoute, EmployeeView};
use crate::domain::{Employee, EmployeeField};

/// Prompt shown above the create form.
pub const CREATE_PROMPT: &str = "Please provide a new employee data";
const EDIT_PROMPT: &str = "Update the employee data";

/// Render a domain view to a complete HTML document.
pub fn render(view: &EmployeeView) -> String {
    match view {
        EmployeeView::Index(employees) => layout("Employees", &index(employees)),
        EmployeeView::Create(form) => layout("Create employee", &create_form(form)),
        EmployeeView::Edit(form) => layout("Edit employee", &edit_form(form)),
    }
}

/// Render the page shown for a failed request.
///
/// `message` must already be safe to show to the user.
pub fn error_page(status: u16, message: &str, request_id: Option<&str>) -> String {
    let request_id = request_id.map_or_else(String::new, |id| {
        format!(
            "<p><strong>Request ID:</strong> <code>{}</code></p>\n",
            escape_html(id)
        )
    });
    let body = format!(
        "<h1 class=\"text-danger\">Error.</h1>\n\
         <h2 class=\"text-danger\">An error occurred while processing your request ({status}).</h2>\n\
         <p>{}</p>\n{request_id}<p><a href=\"{}\">Back to the roster</a></p>\n",
        escape_html(message),
        EmployeeRoute::List.path(),
    );
    layout("Error", &body)
}

/// Escape the characters HTML treats specially.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} - Employees</title>\n</head>\n<body>\n<main>\n{body}</main>\n</body>\n</html>\n",
        escape_html(title),
    )
}

fn index(employees: &[Employee]) -> String {
    let rows: String = employees.iter().map(index_row).collect();
    let table = if employees.is_empty() {
        "<p>No employees yet.</p>\n".to_owned()
    } else {
        format!(
            "<table>\n<thead><tr><th>Name</th><th>Age</th><th>Account Number</th><th></th></tr></thead>\n\
             <tbody>\n{rows}</tbody>\n</table>\n"
        )
    };
    format!("<h1>Employees</h1>\n<p><a href=\"/Employees/Create\">Create New</a></p>\n{table}")
}

fn index_row(employee: &Employee) -> String {
    format!(
        "<tr><td>{name}</td><td>{age}</td><td>{account}</td><td>\
         <a href=\"/Employees/Edit/{id}\">Edit</a> \
         <form method=\"post\" action=\"/Employees/Delete/{id}\"><button type=\"submit\">Delete</button></form>\
         </td></tr>\n",
        name = escape_html(&employee.name),
        age = employee.age,
        account = escape_html(&employee.account_number),
        id = employee.id,
    )
}

fn create_form(form: &EmployeeForm) -> String {
    format!(
        "<h1>Create</h1>\n<h4>{CREATE_PROMPT}</h4>\n\
         <form method=\"post\" action=\"/Employees/Create\">\n{}\
         <button type=\"submit\">Create</button>\n</form>\n{}",
        form_fields(form),
        back_link(),
    )
}

fn edit_form(form: &EmployeeForm) -> String {
    let id = form.id.map_or_else(String::new, |id| id.to_string());
    format!(
        "<h1>Edit</h1>\n<h4>{EDIT_PROMPT}</h4>\n\
         <form method=\"post\" action=\"/Employees/Update\">\n\
         <input type=\"hidden\" name=\"Id\" value=\"{id}\">\n{}\
         <button type=\"submit\">Save</button>\n</form>\n{}",
        form_fields(form),
        back_link(),
    )
}

fn back_link() -> String {
    format!(
        "<p><a href=\"{}\">Back to List</a></p>\n",
        EmployeeRoute::List.path()
    )
}

fn form_fields(form: &EmployeeForm) -> String {
    EmployeeField::ALL
        .iter()
        .map(|&field| form_field(form, field))
        .collect()
}

fn form_field(form: &EmployeeForm, field: EmployeeField) -> String {
    let value = match field {
        EmployeeField::Name => form.draft.name.as_deref(),
        EmployeeField::Age => form.draft.age.as_deref(),
        EmployeeField::AccountNumber => form.draft.account_number.as_deref(),
    }
    .unwrap_or_default();
    let errors: String = form
        .errors
        .for_field(field)
        .map(|message| {
            format!(
                "<span class=\"field-validation-error\">{}</span>\n",
                escape_html(message)
            )
        })
        .collect();
    let key = field.form_key();
    format!(
        "<div class=\"form-group\">\n<label for=\"{key}\">{}</label>\n\
         <input id=\"{key}\" name=\"{key}\" value=\"{}\">\n{errors}</div>\n",
        field.label(),
        escape_html(value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ACCOUNT_NUMBER_REQUIRED, EmployeeDraft, EmployeeId, FieldErrors, seed_employees,
    };
    use rstest::rstest;

    #[rstest]
    fn index_lists_every_employee_with_actions() {
        let employees = seed_employees();
        let html = render(&EmployeeView::Index(employees.clone()));

        for employee in &employees {
            assert!(html.contains(&employee.name));
            assert!(html.contains(&employee.account_number));
            assert!(html.contains(&format!("/Employees/Edit/{}", employee.id)));
            assert!(html.contains(&format!("/Employees/Delete/{}", employee.id)));
        }
    }

    #[rstest]
    fn empty_index_says_so() {
        let html = render(&EmployeeView::Index(Vec::new()));
        assert!(html.contains("No employees yet."));
        assert!(!html.contains("<table>"));
    }

    #[rstest]
    fn create_form_shows_prompt_and_fields() {
        let html = render(&EmployeeView::Create(EmployeeForm::default()));

        assert!(html.contains(CREATE_PROMPT));
        for field in EmployeeField::ALL {
            assert!(html.contains(&format!("name=\"{}\"", field.form_key())));
        }
        assert!(!html.contains("name=\"Id\""));
    }

    #[rstest]
    fn rejected_form_keeps_values_and_messages() {
        let form = EmployeeForm::rejected(
            None,
            EmployeeDraft {
                name: Some("New Employee".to_owned()),
                age: Some("25".to_owned()),
                account_number: None,
            },
            FieldErrors::single(EmployeeField::AccountNumber, ACCOUNT_NUMBER_REQUIRED),
        );

        let html = render(&EmployeeView::Create(form));

        assert!(html.contains("value=\"New Employee\""));
        assert!(html.contains("value=\"25\""));
        assert!(html.contains(ACCOUNT_NUMBER_REQUIRED));
    }

    #[rstest]
    fn edit_form_carries_hidden_id() {
        let id = EmployeeId::random();
        let form = EmployeeForm {
            id: Some(id),
            ..EmployeeForm::default()
        };

        let html = render(&EmployeeView::Edit(form));

        assert!(html.contains(&format!("name=\"Id\" value=\"{id}\"")));
        assert!(html.contains("action=\"/Employees/Update\""));
    }

    #[rstest]
    fn user_values_are_escaped() {
        let mut employee = seed_employees().remove(0);
        employee.name = "<script>alert('x')</script>".to_owned();

        let html = render(&EmployeeView::Index(vec![employee]));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[rstest]
    fn error_page_shows_request_id() {
        let html = error_page(404, "employee missing", Some("abc-123"));

        assert!(html.contains("Request ID:"));
        assert!(html.contains("abc-123"));
        assert!(html.contains("(404)"));
    }

    #[rstest]
    fn error_page_omits_missing_request_id() {
        let html = error_page(500, "Internal server error", None);
        assert!(!html.contains("Request ID"));
    }
}
