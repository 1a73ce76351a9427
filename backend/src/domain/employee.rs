//! Employee records and the form input they are built from.

use std::fmt;

use uuid::Uuid;

/// Message attached to the name field when it is missing.
pub const NAME_REQUIRED: &str = "Name is required";
/// Message attached to the age field when it is missing.
pub const AGE_REQUIRED: &str = "Age is required";
/// Message attached to the age field when it is not an integer.
pub const AGE_NOT_A_NUMBER: &str = "Age must be a whole number";
/// Message attached to the account number field when it is missing.
pub const ACCOUNT_NUMBER_REQUIRED: &str = "Account number is required";
/// Message attached to the account number field when the format check fails.
pub const ACCOUNT_NUMBER_INVALID: &str = "Account Number is invalid";

/// Stable employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Generate an identifier for a new record.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for EmployeeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// A persisted employee.
///
/// ## Invariants
/// - `name` is non-empty once trimmed.
/// - `account_number` passed the account number policy when written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub age: i32,
    pub account_number: String,
}

impl Employee {
    /// Attach an identifier to validated details.
    pub fn new(id: EmployeeId, details: EmployeeDetails) -> Self {
        let EmployeeDetails {
            name,
            age,
            account_number,
        } = details;
        Self {
            id,
            name,
            age,
            account_number,
        }
    }
}

/// Employees present in a freshly created store.
pub fn seed_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: EmployeeId::from_uuid(Uuid::from_u128(0x3fa8_5f64_5717_4562_b3fc_2c96_3f66_afa6)),
            name: "Mark Miens".to_owned(),
            age: 30,
            account_number: "123-3452134543-32".to_owned(),
        },
        Employee {
            id: EmployeeId::from_uuid(Uuid::from_u128(0x7fa8_5f64_5717_4562_b3fc_2c96_3f66_afa7)),
            name: "Evelin Rhodes".to_owned(),
            age: 32,
            account_number: "123-9384613085-58".to_owned(),
        },
    ]
}

/// Form fields of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    Name,
    Age,
    AccountNumber,
}

impl EmployeeField {
    /// Every field, in form order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Age, Self::AccountNumber];

    /// Key used for the field in form submissions.
    pub fn form_key(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Age => "Age",
            Self::AccountNumber => "AccountNumber",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Age => "Age",
            Self::AccountNumber => "Account Number",
        }
    }
}

/// Field-scoped validation messages, kept in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(EmployeeField, String)>);

impl FieldErrors {
    /// Collection holding a single message.
    pub fn single(field: EmployeeField, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    /// Record `message` against `field`.
    pub fn add(&mut self, field: EmployeeField, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded against `field`.
    pub fn for_field(&self, field: EmployeeField) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(move |(candidate, _)| *candidate == field)
            .map(|(_, message)| message.as_str())
    }

    /// All recorded messages with their fields.
    pub fn iter(&self) -> impl Iterator<Item = (EmployeeField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Raw employee values as submitted through a form.
///
/// Nothing is validated here; [`EmployeeDraft::validate`] checks the
/// required fields. Values are kept verbatim so a rejected form can be shown
/// again exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: Option<String>,
    pub age: Option<String>,
    pub account_number: Option<String>,
}

/// Employee values that passed required-field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetails {
    pub name: String,
    pub age: i32,
    pub account_number: String,
}

impl EmployeeDraft {
    /// Draft pre-filled from a stored employee, used by the edit form.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: Some(employee.name.clone()),
            age: Some(employee.age.to_string()),
            account_number: Some(employee.account_number.clone()),
        }
    }

    /// Check that every required field is present and well typed.
    ///
    /// Blank values count as missing. All problems are reported at once.
    ///
    /// # Errors
    ///
    /// Returns the collected [`FieldErrors`] when any field is rejected.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::{EmployeeDraft, EmployeeField};
    ///
    /// let draft = EmployeeDraft {
    ///     name: None,
    ///     age: Some("25".to_owned()),
    ///     account_number: Some("214-5874986532-21".to_owned()),
    /// };
    /// let errors = draft.validate().expect_err("name is missing");
    /// assert_eq!(
    ///     errors.for_field(EmployeeField::Name).collect::<Vec<_>>(),
    ///     vec!["Name is required"]
    /// );
    /// ```
    pub fn validate(&self) -> Result<EmployeeDetails, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = present(self.name.as_deref());
        if name.is_none() {
            errors.add(EmployeeField::Name, NAME_REQUIRED);
        }

        let age = match present(self.age.as_deref()) {
            None => {
                errors.add(EmployeeField::Age, AGE_REQUIRED);
                None
            }
            Some(raw) => raw.trim().parse::<i32>().map_or_else(
                |_| {
                    errors.add(EmployeeField::Age, AGE_NOT_A_NUMBER);
                    None
                },
                Some,
            ),
        };

        let account_number = present(self.account_number.as_deref());
        if account_number.is_none() {
            errors.add(EmployeeField::AccountNumber, ACCOUNT_NUMBER_REQUIRED);
        }

        match (name, age, account_number) {
            (Some(name), Some(age), Some(account_number)) if errors.is_empty() => {
                Ok(EmployeeDetails {
                    name: name.to_owned(),
                    age,
                    account_number: account_number.to_owned(),
                })
            }
            _ => Err(errors),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}
