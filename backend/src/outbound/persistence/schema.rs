//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Staff roster.
    employees (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        name -> Varchar,
        age -> Int4,
        /// `AAA-BBBBBBBBBB-CC` account number.
        account_number -> Varchar,
    }
}
