//! Helper macro for declaring port error enums.
//!
//! Every variant carries one `String` field and gets a snake-case
//! constructor accepting anything convertible into a `String`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $field:ident } => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $field: String },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Construct [`" $name "::" $variant "`]."]
                    pub fn [<$variant:snake>]($field: impl Into<String>) -> Self {
                        Self::$variant { $field: $field.into() }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoreError {
            Offline { message } => "store offline: {message}",
            MissingRow { key } => "no row for {key}",
        }
    }

    #[test]
    fn constructors_accept_str() {
        let err = StoreError::offline("socket closed");
        assert_eq!(err.to_string(), "store offline: socket closed");
    }

    #[test]
    fn multi_word_variants_become_snake_case() {
        let err = StoreError::missing_row(String::from("42"));
        assert_eq!(
            err,
            StoreError::MissingRow {
                key: "42".to_owned()
            }
        );
        assert_eq!(err.to_string(), "no row for 42");
    }
}
