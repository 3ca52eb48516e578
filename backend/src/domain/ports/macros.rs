//! `define_port_error!`: port error enums with one constructor per variant.
//!
//! Every variant is a struct variant. Its constructor is the snake_case
//! variant name and takes each field as `impl Into<FieldType>`, so string
//! fields accept `&str` and adapters can pass their native error text as is.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),+ },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        pub enum LedgerStoreError {
            Rejected { reason: String } => "ledger write rejected: {reason}",
            Lagging { table: String, rows: u64 } => "{table} lags by {rows} rows",
            UniqueViolation { message: String } => "duplicate: {message}",
        }
    }

    #[rstest]
    fn string_fields_accept_str() {
        let err = LedgerStoreError::rejected("duplicate key");
        assert_eq!(err.to_string(), "ledger write rejected: duplicate key");
    }

    #[rstest]
    fn mixed_fields_keep_their_types() {
        let err = LedgerStoreError::lagging("users", 3_u64);
        assert_eq!(
            err,
            LedgerStoreError::Lagging {
                table: "users".to_owned(),
                rows: 3,
            }
        );
        assert_eq!(err.to_string(), "users lags by 3 rows");
    }

    #[rstest]
    fn camel_case_variants_get_snake_case_constructors() {
        let err = LedgerStoreError::unique_violation(String::from("users_email_key"));
        assert_eq!(err.to_string(), "duplicate: users_email_key");
    }
}
