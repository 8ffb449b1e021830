//! Macro for implementing string conversions for wire-level status enums
//!
//! The deal-desk API exchanges statuses and priorities as display strings
//! (`"In-Progress"`, `"Medium"`). This macro ties each variant to its wire
//! string once and derives `Display`, `FromStr`, `Serialize` and
//! `Deserialize` from that single table. Parsing is case-insensitive.
//!
//! # Example
//!
//! ```rust
//! use dealdesk_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ReviewOutcome {
//!     Approved,
//!     Rejected,
//! }
//!
//! impl_domain_status_conversions!(ReviewOutcome {
//!     Approved => "Approved",
//!     Rejected => "Rejected",
//! });
//!
//! assert_eq!("approved".parse::<ReviewOutcome>().unwrap(), ReviewOutcome::Approved);
//! assert_eq!(ReviewOutcome::Rejected.to_string(), "Rejected");
//! ```

/// Implements `Display`, `FromStr`, `Serialize` and `Deserialize` for
/// status enums.
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire strings
///
/// # Features
///
/// - Case-insensitive parsing (e.g., "MEDIUM", "medium", "Medium" all work)
/// - Output uses the wire string exactly as written in the table
/// - Descriptive error messages with enum name
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire representation of this value.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }

        impl ::serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}
