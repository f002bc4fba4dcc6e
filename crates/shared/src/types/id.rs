//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `ReceiptId` where a
//! `ReservationId` is expected. Clients are keyed by their national ID
//! (RUT), a validated string rather than a UUID.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(ReservationId, "Unique identifier for a reservation.");
typed_id!(ReceiptId, "Unique identifier for a payment receipt.");
typed_id!(TariffId, "Unique identifier for a tariff.");

/// Errors produced when parsing a national ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidClientId {
    /// The input has no `-` separating body and verifier.
    #[error("national ID is missing the verifier digit")]
    MissingVerifier,
    /// The body is empty, too long, or contains non-digits.
    #[error("national ID body must be 1-8 digits")]
    InvalidBody,
    /// The verifier is not a single digit or `K`.
    #[error("national ID verifier must be a digit or K")]
    InvalidVerifier,
    /// The verifier does not match the mod-11 checksum of the body.
    #[error("national ID verifier mismatch: expected {expected}, found {found}")]
    VerifierMismatch {
        /// Verifier computed from the body.
        expected: char,
        /// Verifier present in the input.
        found: char,
    },
}

/// A client's national ID (RUT), the natural key for clients.
///
/// Stored in normalized `body-verifier` form (`12345678-5`); dots are
/// stripped on parse and the verifier is checked against the mod-11
/// algorithm (remainder 10 maps to `K`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientId(String);

impl ClientId {
    /// Parses and validates a national ID, accepting dotted input.
    pub fn parse(input: &str) -> Result<Self, InvalidClientId> {
        let cleaned: String = input.trim().chars().filter(|c| *c != '.').collect();
        let (body, verifier) = cleaned
            .split_once('-')
            .ok_or(InvalidClientId::MissingVerifier)?;

        if body.is_empty() || body.len() > 8 || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidClientId::InvalidBody);
        }

        let found = match verifier {
            "k" | "K" => 'K',
            v => {
                let mut chars = v.chars();
                match (chars.next(), chars.next()) {
                    (Some(d), None) if d.is_ascii_digit() => d,
                    _ => return Err(InvalidClientId::InvalidVerifier),
                }
            }
        };

        let expected = Self::verifier_digit(body);
        if found != expected {
            return Err(InvalidClientId::VerifierMismatch { expected, found });
        }

        Ok(Self(format!("{body}-{found}")))
    }

    /// Returns the normalized `body-verifier` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Computes the mod-11 verifier for a digit-only body.
    fn verifier_digit(body: &str) -> char {
        let mut factor = 2u32;
        let mut sum = 0u32;
        for b in body.bytes().rev() {
            sum += u32::from(b - b'0') * factor;
            factor = if factor == 7 { 2 } else { factor + 1 };
        }
        match 11 - (sum % 11) {
            11 => '0',
            10 => 'K',
            n => char::from_digit(n, 10).unwrap_or('0'),
        }
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ClientId {
    type Err = InvalidClientId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClientId {
    type Error = InvalidClientId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClientId> for String {
    fn from(id: ClientId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_typed_ids_are_distinct_per_call() {
        assert_ne!(ReservationId::new(), ReservationId::new());
        assert_ne!(ReceiptId::new(), ReceiptId::new());
    }

    #[test]
    fn test_typed_id_display_roundtrip() {
        let id = TariffId::new();
        let parsed: TariffId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[rstest]
    #[case("12345678-5")]
    #[case("11111111-1")]
    #[case("8888888-K")]
    #[case("1-9")]
    fn test_valid_national_ids(#[case] input: &str) {
        let id = ClientId::parse(input).unwrap();
        assert_eq!(id.as_str(), input);
    }

    #[test]
    fn test_dotted_input_is_normalized() {
        let id = ClientId::parse("12.345.678-5").unwrap();
        assert_eq!(id.as_str(), "12345678-5");
    }

    #[test]
    fn test_lowercase_k_verifier_is_uppercased() {
        let id = ClientId::parse("8888888-k").unwrap();
        assert_eq!(id.as_str(), "8888888-K");
    }

    #[test]
    fn test_missing_verifier_rejected() {
        assert_eq!(
            ClientId::parse("12345678"),
            Err(InvalidClientId::MissingVerifier)
        );
    }

    #[rstest]
    #[case("-5")]
    #[case("123456789-2")]
    #[case("12a45678-5")]
    fn test_invalid_body_rejected(#[case] input: &str) {
        assert_eq!(ClientId::parse(input), Err(InvalidClientId::InvalidBody));
    }

    #[test]
    fn test_invalid_verifier_rejected() {
        assert_eq!(
            ClientId::parse("12345678-55"),
            Err(InvalidClientId::InvalidVerifier)
        );
        assert_eq!(
            ClientId::parse("12345678-x"),
            Err(InvalidClientId::InvalidVerifier)
        );
    }

    #[test]
    fn test_checksum_mismatch_rejected() {
        assert_eq!(
            ClientId::parse("12345678-9"),
            Err(InvalidClientId::VerifierMismatch {
                expected: '5',
                found: '9'
            })
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = ClientId::parse("12345678-5").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"12345678-5\"");
        let back: ClientId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_serde_rejects_bad_checksum() {
        let result: Result<ClientId, _> = serde_json::from_str("\"12345678-9\"");
        assert!(result.is_err());
    }
}
