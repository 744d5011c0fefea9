//! Scalar precision of a compiled QuEST library.
//!
//! QuEST is compiled with one of three floating-point types for its
//! `qreal` scalar. The library reports which one through `getQuEST_PREC`,
//! and every declaration handed to the binding generator must use the
//! matching C type.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Identifier used in the QuEST header in place of the scalar type.
pub const PRECISION_PLACEHOLDER: &str = "qreal";

/// Floating-point precision of the native library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// `float`, reported as code 1
    Single,
    /// `double`, reported as code 2
    Double,
    /// `long double`, reported as code 4
    Extended,
}

/// Errors produced while resolving a precision code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrecisionError {
    /// The library reported a code that maps to no known scalar type.
    #[error("unable to determine precision of qreal: unknown precision code {code}")]
    Unresolved { code: i32 },
}

impl Precision {
    /// Resolve the code returned by `getQuEST_PREC`.
    pub fn from_code(code: i32) -> Result<Self, PrecisionError> {
        match code {
            1 => Ok(Precision::Single),
            2 => Ok(Precision::Double),
            4 => Ok(Precision::Extended),
            code => Err(PrecisionError::Unresolved { code }),
        }
    }

    /// The code QuEST uses for this precision.
    pub fn code(&self) -> i32 {
        match self {
            Precision::Single => 1,
            Precision::Double => 2,
            Precision::Extended => 4,
        }
    }

    /// The C type name substituted for [`PRECISION_PLACEHOLDER`].
    pub fn c_type(&self) -> &'static str {
        match self {
            Precision::Single => "float",
            Precision::Double => "double",
            Precision::Extended => "long double",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Single => write!(f, "single"),
            Precision::Double => write!(f, "double"),
            Precision::Extended => write!(f, "quad"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_resolve() {
        assert_eq!(Precision::from_code(1).unwrap().c_type(), "float");
        assert_eq!(Precision::from_code(2).unwrap().c_type(), "double");
        assert_eq!(Precision::from_code(4).unwrap().c_type(), "long double");
    }

    #[test]
    fn test_unknown_codes_are_unresolved() {
        for code in [0, 3, 5, 8, -1, i32::MAX] {
            assert_eq!(
                Precision::from_code(code),
                Err(PrecisionError::Unresolved { code })
            );
        }
    }

    #[test]
    fn test_code_inverts_from_code() {
        for p in [Precision::Single, Precision::Double, Precision::Extended] {
            assert_eq!(Precision::from_code(p.code()).unwrap(), p);
        }
    }

    #[test]
    fn test_unresolved_message_names_code() {
        let err = Precision::from_code(3).unwrap_err();
        assert!(err.to_string().contains("precision code 3"));
    }
}
