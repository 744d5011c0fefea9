//! Assembly of the declaration set handed to the binding generator.

use serde::Serialize;

use super::filter::filter_lines;
use crate::core::precision::{Precision, PRECISION_PLACEHOLDER};

/// Internal QuEST functions that are not in the public header but are
/// needed by the bindings.
pub const SUPPLEMENTAL_DECLARATIONS: [&str; 4] = [
    "void statevec_setAmps(Qureg qureg, long long int startInd, qreal* reals, qreal* imags, long long int numAmps);",
    "qreal densmatr_calcProbOfOutcome(Qureg qureg, const int measureQubit, int outcome);",
    "qreal statevec_calcProbOfOutcome(Qureg qureg, const int measureQubit, int outcome);",
    "int generateMeasurementOutcome(qreal zeroProb, qreal *outcomeProb);",
];

/// Declaration of the precision query exported by the library.
pub const PRECISION_QUERY_DECLARATION: &str = "int getQuEST_PREC(void);";

/// Replace every occurrence of the precision placeholder.
///
/// This is a plain text replacement: the placeholder is also replaced
/// where it appears inside a longer identifier.
pub fn substitute_precision(text: &str, precision: Precision) -> String {
    text.replace(PRECISION_PLACEHOLDER, precision.c_type())
}

/// A cleaned, directive-free declaration set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cdef {
    precision: Precision,
    text: String,
}

impl Cdef {
    /// The declaration text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The precision the placeholder was resolved to.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Number of declaration lines.
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Consume into the declaration text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Builder for a [`Cdef`] from raw header lines.
#[derive(Debug, Clone)]
pub struct CdefBuilder<'a> {
    precision: Precision,
    header_lines: Vec<&'a str>,
    supplemental: bool,
}

impl<'a> CdefBuilder<'a> {
    /// Create a builder for the given precision.
    pub fn new(precision: Precision) -> Self {
        CdefBuilder {
            precision,
            header_lines: Vec::new(),
            supplemental: true,
        }
    }

    /// Set the raw header lines.
    pub fn header_lines<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.header_lines = lines.into_iter().collect();
        self
    }

    /// Whether to append the supplemental and precision-query declarations.
    pub fn with_supplemental(mut self, supplemental: bool) -> Self {
        self.supplemental = supplemental;
        self
    }

    /// Filter the header, append the supplemental declarations and
    /// resolve the placeholder.
    pub fn build(self) -> Cdef {
        let total = self.header_lines.len();
        let mut lines = filter_lines(self.header_lines);

        tracing::debug!(
            "Kept {} of {} header lines ({} dropped)",
            lines.len(),
            total,
            total - lines.len()
        );

        if self.supplemental {
            lines.extend(SUPPLEMENTAL_DECLARATIONS);
            lines.push(PRECISION_QUERY_DECLARATION);
        }

        let mut joined = lines.join("\n");
        joined.push('\n');

        Cdef {
            precision: self.precision,
            text: substitute_precision(&joined, self.precision),
        }
    }
}
