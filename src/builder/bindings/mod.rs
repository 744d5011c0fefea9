//! Declaration sets for the binding generator.
//!
//! This module turns the QuEST header into a flat list of C declarations
//! that a declaration parser without a preprocessor can read.

pub mod declarations;
pub mod filter;

pub use declarations::{
    substitute_precision, Cdef, CdefBuilder, PRECISION_QUERY_DECLARATION,
    SUPPLEMENTAL_DECLARATIONS,
};
pub use filter::{filter_lines, HeaderFilter, EXCLUDED_SYMBOL};
