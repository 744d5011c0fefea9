//! Preprocessor-directive filtering for the QuEST header.
//!
//! The binding generator only understands plain C declarations, so the
//! header is reduced line by line before it is handed over. Conditional
//! blocks are tracked one level deep only: an `#endif` always returns to
//! the default region, even if it closes an inner block of a region that
//! is still being dropped.

/// Symbol whose declarations are never passed to the binding generator.
pub const EXCLUDED_SYMBOL: &str = "getEnvironmentString";

const CPLUSPLUS_GUARD: &str = "#ifndef __cplusplus";

/// Line-oriented filter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFilter {
    /// Outside any `#ifdef` block.
    no_def: bool,
    /// Inside a `#ifndef __cplusplus` block.
    skip: bool,
}

impl Default for HeaderFilter {
    fn default() -> Self {
        HeaderFilter {
            no_def: true,
            skip: false,
        }
    }
}

impl HeaderFilter {
    /// Create a filter in the default region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line, returning whether it is kept.
    pub fn accept(&mut self, line: &str) -> bool {
        if line.contains(EXCLUDED_SYMBOL) {
            return false;
        }

        if self.skip {
            if line.starts_with("#endif") {
                self.skip = false;
            }
            return false;
        }

        if line.starts_with(CPLUSPLUS_GUARD) {
            self.skip = true;
            false
        } else if self.no_def && !line.starts_with('#') {
            true
        } else if line.starts_with("#ifdef") {
            self.no_def = false;
            false
        } else if line.starts_with("#endif") {
            self.no_def = true;
            false
        } else {
            false
        }
    }

    /// Whether the filter is outside any `#ifdef` block.
    pub fn in_default_region(&self) -> bool {
        self.no_def
    }

    /// Whether the filter is discarding a `#ifndef __cplusplus` block.
    pub fn in_cplusplus_guard(&self) -> bool {
        self.skip
    }
}

/// Run a fresh filter over `lines`, returning the kept lines in order.
pub fn filter_lines<'a, I>(lines: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut filter = HeaderFilter::new();
    lines.into_iter().filter(|line| filter.accept(line)).collect()
}
