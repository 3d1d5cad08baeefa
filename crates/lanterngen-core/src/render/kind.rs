//! Fragment kinds produced on every run.
//!
//! # Examples
//!
//! ```
//! use lanterngen_core::render::FragmentKind;
//!
//! assert_eq!(FragmentKind::Stubs.as_str(), "stubs");
//! assert_eq!(FragmentKind::Symbols.to_string(), "symbols");
//! ```

// Internal imports (std, crate)
use std::fmt;

/// The three generated text blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// Typed function-pointer declarations in the header
    Declarations,
    /// Empty stub bodies in the source file
    Stubs,
    /// Dynamic symbol loading statements in the header
    Symbols,
}

impl FragmentKind {
    /// Returns the fragment identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Declarations => "declarations",
            Self::Stubs => "stubs",
            Self::Symbols => "symbols",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
