//! Entity name management using string interning for efficient storage and comparison
//!
//! This module provides the [`EntityName`] type with an efficient
//! string-interner based approach. Two names compare equal exactly when their
//! underlying strings are byte-for-byte equal, so interned-symbol comparison
//! preserves the case-sensitive matching of diagram sources.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};
use thiserror::Error;

/// Global string interner for efficient entity name storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Errors produced when constructing an [`EntityName`] from source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name contained nothing but whitespace.
    #[error("entity name is empty after trimming")]
    Empty,
}

/// Efficient entity name type using string interning
///
/// Diagram entities are identified solely by their label strings. This type
/// provides efficient storage and comparison of those labels through string
/// interning.
///
/// # Examples
///
/// ```
/// use crowfoot_core::identifier::EntityName;
///
/// // Construct from already-clean strings
/// let customer = EntityName::new("CUSTOMER");
///
/// // Construct from raw source text (trims, rejects empty)
/// let order = EntityName::parse("  ORDER ").expect("non-empty name");
/// assert_eq!(order, "ORDER");
/// assert!(EntityName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityName(DefaultSymbol);

impl EntityName {
    /// Creates an `EntityName` from &str, interning it as given.
    ///
    /// The string is not trimmed or validated; use [`EntityName::parse`] for
    /// raw source text.
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Creates an `EntityName` from raw source text.
    ///
    /// Leading and trailing whitespace is trimmed. No other normalization is
    /// applied; matching stays case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] if nothing remains after trimming.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self::new(trimmed))
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for EntityName {
    /// Creates an `EntityName` from a string slice
    ///
    /// This is a convenience implementation that calls `EntityName::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for EntityName {
    /// Allows direct comparison with string slices: `name == "CUSTOMER"`
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for EntityName {
    /// Allows direct comparison with string references: `name == &label`
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
