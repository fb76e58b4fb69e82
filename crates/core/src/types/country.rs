//! Shipping destination countries.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when normalizing a [`Country`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CountryError {
    /// The destination is not a country orders ship to.
    #[error("unsupported destination country: {0}")]
    Unsupported(String),
}

/// A destination country orders can ship to.
///
/// Only France is supported. An empty value, `france` or `fr` (any case) is
/// read as France; anything else is rejected.
///
/// ## Examples
///
/// ```
/// use order_gate_core::Country;
///
/// assert_eq!(Country::normalize("").unwrap(), Country::France);
/// assert_eq!(Country::normalize("FR").unwrap(), Country::France);
/// assert_eq!(Country::normalize("France").unwrap().as_str(), "France");
/// assert!(Country::normalize("Espagne").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    France,
}

impl Country {
    const FRANCE_ALIASES: &'static [&'static str] = &["", "france", "fr"];

    /// Normalize a free-text country into a supported [`Country`].
    ///
    /// # Errors
    ///
    /// Returns [`CountryError::Unsupported`] for any value that is not an
    /// alias of a supported country.
    pub fn normalize(s: &str) -> Result<Self, CountryError> {
        if Self::FRANCE_ALIASES
            .iter()
            .any(|alias| s.eq_ignore_ascii_case(alias))
        {
            Ok(Self::France)
        } else {
            Err(CountryError::Unsupported(s.to_owned()))
        }
    }

    /// The canonical name stored on orders.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::France => "France",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
