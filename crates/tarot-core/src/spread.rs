//! Spread catalog: spread identifiers mapped to ordered position labels.
//!
//! The drawer never hardcodes position counts; adding a spread only means
//! adding a catalog entry. A catalog file is a JSON array of
//! `{"id": ..., "positions": [...]}` records.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// A named layout: one position label per card to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spread {
    /// Identifier used in commands (`three_card`).
    pub id: String,
    /// Position labels in draw order.
    pub positions: Vec<String>,
}

impl Spread {
    /// Build a spread from an id and its labels.
    pub fn new(id: impl Into<String>, positions: &[&str]) -> Self {
        Self {
            id: id.into(),
            positions: positions.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Number of cards this spread draws.
    pub fn card_count(&self) -> usize {
        self.positions.len()
    }

    /// Human-cased name ("three_card" becomes "Three Card").
    pub fn display_name(&self) -> String {
        title_case(&self.id.replace('_', " "))
    }
}

/// Read-only set of spreads, in declaration order.
#[derive(Debug, Clone)]
pub struct SpreadCatalog {
    spreads: Vec<Spread>,
}

impl SpreadCatalog {
    /// The reference catalog shipped with the bot.
    pub fn standard() -> Self {
        Self {
            spreads: vec![
                Spread::new("single", &["Present"]),
                Spread::new("three_card", &["Past", "Present", "Future"]),
                Spread::new(
                    "celtic_cross",
                    &[
                        "1. Present",
                        "2. Challenge",
                        "3. Past",
                        "4. Future",
                        "5. Above",
                        "6. Below",
                        "7. Advice",
                        "8. External",
                        "9. Hopes/Fears",
                        "10. Outcome",
                    ],
                ),
                Spread::new("relationship", &["You", "Partner", "Connection", "Advice"]),
                Spread::new(
                    "career",
                    &["Current Situation", "Challenges", "Opportunities", "Outcome"],
                ),
            ],
        }
    }

    /// Build a validated catalog: non-empty, unique ids, at least one position each.
    pub fn new(spreads: Vec<Spread>) -> CatalogResult<Self> {
        if spreads.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for spread in &spreads {
            if spread.positions.is_empty() {
                return Err(CatalogError::EmptySpread(spread.id.clone()));
            }
            if !seen.insert(spread.id.as_str()) {
                return Err(CatalogError::DuplicateSpread(spread.id.clone()));
            }
        }
        Ok(Self { spreads })
    }

    /// Parse and validate a JSON catalog.
    pub fn from_json(source: &str) -> CatalogResult<Self> {
        let spreads: Vec<Spread> = serde_json::from_str(source)?;
        Self::new(spreads)
    }

    /// Load a JSON catalog file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&source)?;
        tracing::info!(path = %path.display(), spreads = catalog.spreads.len(), "loaded spread catalog");
        Ok(catalog)
    }

    /// Look up a spread by identifier.
    pub fn resolve(&self, id: &str) -> Option<&Spread> {
        self.spreads.iter().find(|s| s.id == id)
    }

    /// All spreads in declaration order, for help and listings.
    pub fn list_all(&self) -> &[Spread] {
        &self.spreads
    }

    /// Spread identifiers in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.spreads.iter().map(|s| s.id.as_str())
    }
}

impl Default for SpreadCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Capitalize the first letter of every word, lowercase the rest.
///
/// A word starts after any non-alphabetic character, so "hopes/fears"
/// becomes "Hopes/Fears".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
