//! Background image catalog and per-load selection.

use rand::Rng;
use thiserror::Error;

#[cfg(test)]
#[path = "backdrop_test.rs"]
mod backdrop_test;

/// Image paths shipped with the page, relative to the document root.
const DEFAULT_BACKGROUNDS: [&str; 6] = [
    "img/bg.png",
    "img/bg_flippers_dungeon.png",
    "img/bg_throne_room.png",
    "img/bg_ice.png",
    "img/bg_desert.png",
    "img/bg_lorule_sacred_realm.png",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("background catalog must not be empty")]
    Empty,
}

/// Ordered, fixed set of background image identifiers.
///
/// Immutable for the process lifetime; one entry is chosen per page load and
/// the choice is never persisted.
#[derive(Clone, Debug)]
pub struct BackgroundCatalog {
    entries: Vec<String>,
}

impl BackgroundCatalog {
    /// Build a catalog, rejecting an empty entry list at configuration time.
    pub fn new<I, T>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    /// The catalog of backgrounds shipped with the page.
    #[must_use]
    pub fn shipped() -> Self {
        Self {
            entries: DEFAULT_BACKGROUNDS.iter().map(ToString::to_string).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        // Construction guarantees non-emptiness; kept for the len/is_empty pair.
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Pick one entry uniformly at random.
    ///
    /// Repeated calls re-randomize; there is no stickiness across loads.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.entries.len());
        &self.entries[index]
    }
}

/// Render the single style declaration applied to the page body.
#[must_use]
pub fn style_declaration(image: &str) -> String {
    format!("background-image: url(\"{image}\");")
}
