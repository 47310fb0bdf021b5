//! Prize catalog and uniform prize selection

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::{SfError, SfResult};
use crate::reel::IconRef;

/// A drawable prize
///
/// Immutable; defined once in the static catalog at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    /// Unique prize ID
    pub id: String,
    /// Display name for the result panel
    pub name: String,
    /// Description text for the result panel
    pub description: String,
    /// Icon shown on the reel strips
    pub icon: IconRef,
}

impl Prize {
    /// Create a prize definition
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: IconRef,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon,
        }
    }
}

/// Static, non-empty prize catalog
///
/// Catalog size is small in practice (three snack prizes in the shipped
/// widget) but any N ≥ 1 works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeCatalog {
    prizes: Vec<Prize>,
}

impl PrizeCatalog {
    /// Create a catalog, rejecting an empty prize list
    pub fn new(prizes: Vec<Prize>) -> SfResult<Self> {
        if prizes.is_empty() {
            return Err(SfError::EmptyCatalog);
        }
        Ok(Self { prizes })
    }

    /// Number of prizes
    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    /// Always false: construction rejects empty catalogs
    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    /// All prizes in catalog order
    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    /// Look up a prize by ID
    pub fn get(&self, id: &str) -> Option<&Prize> {
        self.prizes.iter().find(|p| p.id == id)
    }

    /// Icon list in catalog order (one entry per prize)
    pub fn icons(&self) -> Vec<IconRef> {
        self.prizes.iter().map(|p| p.icon.clone()).collect()
    }

    /// Pick one winning prize uniformly at random.
    ///
    /// Pure aside from advancing the RNG; each prize has probability 1/N.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Prize {
        self.prizes
            .choose(rng)
            .expect("catalog is non-empty by construction")
    }
}
