//! Reel strips and icon pool construction

use std::fmt;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{SfError, SfResult};
use crate::prize::PrizeCatalog;

/// Icon identity tag carried by every reel slot
///
/// Cheap to clone and compare; hosts map it to whatever asset they render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    /// Create an icon reference
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The underlying identity string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One fixed-length strip of icon slots
///
/// Built once at setup (re-buildable at any time), owned by the host's UI
/// layer. The settle engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reel {
    slots: Vec<IconRef>,
}

impl Reel {
    /// Build a shuffled icon pool of exactly `target_len` slots.
    ///
    /// The full catalog icon list is replicated until it exceeds `target_len`,
    /// permuted uniformly (Fisher–Yates), then truncated. Every catalog icon
    /// appears roughly `target_len / N` times; exact balance at the truncation
    /// boundary is cosmetic and not guaranteed.
    pub fn build<R: Rng + ?Sized>(
        catalog: &PrizeCatalog,
        target_len: usize,
        rng: &mut R,
    ) -> SfResult<Self> {
        if target_len == 0 {
            return Err(SfError::InvalidPoolLength(target_len));
        }
        if catalog.is_empty() {
            return Err(SfError::EmptyCatalog);
        }

        let unique = catalog.icons();
        let copies = target_len / unique.len() + 1;

        let mut pool: Vec<IconRef> = Vec::with_capacity(copies * unique.len());
        for _ in 0..copies {
            pool.extend(unique.iter().cloned());
        }

        pool.shuffle(rng);
        pool.truncate(target_len);

        debug!(
            "built {}-slot pool from {} catalog icons",
            target_len,
            unique.len()
        );
        Ok(Self { slots: pool })
    }

    /// Wrap an explicit slot sequence (rejects empty strips)
    pub fn from_slots(slots: Vec<IconRef>) -> SfResult<Self> {
        if slots.is_empty() {
            return Err(SfError::InvalidPoolLength(0));
        }
        Ok(Self { slots })
    }

    /// Number of icon slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: construction rejects empty strips
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Ordered slot icons
    pub fn slots(&self) -> &[IconRef] {
        &self.slots
    }

    /// Icon at a slot index
    pub fn icon_at(&self, index: usize) -> Option<&IconRef> {
        self.slots.get(index)
    }

    /// Deepest slot showing the given icon (scanned from the end of the
    /// strip), so a settle targeting it travels far before resting
    pub fn deepest_match(&self, icon: &IconRef) -> Option<usize> {
        self.slots.iter().rposition(|slot| slot == icon)
    }
}
