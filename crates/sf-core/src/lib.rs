//! # sf-core — Core types for the SpinForge draw widget
//!
//! Shared vocabulary for the prize-draw animation engine: the static prize
//! catalog, reel strips with their icon pool builder, and build-time tuning.
//!
//! ## Architecture
//!
//! ```text
//! PrizeCatalog ──choose()──> winning Prize
//!      │
//!      └──build()──> Reel (shuffled icon pool, fixed length)
//!                      │
//!                      └── read-only input to sf-engine
//! ```
//!
//! Randomness is always injected (`rand::Rng` generics), never pulled from a
//! hidden global, so callers can substitute a seeded source.

pub mod config;
pub mod error;
pub mod prize;
pub mod reel;

pub use config::SpinTuning;
pub use error::{SfError, SfResult};
pub use prize::{Prize, PrizeCatalog};
pub use reel::{IconRef, Reel};
