//! # sf-engine — Reel settle and spin orchestration for SpinForge
//!
//! The animated heart of the draw widget. Given a prize catalog and a set of
//! host-owned reel strips, it decides where every strip stops, how long each
//! glide lasts, and when the result may be revealed.
//!
//! ## Architecture
//!
//! ```text
//! SpinManager::spin()
//!     │
//!     ├── PrizeCatalog::choose()            (winner, decided up front)
//!     ├── SpinPlan::build()
//!     │     └── compute_settle() per reel   (stop index, jitter, duration)
//!     ├── host: snap → flush → glide        (per reel, staggered durations)
//!     └── host: schedule(reel, duration)
//!
//! host timer fires → SpinManager::reel_finished()
//!     └── joint completion → cues swap, ResultPresenter::present()
//! ```
//!
//! The engine is event-driven and single-threaded: it owns no timers and
//! never blocks. Hosts call back in when their timers fire.

pub mod curve;
pub mod host;
pub mod manager;
pub mod plan;
pub mod presenter;
pub mod session;
pub mod settle;
pub mod timing;

pub use curve::SettleCurve;
pub use host::{AudioSink, HostPorts, LayoutProbe, ReelSurface, ResultPanel, Scheduler, SpinTrigger};
pub use manager::SpinManager;
pub use plan::SpinPlan;
pub use presenter::ResultPresenter;
pub use session::{SpinPhase, SpinSession};
pub use settle::{TransitionDescriptor, compute_settle};
pub use timing::SettleTiming;
