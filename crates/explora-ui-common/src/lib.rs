//! # explora UI Common
//!
//! Shared services for exploration front-ends (terminal today, any other host
//! tomorrow). Hosts only draw [`PageView`]s and forward user actions; every
//! decision about what to show lives here.
//!
//! ## Architecture
//!
//! ```text
//! exploration id ──► PageDataSource ──► ordered pages
//!                                          │
//!                    PageRegistry ◄── ExplorationPageDispatcher
//!                                          │
//!                                  ExplorationRuntime ──► Screen
//! ```
//!
//! ## Core Components
//!
//! - [`PageDataSource`]: cached, single-flight page reads with a staleness window
//! - [`PageRegistry`]: page-type tag to renderer lookup, with a generic fallback
//! - [`ExplorationPageDispatcher`]: loading/empty/error/ready/completed state machine
//! - [`ExplorationRuntime`]: screen composition with exploration-keyed overlays
//! - [`ExplorationService`]: owns configuration and wires everything together
//!
//! ## Usage
//!
//! ```ignore
//! use explora_ui_common::ExplorationService;
//!
//! let service = ExplorationService::new()?;
//! let runtime = service.runtime();
//!
//! runtime.load(Some("E1")).await;
//! let screen = runtime.screen();
//! ```

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod events;
pub mod registry;
pub mod renderers;
pub mod runtime;
pub mod service;
pub mod source;
pub mod view;

// Re-exports for convenience
pub use config::{BackendConfig, CacheConfig, ExploraConfig, FloatingActionRule, RuntimeConfig};
pub use dispatcher::{DispatchState, ExplorationPageDispatcher};
pub use error::{Error, Result};
pub use events::DispatchEvent;
pub use registry::{PageRegistry, PageRenderer, Resolved};
pub use runtime::{ExplorationRuntime, Overlay, Screen, ScreenBody};
pub use service::{ExplorationService, ExplorationServiceBuilder};
pub use source::{FetchOutcome, PageDataSource};
pub use view::{Advance, Block, PageView};
