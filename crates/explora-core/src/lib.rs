//! # explora-core: Exploration Data Model
//!
//! Types shared by every layer of the exploration front-end: the page records
//! authored upstream, the identifier newtype, and the opaque per-type payload
//! each page carries.
//!
//! ## Ordering
//!
//! Pages of one exploration are shown in ascending `ordre`. Duplicate or
//! missing values are tolerated: [`sort_by_ordre`] is stable, so pages with
//! equal `ordre` keep the order in which the backend returned them.
//!
//! ```rust
//! use explora_core::{sort_by_ordre, ExplorationPage};
//!
//! let raw = r#"[
//!     {"id": "p2", "exploration_id": "E1", "type": "quiz", "ordre": 2, "nom": "Quiz"},
//!     {"id": "p1", "exploration_id": "E1", "type": "accueil", "ordre": 1, "nom": "Bienvenue"}
//! ]"#;
//! let mut pages: Vec<ExplorationPage> = serde_json::from_str(raw).unwrap();
//! sort_by_ordre(&mut pages);
//! assert_eq!(pages[0].id, "p1");
//! ```

pub mod error;
pub mod page;
pub mod payload;

pub use error::{CoreError, CoreResult};
pub use page::{sort_by_ordre, ExplorationId, ExplorationPage};
pub use payload::PageConfig;
