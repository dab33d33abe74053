//! quizstore-core — Quiz model, scoring, and the session state machine.
//!
//! This crate owns everything that decides what a quiz session looks like:
//! the catalog data model, the point/summary rules, the session transitions,
//! and the persistence hook that mirrors each accepted transition to storage.

pub mod error;
pub mod model;
pub mod persist;
pub mod report;
pub mod scoring;
pub mod session;
pub mod store;
pub mod traits;

pub use error::StoreError;
pub use model::{Question, Quiz, QuizCatalog};
pub use persist::{Persistence, SCHEMA_VERSION, STORAGE_KEY};
pub use scoring::{EffortLevel, ScoreSummary};
pub use session::{Phase, QuizSession, SessionState, Transition};
