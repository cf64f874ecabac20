//! Display formatting for plans and reports.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! collections of plans are wrapped in a newtype ([`collections`]), and
//! validation reports format through [`report`]. All output is markdown so the
//! CLI can render it through the terminal renderer or print it verbatim.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Display impls  │    │    Markdown     │
//! │ (Plan, Step...) │───▶│  & Wrappers     │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: [`Plans`] wrapper for batch output
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//! - [`report`]: Display implementation for validation reports

pub mod collections;
pub mod datetime;
pub mod models;
pub mod report;

pub use collections::Plans;
pub use datetime::LocalDateTime;
