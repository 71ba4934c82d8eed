//! # Core Shell Logic
//!
//! This module contains the shell's business logic. It knows nothing about
//! any specific rendering substrate.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (shell data)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Search engine        │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┼───────────────┐
//!                ▼               ▼               ▼
//!         ┌────────────┐  ┌────────────┐  ┌────────────┐
//!         │    TUI     │  │  content   │  │  another   │
//!         │  Adapter   │  │  (fetch +  │  │  adapter   │
//!         │ (ratatui)  │  │   cache)   │  │  (future)  │
//!         └────────────┘  └────────────┘  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all shell state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`search`]: Hidden keywords, full-text scan, snippet highlighting

pub mod action;
pub mod search;
pub mod state;
