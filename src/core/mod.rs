//! # Core Application Logic
//!
//! This module contains ADFetch's business logic.
//! It knows nothing about any specific UI technology, and it only reaches the
//! network through the `HttpSource` trait.
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │            CORE             │
//!                    │                             │
//!                    │  • CatalogStore (entries)   │
//!                    │  • filter (buckets)         │
//!                    │  • DownloadController       │
//!                    │  • Navigator (screens)      │
//!                    │  • update() (reducer)       │
//!                    └──────────────┬──────────────┘
//!                                   │
//!                   ┌───────────────┴───────────────┐
//!                   ▼                               ▼
//!            ┌────────────┐                  ┌─────────────┐
//!            │    TUI     │                  │ HttpSource  │
//!            │  Adapter   │                  │  (reqwest)  │
//!            │ (ratatui)  │                  │             │
//!            └────────────┘                  └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`dispatch`]: Runs effects and feeds their outcomes back
//! - [`catalog`], [`filter`], [`download`], [`navigation`]: the components

pub mod action;
pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod download;
pub mod error;
pub mod filter;
pub mod navigation;
pub mod state;
