//! # TUI Components
//!
//! All widgets of the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `StatusBar`: status line under the active screen
//! - `MessageBox`: outcome text plus a "Back to Menu" button
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state and emit events:
//! - `MenuState` / `MainMenu`: settings fields, refresh button, bucket grid
//! - `EntryListState` / `EntryList`: titles of one bucket
//! - `TextField`: single-line editor used by the menu
//!
//! Stateful components follow the persistent state + transient wrapper
//! pattern: the `*State` struct lives in `TuiState`, the wrapper is built each
//! frame with borrowed state and the props it needs.
//!
//! Components never read `App` directly. Data arrives as props and user
//! intent leaves as events, which `tui::run` turns into core actions.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── status_bar.rs    (status line)
//! ├── message_box.rs   (message screen)
//! ├── main_menu.rs     (main menu + bucket grid)
//! ├── entry_list.rs    (filtered list)
//! └── text_field.rs    (single-line edit)
//! ```

pub mod entry_list;
pub mod main_menu;
pub mod message_box;
mod status_bar;
pub mod text_field;

pub use entry_list::{EntryList, EntryListState, ListEvent};
pub use main_menu::{MainMenu, MenuEvent, MenuState};
pub use message_box::MessageBox;
pub use status_bar::StatusBar;
