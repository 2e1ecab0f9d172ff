//! # Navigation State Machine
//!
//! Which screen is up, and where "back" leads.
//!
//! ```text
//! MainMenu ── select bucket ──► FilteredList ── select title ──► download
//!    │                              │                              │
//!    │ refresh                      │ back               ok ───────┤
//!    ▼                              ▼                              │ error
//! Message ── back ──► MainMenu   MainMenu ◄────────────────────────┘
//!                                                      Message ◄───┘
//! ```
//!
//! `Navigator` owns nothing but the active state. Catalog data lives in
//! `CatalogStore`; the list screen only keeps the labels it shows.

use crate::core::filter::{Bucket, ListEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationState {
    MainMenu,
    FilteredList {
        bucket: Bucket,
        items: Vec<ListEntry>,
    },
    Message {
        text: String,
        return_to: Box<NavigationState>,
    },
}

impl NavigationState {
    /// Message screen that returns to the main menu.
    pub fn message(text: impl Into<String>) -> Self {
        NavigationState::Message {
            text: text.into(),
            return_to: Box::new(NavigationState::MainMenu),
        }
    }

    /// Where "back" goes from here.
    pub fn back_target(&self) -> NavigationState {
        match self {
            NavigationState::Message { return_to, .. } => (**return_to).clone(),
            _ => NavigationState::MainMenu,
        }
    }
}

/// Holds the active screen. There is always exactly one.
#[derive(Debug)]
pub struct Navigator {
    state: NavigationState,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            state: NavigationState::MainMenu,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn is_main_menu(&self) -> bool {
        matches!(self.state, NavigationState::MainMenu)
    }

    pub fn go_to(&mut self, next: NavigationState) {
        log::debug!("Navigate: {} -> {}", describe(&self.state), describe(&next));
        self.state = next;
    }

    pub fn back(&mut self) {
        let target = self.state.back_target();
        self.go_to(target);
    }

    /// The selectable title at `index` of the current list, if any.
    pub fn selectable_title(&self, index: usize) -> Option<&str> {
        match &self.state {
            NavigationState::FilteredList { items, .. } => match items.get(index) {
                Some(ListEntry::Title(title)) => Some(title),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(state: &NavigationState) -> String {
    match state {
        NavigationState::MainMenu => "MainMenu".to_string(),
        NavigationState::FilteredList { bucket, items } => {
            format!("FilteredList({bucket}, {} items)", items.len())
        }
        NavigationState::Message { .. } => "Message".to_string(),
    }
}
