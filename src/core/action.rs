//! # Actions
//!
//! Everything that can happen in ADFetch becomes an `Action`.
//! User picks a letter? That's `Action::SelectBucket(bucket)`.
//! A download finishes? That's `Action::DownloadFinished { .. }`.
//!
//! `update()` takes the current state and an action and moves the app to its
//! next state. It does no I/O. When a transition needs the network it
//! returns an `Effect`; the runner in dispatch.rs performs it and feeds the
//! outcome back in as another action.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//!                                              │
//!            outcome Action  ◄──  perform() ◄──┘
//! ```

use log::{debug, info, warn};

use crate::core::error::AppError;
use crate::core::filter::{Bucket, ListEntry};
use crate::core::navigation::NavigationState;
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    // User actions
    SelectBucket(Bucket),
    /// Row index in the current filtered list.
    SelectItem(usize),
    RequestRefresh,
    Back,
    SetTargetDirectory(String),
    SetSourceUrl(String),
    Quit,

    // Outcomes of effects
    BucketLoaded {
        bucket: Bucket,
        result: Result<Vec<ListEntry>, AppError>,
    },
    RefreshFinished(Result<usize, AppError>),
    DownloadFinished {
        title: String,
        result: Result<u64, AppError>,
    },
}

/// Work `update()` asks the runtime to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    OpenBucket(Bucket),
    RefreshCatalog,
    Download(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,

        Action::Back => {
            app.navigator.back();
            Effect::None
        }

        Action::SetTargetDirectory(dir) if app.navigator.is_main_menu() => {
            app.settings.target_directory = dir;
            Effect::None
        }

        Action::SetSourceUrl(url) if app.navigator.is_main_menu() => {
            app.settings.source_url = url;
            Effect::None
        }

        Action::SelectBucket(bucket) if app.navigator.is_main_menu() => {
            app.is_busy = true;
            app.status_message = format!("Loading {bucket}...");
            Effect::OpenBucket(bucket)
        }

        Action::RequestRefresh if app.navigator.is_main_menu() => {
            app.is_busy = true;
            app.status_message = String::from("Refreshing catalog...");
            Effect::RefreshCatalog
        }

        Action::SelectItem(index) => match app.navigator.selectable_title(index) {
            Some(title) => {
                let title = title.to_string();
                app.is_busy = true;
                app.status_message = format!("Downloading {title}...");
                Effect::Download(title)
            }
            None => {
                debug!("Ignoring selection of non-selectable row {}", index);
                Effect::None
            }
        },

        Action::BucketLoaded { bucket, result } => {
            app.is_busy = false;
            match result {
                Ok(items) => {
                    app.status_message = format!("{} titles under {bucket}", count_titles(&items));
                    app.navigator.go_to(NavigationState::FilteredList { bucket, items });
                }
                Err(e) => {
                    warn!("Could not open bucket {}: {}", bucket, e);
                    app.status_message = String::from("Catalog unavailable");
                    app.navigator.go_to(NavigationState::message(e.to_string()));
                }
            }
            Effect::None
        }

        Action::RefreshFinished(result) => {
            app.is_busy = false;
            let text = match result {
                Ok(count) => {
                    app.status_message = format!("{count} entries loaded");
                    format!("Catalog refreshed successfully. {count} entries loaded.")
                }
                Err(e) => {
                    warn!("Refresh failed: {}", e);
                    app.status_message = String::from("Refresh failed");
                    e.to_string()
                }
            };
            app.navigator.go_to(NavigationState::message(text));
            Effect::None
        }

        Action::DownloadFinished { title, result } => {
            app.is_busy = false;
            match result {
                Ok(bytes) => {
                    info!("Download of '{}' complete", title);
                    app.status_message = format!("Saved {title} ({bytes} bytes)");
                    app.navigator.go_to(NavigationState::MainMenu);
                }
                Err(e) => {
                    app.status_message = format!("Failed to download {title}");
                    app.navigator.go_to(NavigationState::message(e.to_string()));
                }
            }
            Effect::None
        }

        other => {
            debug!("Action {:?} ignored in current state", other);
            Effect::None
        }
    }
}

fn count_titles(items: &[ListEntry]) -> usize {
    items.iter().filter(|item| item.is_selectable()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{CatalogFailure, TransferFailure};
    use crate::test_support::test_app;
    use crate::transport::TransportError;

    fn list_of(titles: &[&str]) -> Vec<ListEntry> {
        titles.iter().map(|t| ListEntry::Title(t.to_string())).collect()
    }

    #[test]
    fn test_select_bucket_requests_open() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SelectBucket(Bucket::Letter('A')));
        assert_eq!(effect, Effect::OpenBucket(Bucket::Letter('A')));
        assert!(app.is_busy);
    }

    #[test]
    fn test_bucket_loaded_shows_list() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::BucketLoaded {
                bucket: Bucket::Letter('A'),
                result: Ok(list_of(&["Agony"])),
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(
            app.navigator.state(),
            &NavigationState::FilteredList {
                bucket: Bucket::Letter('A'),
                items: list_of(&["Agony"]),
            }
        );
        assert!(!app.is_busy);
    }

    #[test]
    fn test_bucket_load_failure_shows_message() {
        let mut app = test_app();
        update(
            &mut app,
            Action::BucketLoaded {
                bucket: Bucket::Digits,
                result: Err(AppError::Catalog(CatalogFailure::Empty)),
            },
        );
        assert_eq!(
            app.navigator.state(),
            &NavigationState::message("Failed to refresh catalog: catalog is empty")
        );
    }

    #[test]
    fn test_select_item_downloads_title() {
        let mut app = test_app();
        app.navigator.go_to(NavigationState::FilteredList {
            bucket: Bucket::Letter('A'),
            items: list_of(&["Agony", "Alien Breed"]),
        });
        let effect = update(&mut app, Action::SelectItem(1));
        assert_eq!(effect, Effect::Download("Alien Breed".to_string()));
    }

    #[test]
    fn test_select_placeholder_does_nothing() {
        let mut app = test_app();
        app.navigator.go_to(NavigationState::FilteredList {
            bucket: Bucket::Letter('Q'),
            items: vec![ListEntry::NoResults],
        });
        let effect = update(&mut app, Action::SelectItem(0));
        assert_eq!(effect, Effect::None);
        assert!(!app.is_busy);
    }

    #[test]
    fn test_download_success_returns_to_menu() {
        let mut app = test_app();
        app.navigator.go_to(NavigationState::FilteredList {
            bucket: Bucket::Letter('A'),
            items: list_of(&["Agony"]),
        });
        update(
            &mut app,
            Action::DownloadFinished {
                title: "Agony".into(),
                result: Ok(901120),
            },
        );
        assert!(app.navigator.is_main_menu());
        assert_eq!(app.status_message, "Saved Agony (901120 bytes)");
    }

    #[test]
    fn test_download_failure_shows_message_returning_to_menu() {
        let mut app = test_app();
        update(
            &mut app,
            Action::DownloadFinished {
                title: "Agony".into(),
                result: Err(AppError::Transfer(TransferFailure::Transport(
                    TransportError::Status { status: 404 },
                ))),
            },
        );
        let NavigationState::Message { text, return_to } = app.navigator.state() else {
            panic!("expected message screen");
        };
        assert_eq!(text, "Download failed: server responded with HTTP 404");
        assert_eq!(**return_to, NavigationState::MainMenu);
    }

    #[test]
    fn test_refresh_outcomes_both_show_message() {
        let mut app = test_app();
        update(&mut app, Action::RefreshFinished(Ok(3)));
        assert_eq!(
            app.navigator.state(),
            &NavigationState::message("Catalog refreshed successfully. 3 entries loaded.")
        );

        update(&mut app, Action::Back);
        update(
            &mut app,
            Action::RefreshFinished(Err(AppError::Config("Catalog source URL is not set.".into()))),
        );
        assert_eq!(
            app.navigator.state(),
            &NavigationState::message("Catalog source URL is not set.")
        );
    }

    #[test]
    fn test_settings_edits_only_on_main_menu() {
        let mut app = test_app();
        update(&mut app, Action::SetTargetDirectory("/tmp/adf".into()));
        assert_eq!(app.settings.target_directory, "/tmp/adf");

        app.navigator.go_to(NavigationState::message("busy"));
        update(&mut app, Action::SetSourceUrl("http://elsewhere".into()));
        assert_eq!(app.settings.source_url, "http://feed/catalog.json");
    }

    #[test]
    fn test_refresh_ignored_outside_menu() {
        let mut app = test_app();
        app.navigator.go_to(NavigationState::message("hello"));
        assert_eq!(update(&mut app, Action::RequestRefresh), Effect::None);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
