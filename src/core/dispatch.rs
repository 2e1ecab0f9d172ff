//! # Effect Runner
//!
//! Performs the I/O an `Effect` asks for and turns the result into the
//! matching outcome `Action`. Everything runs to completion before the next
//! user action is read: no cancellation, no parallel transfers.

use std::convert::Infallible;

use log::{debug, info};

use crate::core::action::{Action, Effect, update};
use crate::core::download::DownloadController;
use crate::core::error::{AppError, CatalogFailure};
use crate::core::filter::{self, Bucket, ListEntry};
use crate::core::state::App;
use crate::transport::HttpSource;

/// Runs `effect`, returning the outcome to feed back into `update`.
pub async fn perform(app: &mut App, source: &dyn HttpSource, effect: Effect) -> Option<Action> {
    match effect {
        Effect::None | Effect::Quit => None,
        Effect::OpenBucket(bucket) => {
            let result = open_bucket(app, source, bucket).await;
            Some(Action::BucketLoaded { bucket, result })
        }
        Effect::RefreshCatalog => {
            let result = app.catalog.refresh(source, &app.settings.source_url).await;
            Some(Action::RefreshFinished(result))
        }
        Effect::Download(title) => {
            let result = DownloadController::new(source)
                .download(&mut app.catalog, &app.settings, &title)
                .await;
            Some(Action::DownloadFinished { title, result })
        }
    }
}

/// Feed `action` through `update`, performing effects until the app settles.
///
/// Returns the final effect (`Effect::Quit` or `Effect::None`).
pub async fn drive(app: &mut App, source: &dyn HttpSource, action: Action) -> Effect {
    match drive_with(app, source, action, |_| Ok::<(), Infallible>(())).await {
        Ok(effect) => effect,
        Err(never) => match never {},
    }
}

/// Like `drive`, calling `before_effect` each time an effect is about to run.
///
/// The TUI uses the hook to paint its busy frame. An error from the hook
/// stops the loop before the effect starts.
pub async fn drive_with<E>(
    app: &mut App,
    source: &dyn HttpSource,
    action: Action,
    mut before_effect: impl FnMut(&App) -> Result<(), E>,
) -> Result<Effect, E> {
    let mut effect = update(app, action);
    while !matches!(effect, Effect::None | Effect::Quit) {
        before_effect(&*app)?;
        let Some(outcome) = perform(app, source, effect.clone()).await else {
            break;
        };
        debug!("Effect outcome: {:?}", outcome);
        effect = update(app, outcome);
    }
    Ok(effect)
}

/// Filter the catalog for `bucket`, populating it first if it has never loaded.
async fn open_bucket(
    app: &mut App,
    source: &dyn HttpSource,
    bucket: Bucket,
) -> Result<Vec<ListEntry>, AppError> {
    if app.catalog.is_empty() {
        info!("Catalog empty on first selection, refreshing");
        app.catalog.refresh(source, &app.settings.source_url).await?;
        if app.catalog.is_empty() {
            return Err(AppError::Catalog(CatalogFailure::Empty));
        }
    }
    Ok(filter::matches(&app.catalog.snapshot(), bucket))
}
