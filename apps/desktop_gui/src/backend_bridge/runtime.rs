//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{AlbumsHandle, ClientError, SubmitOutcome};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the worker thread. Every command runs as its own task, so several
/// requests can be in flight and complete in any order.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    client: Arc<dyn AlbumsHandle>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!("backend worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                let client = Arc::clone(&client);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let event = execute(client.as_ref(), cmd).await;
                    deliver(&ui_tx, event);
                });
            }
            tracing::info!("ui command queue closed; backend worker stopping");
        });
    })
}

pub(crate) async fn execute(client: &dyn AlbumsHandle, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::LoadAlbums => match client.load().await {
            Ok(albums) => {
                tracing::info!(count = albums.len(), "loaded albums");
                UiEvent::AlbumsLoaded(albums)
            }
            Err(err) => failure(UiErrorContext::LoadAlbums, err),
        },
        BackendCommand::Submit(submission) => {
            let context = UiErrorContext::from(submission.operation());
            match client.submit(submission).await {
                Ok(SubmitOutcome::Created(album)) => {
                    tracing::info!(album_id = album.id.0, "created album");
                    UiEvent::AlbumCreated(album)
                }
                Ok(SubmitOutcome::Updated { id, title }) => {
                    tracing::info!(album_id = id.0, "updated album");
                    UiEvent::AlbumUpdated { id, title }
                }
                Err(err) => failure(context, err),
            }
        }
        BackendCommand::Remove { id } => match client.remove(id).await {
            Ok(()) => {
                tracing::info!(album_id = id.0, "deleted album");
                UiEvent::AlbumDeleted(id)
            }
            Err(err) => failure(UiErrorContext::DeleteAlbum, err),
        },
    }
}

fn failure(context: UiErrorContext, err: ClientError) -> UiEvent {
    let ui_error = UiError::from_client_error(context, &err);
    tracing::error!(
        context = ?ui_error.context(),
        category = ui_error.category().as_str(),
        "albums request failed: {}",
        ui_error.message()
    );
    UiEvent::RequestFailed(ui_error)
}

/// Blocks while the UI queue is full; a dropped completion would leave its
/// request counted as in flight.
fn deliver(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    if ui_tx.send(event).is_err() {
        tracing::debug!("ui event queue closed; dropping completion");
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
