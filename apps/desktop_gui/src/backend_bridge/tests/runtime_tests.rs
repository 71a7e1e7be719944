use std::{sync::Mutex, thread, time::Duration};

use super::*;
use async_trait::async_trait;
use client_core::{AlbumOperation, AlbumSubmission, ErrorCategory, StatusCode};
use crossbeam_channel::bounded;
use shared::{
    domain::{AlbumId, UserId},
    protocol::{Album, NewAlbum},
};

const MISSING_ALBUM: AlbumId = AlbumId(404);

#[derive(Default)]
struct FakeAlbums {
    calls: Mutex<Vec<String>>,
}

impl FakeAlbums {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().expect("calls lock").push(call.into());
    }
}

#[async_trait]
impl AlbumsHandle for FakeAlbums {
    async fn load(&self) -> client_core::Result<Vec<Album>> {
        self.record("load");
        Ok(vec![Album {
            user_id: UserId(1),
            id: AlbumId(1),
            title: "quidem molestiae enim".to_string(),
        }])
    }

    async fn submit(&self, submission: AlbumSubmission) -> client_core::Result<SubmitOutcome> {
        self.record(submission.operation().as_str());
        match submission {
            AlbumSubmission::Create(draft) => Ok(SubmitOutcome::Created(Album {
                user_id: draft.user_id,
                id: AlbumId(101),
                title: draft.title,
            })),
            AlbumSubmission::Update { id, title } => Ok(SubmitOutcome::Updated { id, title }),
        }
    }

    async fn remove(&self, id: AlbumId) -> client_core::Result<()> {
        self.record(format!("remove:{}", id.0));
        if id == MISSING_ALBUM {
            return Err(ClientError::Status {
                operation: AlbumOperation::Delete,
                status: StatusCode::NOT_FOUND,
            });
        }
        Ok(())
    }
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("test runtime")
        .block_on(future)
}

#[test]
fn execute_maps_outcomes_to_ui_events() {
    let fake = FakeAlbums::default();

    let created = block_on(execute(
        &fake,
        BackendCommand::Submit(AlbumSubmission::Create(NewAlbum {
            user_id: UserId(1),
            id: AlbumId(0),
            title: "Road Trip".to_string(),
        })),
    ));
    assert_eq!(
        created,
        UiEvent::AlbumCreated(Album {
            user_id: UserId(1),
            id: AlbumId(101),
            title: "Road Trip".to_string(),
        })
    );

    let updated = block_on(execute(
        &fake,
        BackendCommand::Submit(AlbumSubmission::Update {
            id: AlbumId(5),
            title: "New Title".to_string(),
        }),
    ));
    assert_eq!(
        updated,
        UiEvent::AlbumUpdated {
            id: AlbumId(5),
            title: "New Title".to_string(),
        }
    );

    let deleted = block_on(execute(&fake, BackendCommand::Remove { id: AlbumId(7) }));
    assert_eq!(deleted, UiEvent::AlbumDeleted(AlbumId(7)));
}

#[test]
fn execute_turns_client_errors_into_request_failures() {
    let fake = FakeAlbums::default();

    let event = block_on(execute(&fake, BackendCommand::Remove { id: MISSING_ALBUM }));

    let err = match event {
        UiEvent::RequestFailed(err) => err,
        other => panic!("expected failure event, got {other:?}"),
    };
    assert_eq!(err.context(), UiErrorContext::DeleteAlbum);
    assert_eq!(err.category(), ErrorCategory::Status);
    assert!(err.message().contains("404"), "unexpected message: {}", err.message());
}

#[test]
fn launched_worker_answers_every_command() {
    let fake = Arc::new(FakeAlbums::default());
    let (cmd_tx, cmd_rx) = bounded(8);
    let (ui_tx, ui_rx) = bounded(8);
    let worker = launch(cmd_rx, ui_tx, fake.clone());

    cmd_tx.send(BackendCommand::LoadAlbums).expect("queue load");
    cmd_tx
        .send(BackendCommand::Remove { id: MISSING_ALBUM })
        .expect("queue remove");

    let mut events = Vec::new();
    for _ in 0..2 {
        events.push(
            ui_rx
                .recv_timeout(Duration::from_secs(5))
                .expect("worker event"),
        );
    }

    assert!(events
        .iter()
        .any(|event| matches!(event, UiEvent::AlbumsLoaded(albums) if albums.len() == 1)));
    assert!(events
        .iter()
        .any(|event| matches!(event, UiEvent::RequestFailed(_))));

    drop(cmd_tx);
    worker.join().expect("worker exits once the queue closes");

    let mut calls = fake.calls.lock().expect("calls lock").clone();
    calls.sort();
    assert_eq!(calls, vec!["load".to_string(), "remove:404".to_string()]);
}

#[test]
fn deliver_waits_for_room_instead_of_dropping() {
    let (ui_tx, ui_rx) = bounded(1);
    deliver(&ui_tx, UiEvent::AlbumDeleted(AlbumId(3)));

    let sender = thread::spawn(move || deliver(&ui_tx, UiEvent::AlbumDeleted(AlbumId(7))));

    let first = ui_rx.recv_timeout(Duration::from_secs(5)).expect("first");
    let second = ui_rx.recv_timeout(Duration::from_secs(5)).expect("second");
    sender.join().expect("sender finishes once drained");

    assert_eq!(first, UiEvent::AlbumDeleted(AlbumId(3)));
    assert_eq!(second, UiEvent::AlbumDeleted(AlbumId(7)));
}

#[test]
fn deliver_to_closed_queue_returns() {
    let (ui_tx, ui_rx) = bounded(1);
    drop(ui_rx);
    deliver(&ui_tx, UiEvent::AlbumDeleted(AlbumId(3)));
}
