use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::UserId;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiAction, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::AlbumsState;
use crate::ui::panels;

const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct AlbumsApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: AlbumsState,
}

impl AlbumsApp {
    /// Builds the app and queues the initial album fetch.
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        default_user_id: UserId,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            state: AlbumsState::new(default_user_id),
        };
        let load = app.state.load_command();
        app.queue(load);
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.apply_event(event);
        }
    }

    fn apply_actions(&mut self, actions: Vec<UiAction>) {
        for action in actions {
            if let Some(cmd) = self.state.handle_action(action) {
                self.queue(cmd);
            }
        }
    }

    fn queue(&mut self, cmd: BackendCommand) {
        if !dispatch_backend_command(&self.cmd_tx, cmd) {
            self.state.abandon_request();
        }
    }
}

impl eframe::App for AlbumsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| panels::albums_page(ui, &self.state))
            .inner;
        self.apply_actions(actions);

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use client_core::AlbumSubmission;
    use crossbeam_channel::bounded;
    use shared::{domain::AlbumId, protocol::Album};

    use super::*;

    #[test]
    fn startup_queues_exactly_one_load() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (_ui_tx, ui_rx) = bounded(4);

        let app = AlbumsApp::new(cmd_tx, ui_rx, UserId(1));

        assert_eq!(cmd_rx.try_recv().ok(), Some(BackendCommand::LoadAlbums));
        assert!(cmd_rx.try_recv().is_err());
        assert_eq!(app.state.in_flight(), 1);
    }

    #[test]
    fn completions_flow_into_state_and_actions_into_queue() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(4);
        let mut app = AlbumsApp::new(cmd_tx, ui_rx, UserId(1));
        let _ = cmd_rx.try_recv();

        ui_tx
            .send(UiEvent::AlbumsLoaded(vec![Album {
                user_id: UserId(1),
                id: AlbumId(5),
                title: "fifth".to_string(),
            }]))
            .expect("deliver");
        app.process_ui_events();
        assert_eq!(app.state.albums().len(), 1);
        assert_eq!(app.state.in_flight(), 0);

        app.apply_actions(vec![
            UiAction::BeginEdit(AlbumId(5)),
            UiAction::EditTitleChanged("New Title".to_string()),
            UiAction::SaveEdit,
        ]);

        assert_eq!(
            cmd_rx.try_recv().ok(),
            Some(BackendCommand::Submit(AlbumSubmission::Update {
                id: AlbumId(5),
                title: "New Title".to_string(),
            }))
        );
    }

    #[test]
    fn unqueued_command_does_not_leave_request_pending() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (_ui_tx, ui_rx) = bounded(4);
        drop(cmd_rx);

        let mut app = AlbumsApp::new(cmd_tx, ui_rx, UserId(1));
        app.apply_actions(vec![UiAction::Delete(AlbumId(7))]);

        assert_eq!(app.state.in_flight(), 0);
    }
}
