//! Album list state owned by the app, changed only through `handle_action`
//! and `apply_event`.

use client_core::AlbumSubmission;
use shared::{
    domain::{AlbumId, UserId},
    protocol::{Album, NewAlbum},
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiAction, UiEvent};

/// In-place edit of one existing album. There is at most one, held as an
/// `Option` on the state.
///
/// The buffer is keyed by id, not by list position. The placeholder API hands
/// every created album the same id, so when several local records share an id
/// they all show as editing and a save renames all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub id: AlbumId,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    Viewing,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardView<'a> {
    Viewing(&'a Album),
    Editing {
        album: &'a Album,
        buffer: &'a EditBuffer,
    },
}

impl<'a> CardView<'a> {
    pub fn album(&self) -> &'a Album {
        match self {
            Self::Viewing(album) | Self::Editing { album, .. } => *album,
        }
    }

    pub fn mode(&self) -> CardMode {
        match self {
            Self::Viewing(_) => CardMode::Viewing,
            Self::Editing { .. } => CardMode::Editing,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AlbumsState {
    albums: Vec<Album>,
    draft: NewAlbum,
    adding: bool,
    edit: Option<EditBuffer>,
    default_user_id: UserId,
    in_flight: usize,
}

impl AlbumsState {
    pub fn new(default_user_id: UserId) -> Self {
        Self {
            albums: Vec::new(),
            draft: NewAlbum::draft(default_user_id),
            adding: false,
            edit: None,
            default_user_id,
            in_flight: 0,
        }
    }

    #[cfg(test)]
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn draft(&self) -> &NewAlbum {
        &self.draft
    }

    pub fn is_adding(&self) -> bool {
        self.adding
    }

    #[cfg(test)]
    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        self.edit.as_ref()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    #[cfg(test)]
    pub fn card_mode(&self, id: AlbumId) -> CardMode {
        match &self.edit {
            Some(buffer) if buffer.id == id => CardMode::Editing,
            _ => CardMode::Viewing,
        }
    }

    pub fn cards(&self) -> Vec<CardView<'_>> {
        self.albums
            .iter()
            .map(|album| match &self.edit {
                Some(buffer) if buffer.id == album.id => CardView::Editing { album, buffer },
                _ => CardView::Viewing(album),
            })
            .collect()
    }

    /// The initial fetch issued when the view comes up.
    pub fn load_command(&mut self) -> BackendCommand {
        self.in_flight += 1;
        BackendCommand::LoadAlbums
    }

    /// Undoes the in-flight bump for a command that never reached the worker.
    pub fn abandon_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn handle_action(&mut self, action: UiAction) -> Option<BackendCommand> {
        let command = match action {
            UiAction::ToggleAddForm => {
                self.adding = !self.adding;
                None
            }
            UiAction::DraftTitleChanged(title) => {
                self.draft.title = title;
                None
            }
            UiAction::SubmitDraft => Some(BackendCommand::Submit(AlbumSubmission::Create(
                self.draft.clone(),
            ))),
            UiAction::BeginEdit(id) => {
                match self.albums.iter().find(|album| album.id == id) {
                    Some(album) => {
                        self.edit = Some(EditBuffer {
                            id,
                            title: album.title.clone(),
                        });
                    }
                    None => tracing::debug!(album_id = id.0, "edit requested for unknown album"),
                }
                None
            }
            UiAction::EditTitleChanged(title) => {
                if let Some(buffer) = self.edit.as_mut() {
                    buffer.title = title;
                }
                None
            }
            UiAction::SaveEdit => self.edit.as_ref().map(|buffer| {
                BackendCommand::Submit(AlbumSubmission::Update {
                    id: buffer.id,
                    title: buffer.title.clone(),
                })
            }),
            UiAction::CancelEdit => {
                self.edit = None;
                None
            }
            UiAction::Delete(id) => Some(BackendCommand::Remove { id }),
        };

        if command.is_some() {
            self.in_flight += 1;
        }
        command
    }

    pub fn apply_event(&mut self, event: UiEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match event {
            UiEvent::AlbumsLoaded(albums) => {
                self.albums = albums;
            }
            UiEvent::AlbumCreated(album) => {
                self.albums.insert(0, album);
                self.draft = NewAlbum::draft(self.default_user_id);
                self.adding = false;
            }
            UiEvent::AlbumUpdated { id, title } => {
                for album in self.albums.iter_mut().filter(|album| album.id == id) {
                    album.title = title.clone();
                }
                self.edit = None;
            }
            UiEvent::AlbumDeleted(id) => {
                self.albums.retain(|album| album.id != id);
            }
            UiEvent::RequestFailed(err) => {
                tracing::debug!(
                    context = ?err.context(),
                    "request failed; keeping current album state"
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
