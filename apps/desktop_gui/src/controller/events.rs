//! UI intents, backend completions, and error modeling for the albums controller.

use client_core::{AlbumOperation, ClientError, ErrorCategory};
use shared::{domain::AlbumId, protocol::Album};

/// Something the user did on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    ToggleAddForm,
    DraftTitleChanged(String),
    SubmitDraft,
    BeginEdit(AlbumId),
    EditTitleChanged(String),
    SaveEdit,
    CancelEdit,
    Delete(AlbumId),
}

/// A finished backend request, delivered back to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    AlbumsLoaded(Vec<Album>),
    AlbumCreated(Album),
    AlbumUpdated { id: AlbumId, title: String },
    AlbumDeleted(AlbumId),
    RequestFailed(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    LoadAlbums,
    CreateAlbum,
    UpdateAlbum,
    DeleteAlbum,
}

impl From<AlbumOperation> for UiErrorContext {
    fn from(value: AlbumOperation) -> Self {
        match value {
            AlbumOperation::Load => Self::LoadAlbums,
            AlbumOperation::Create => Self::CreateAlbum,
            AlbumOperation::Update => Self::UpdateAlbum,
            AlbumOperation::Delete => Self::DeleteAlbum,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: ErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_client_error(context: UiErrorContext, err: &ClientError) -> Self {
        Self {
            category: err.category(),
            context,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
