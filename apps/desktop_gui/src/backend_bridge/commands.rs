//! Backend commands queued from UI to backend worker.

use client_core::AlbumSubmission;
use shared::domain::AlbumId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    LoadAlbums,
    Submit(AlbumSubmission),
    Remove { id: AlbumId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadAlbums => "load_albums",
            Self::Submit(submission) => submission.operation().as_str(),
            Self::Remove { .. } => "delete_album",
        }
    }
}
