//! JSON bodies exchanged with the albums REST endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::{AlbumId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub user_id: UserId,
    pub id: AlbumId,
    pub title: String,
}

/// Body of `POST /albums`. The id is a placeholder; the server assigns the real one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlbum {
    pub user_id: UserId,
    pub id: AlbumId,
    pub title: String,
}

impl NewAlbum {
    pub fn draft(user_id: UserId) -> Self {
        Self {
            user_id,
            id: AlbumId(0),
            title: String::new(),
        }
    }
}

/// Body of `PUT /albums/{id}`: only the title travels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAlbumRequest {
    pub title: String,
}

/// Whatever the server echoes back from an update. Every field is optional
/// because the local title is authoritative once the call succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedAlbum {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AlbumId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
