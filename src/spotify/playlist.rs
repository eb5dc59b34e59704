use crate::types::{
    AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
    CreatePlaylistResponse,
};

use super::{ApiError, SpotifyClient, check_status};

impl SpotifyClient {
    /// Creates a playlist owned by `user_id`.
    ///
    /// # Arguments
    ///
    /// * `user_id` - Spotify user id from `GET /me`
    /// * `request` - Name, description and visibility
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(CreatePlaylistResponse)` - Id and name of the new playlist
    /// - `Err(ApiError)` - Transport failure or a non-success status
    pub async fn create_user_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse, ApiError> {
        let api_url = format!(
            "{uri}/users/{user_id}/playlists",
            uri = self.base_url(),
            user_id = user_id
        );

        let response = self
            .http()
            .post(&api_url)
            .bearer_auth(self.token())
            .json(request)
            .send()
            .await?;
        let response = check_status(response).await?;

        Ok(response.json::<CreatePlaylistResponse>().await?)
    }

    /// Appends track URIs to a playlist. Callers keep `uris` at or below
    /// [`crate::utils::PLAYLIST_BATCH_SIZE`].
    pub async fn add_playlist_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<AddTrackToPlaylistResponse, ApiError> {
        let api_url = format!(
            "{uri}/playlists/{playlist_id}/tracks",
            uri = self.base_url(),
            playlist_id = playlist_id
        );
        let body = AddTrackToPlaylistRequest {
            uris: uris.to_vec(),
        };

        let response = self
            .http()
            .post(&api_url)
            .bearer_auth(self.token())
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;

        Ok(response.json::<AddTrackToPlaylistResponse>().await?)
    }
}
