use crate::types::UserProfile;

use super::{ApiError, SpotifyClient, check_status};

impl SpotifyClient {
    /// `GET /me`, used to resolve the owner id for new playlists.
    pub async fn get_current_user(&self) -> Result<UserProfile, ApiError> {
        let api_url = format!("{uri}/me", uri = self.base_url());

        let response = self
            .http()
            .get(&api_url)
            .bearer_auth(self.token())
            .send()
            .await?;
        let response = check_status(response).await?;

        Ok(response.json::<UserProfile>().await?)
    }
}
