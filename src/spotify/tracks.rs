use crate::types::SavedTracksPage;

use super::{ApiError, SpotifyClient, check_status};

/// Page size for `GET /me/tracks`; 50 is the API maximum.
pub const SAVED_TRACKS_PAGE_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Retrieves one page of the user's saved tracks.
    ///
    /// With `next == None` the first page is requested; otherwise the
    /// server supplied `next` link is followed verbatim.
    ///
    /// # Arguments
    ///
    /// * `next` - `next` link of the previous page, `None` for the first
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(SavedTracksPage)` - Items of this page and the next link
    /// - `Err(ApiError)` - Transport failure, undecodable body or a
    ///   non-success status; the caller decides what to keep
    pub async fn get_saved_tracks(&self, next: Option<&str>) -> Result<SavedTracksPage, ApiError> {
        let api_url = match next {
            Some(url) => url.to_string(),
            None => format!(
                "{uri}/me/tracks?limit={limit}",
                uri = self.base_url(),
                limit = SAVED_TRACKS_PAGE_LIMIT
            ),
        };

        let response = self
            .http()
            .get(&api_url)
            .bearer_auth(self.token())
            .send()
            .await?;
        let response = check_status(response).await?;

        Ok(response.json::<SavedTracksPage>().await?)
    }
}
