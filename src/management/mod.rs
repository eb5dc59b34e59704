mod auth;
mod store;

pub use auth::TokenManager;
pub use store::CURSOR_KEY;
pub use store::JsonFileStore;
pub use store::KeyValueStore;
pub use store::MemoryStore;
pub use store::StoreError;
pub use store::is_track_key;
pub use store::track_key;
