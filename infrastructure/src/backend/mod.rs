//! Backend adapters: authentication and object storage

pub mod error;
pub mod gotrue;
pub mod memory;
pub mod session_store;
pub mod storage;

pub use error::BackendError;
pub use gotrue::GoTrueAuthService;
pub use memory::InMemoryAuthService;
pub use session_store::{SessionStore, StoredSession};
pub use storage::PublicObjectStorage;
