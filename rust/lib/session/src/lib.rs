//! Session storage for MedAdmin clients.
//!
//! A session is a flat string-to-string map holding the bearer tokens and
//! cached user objects of each signed-in account (`admin_token`,
//! `staff_user`, ...). The API client reads and clears these keys; the
//! backing store decides where they live.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::SessionError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::SessionStore;
