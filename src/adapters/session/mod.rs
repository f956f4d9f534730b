//! Session Store Adapters
//!
//! Implementations of the SessionStore port for holding in-progress answers.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - Keeps accumulators in process memory
//! - **FileSessionStore** - Stores one YAML file per session on disk
//!
//! Both expire entries a fixed time after their last write.
//!
//! ## Usage
//!
//! ```ignore
//! use std::time::Duration;
//! use adapters::session::{FileSessionStore, InMemorySessionStore};
//!
//! let store = InMemorySessionStore::new(Duration::from_secs(86_400));
//! let store = FileSessionStore::new("./data/sessions", Duration::from_secs(86_400));
//! ```

mod file_session_store;
mod in_memory_session_store;

pub use file_session_store::FileSessionStore;
pub use in_memory_session_store::InMemorySessionStore;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::survey::Responses;

/// Accumulator plus its expiry, as kept by every adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    expires_at: Timestamp,
    responses: Responses,
}

impl StoredSession {
    fn new(responses: Responses, ttl: Duration) -> Self {
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        Self {
            expires_at: Timestamp::now().plus_seconds(ttl_secs),
            responses,
        }
    }

    fn is_live(&self, now: &Timestamp) -> bool {
        self.expires_at.is_after(now)
    }
}
