//! Session-scoped token storage.

use parking_lot::Mutex;

/// The single storage cell holding the session token.
///
/// Login writes it, logout clears it, and staleness checks discard it. All
/// access goes through `&self`; last writer wins.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);

    /// Remove `token` only if it is still the stored value, so a stale
    /// check never wipes a token written by a newer login.
    fn discard(&self, token: &str);
}

/// In-memory [`TokenStore`]. Also tracks whether the cell changed since it
/// was created, which lets the web layer decide whether to touch the cookie.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: Mutex<Cell>,
}

#[derive(Debug, Default)]
struct Cell {
    token: Option<String>,
    dirty: bool,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a previously persisted token.
    pub fn with_token(token: Option<String>) -> Self {
        Self {
            inner: Mutex::new(Cell {
                token,
                dirty: false,
            }),
        }
    }

    /// True once the stored value has been written or removed.
    pub fn is_dirty(&self) -> bool {
        self.inner.lock().dirty
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.inner.lock().token.clone()
    }

    fn save(&self, token: &str) {
        let mut cell = self.inner.lock();
        cell.token = Some(token.to_string());
        cell.dirty = true;
    }

    fn clear(&self) {
        let mut cell = self.inner.lock();
        if cell.token.take().is_some() {
            cell.dirty = true;
        }
    }

    fn discard(&self, token: &str) {
        let mut cell = self.inner.lock();
        if cell.token.as_deref() == Some(token) {
            cell.token = None;
            cell.dirty = true;
        }
    }
}
