//! Session token handling: decoding, storage, the navigation gate, and the
//! header display name.

pub mod claims;
pub mod display;
pub mod gate;
pub mod navigator;
pub mod store;
pub mod token_state;

pub use claims::{ClaimsDecoder, SessionClaims, SessionError};
pub use display::SessionDisplay;
pub use gate::{DenyReason, GateDecision, SessionGate, LOGIN_ROUTE};
pub use navigator::Navigator;
pub use store::{MemoryTokenStore, TokenStore};
pub use token_state::{check_session, TokenState};

/// Current unix time in seconds.
pub fn unix_now() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}
