pub mod auth_emulator;
pub mod auth_state;
pub mod error;
pub mod session_context;
pub mod session_events;

pub use auth_emulator::AuthEmulator;
pub use auth_state::AuthState;
pub use error::{AuthError, Result};
pub use session_context::SessionContext;
pub use session_events::{SessionEvents, SessionListener, Subscription};
