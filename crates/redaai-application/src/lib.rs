//! Observable client-side stores for the RedaAI app.
//!
//! The stores own the session, profile, and essay state. Consumers
//! mutate them through action methods and observe changes through the
//! event subscriptions; the stores orchestrate the API clients and the
//! token repository underneath.

pub mod essay_store;
pub mod event;
mod loading;
mod publisher;
pub mod session_store;
pub mod user_store;

pub use essay_store::EssayStore;
pub use event::{EssayEvent, SessionEvent};
pub use session_store::SessionStore;
pub use user_store::UserStore;
