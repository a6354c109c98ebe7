//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only cross-page state in this app; page-local state
//! lives in page components. A single `RwSignal<SessionState>` is created
//! at the application root and provided via context.

pub mod session;
