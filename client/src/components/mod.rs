//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `require_role` gates protected pages on the session context; `nav_bar`
//! renders the shared header with role-aware links and logout.

pub mod nav_bar;
pub mod require_role;
