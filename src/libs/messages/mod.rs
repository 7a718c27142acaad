//! User-facing text.
//!
//! All strings shown to the user are variants of [`Message`]; the text for
//! each lives in [`display`] and the `msg_*!` output macros in [`macros`].

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
