//! # linkshare-entity
//!
//! Domain models for linkshare: the server capability set, public share
//! records and their permission bitmasks, the mutable share draft owned by a
//! dialog session, and the resolved form state rendered from it.

pub mod capability;
pub mod draft;
pub mod share;
pub mod ui;
