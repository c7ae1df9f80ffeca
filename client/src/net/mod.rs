//! Networking for the browser side of the app.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server side never calls the auth API from components: the host's
//! guard middleware does that before rendering. Only hydrated pages need a
//! client of their own.

pub mod api;
