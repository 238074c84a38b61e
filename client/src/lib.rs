//! Quote board client: REST API access, page state, and text rendering.
//!
//! `net` talks to the backend, `state` holds the page state and its pure
//! transitions, `board` sequences the two, and `view` renders a state.

pub mod board;
pub mod net;
pub mod state;
pub mod view;
