//! Network layer: the quote API seam and its HTTP implementation.

pub mod api;
