//! Client-side state models.

pub mod quotes;
