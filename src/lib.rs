//! Item-based collaborative-filtering rating service.
//!
//! Loads a MovieLens-style CSV dataset into an immutable in-memory rating
//! table and predicts the rating a user would give an unseen movie: movies
//! whose rating patterns correlate with the target (Pearson, over the users
//! who rated both) weight the user's own ratings into a single estimate.
//! The service exposes prediction and offline accuracy evaluation over HTTP.

pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod services;
