mod ids;
mod movie;
mod prediction;
mod rating;

pub use ids::{MovieId, UserId};
pub use movie::{Movie, MovieCatalog};
pub use prediction::Prediction;
pub use rating::{RatingEvent, RatingTable};
