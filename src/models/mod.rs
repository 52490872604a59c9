pub mod content;
pub mod person;
pub mod review;
pub mod user;

pub use content::{
    ContentRecord, Country, Episode, Genre, MoviePayload, PreviewRecord, ScalarRow, Season,
    SeriesPayload, TypePayload,
};
pub use person::Person;
pub use review::Review;
pub use user::User;
