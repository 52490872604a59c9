pub mod prelude;

pub mod content;
pub mod content_country;
pub mod content_fact;
pub mod content_genre;
pub mod content_person;
pub mod content_picture;
pub mod country;
pub mod episode;
pub mod favorite;
pub mod genre;
pub mod movie;
pub mod person;
pub mod review;
pub mod role;
pub mod season;
pub mod series;
pub mod users;
