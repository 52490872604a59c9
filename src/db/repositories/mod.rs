pub mod content;
pub mod favorite;
pub mod person;
pub mod review;
pub mod role;
pub mod subtype;
pub mod taxonomy;
pub mod user;
