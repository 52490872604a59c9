pub use super::content::Entity as Content;
pub use super::content_country::Entity as ContentCountry;
pub use super::content_fact::Entity as ContentFact;
pub use super::content_genre::Entity as ContentGenre;
pub use super::content_person::Entity as ContentPerson;
pub use super::content_picture::Entity as ContentPicture;
pub use super::country::Entity as Country;
pub use super::episode::Entity as Episode;
pub use super::favorite::Entity as Favorite;
pub use super::genre::Entity as Genre;
pub use super::movie::Entity as Movie;
pub use super::person::Entity as Person;
pub use super::review::Entity as Review;
pub use super::role::Entity as Role;
pub use super::season::Entity as Season;
pub use super::series::Entity as Series;
pub use super::users::Entity as Users;
