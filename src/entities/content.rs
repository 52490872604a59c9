use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Either "movie" or "series".
    pub content_type: String,
    pub title: String,
    pub original_title: Option<String>,
    pub slogan: Option<String>,
    pub budget: Option<i64>,
    pub age_restriction: Option<i32>,
    pub audience: Option<i64>,
    pub external_rating: Option<f64>,
    pub description: Option<String>,
    /// Static asset path of the poster image.
    pub poster: Option<String>,
    pub trailer_url: Option<String>,
    /// Static asset path of the backdrop image.
    pub backdrop: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::content_country::Entity")]
    ContentCountry,
    #[sea_orm(has_many = "super::content_genre::Entity")]
    ContentGenre,
    #[sea_orm(has_many = "super::content_person::Entity")]
    ContentPerson,
    #[sea_orm(has_many = "super::season::Entity")]
    Season,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::content_country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContentCountry.def()
    }
}

impl Related<super::content_genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContentGenre.def()
    }
}

impl Related<super::content_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContentPerson.def()
    }
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
