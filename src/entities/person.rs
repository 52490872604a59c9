use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub name_localized: Option<String>,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    pub sex: Option<String>,
    pub height_cm: Option<i32>,
    pub photo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::content_person::Entity")]
    ContentPerson,
}

impl Related<super::content_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContentPerson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
