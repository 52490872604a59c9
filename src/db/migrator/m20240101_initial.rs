use crate::domain::Role as CanonicalRole;
use crate::entities::prelude::*;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{EntityTrait, Schema};

#[derive(DeriveMigrationName)]
pub struct Migration;

async fn create<E>(manager: &SchemaManager<'_>, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    manager
        .create_table(
            schema
                .create_table_from_entity(entity)
                .if_not_exists()
                .to_owned(),
        )
        .await
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        // Parents before children so foreign keys resolve.
        create(manager, &schema, Content).await?;
        create(manager, &schema, Country).await?;
        create(manager, &schema, Genre).await?;
        create(manager, &schema, Role).await?;
        create(manager, &schema, Person).await?;
        create(manager, &schema, Users).await?;
        create(manager, &schema, ContentCountry).await?;
        create(manager, &schema, ContentGenre).await?;
        create(manager, &schema, ContentPerson).await?;
        create(manager, &schema, ContentPicture).await?;
        create(manager, &schema, ContentFact).await?;
        create(manager, &schema, Movie).await?;
        create(manager, &schema, Series).await?;
        create(manager, &schema, Season).await?;
        create(manager, &schema, Episode).await?;
        create(manager, &schema, Review).await?;
        create(manager, &schema, Favorite).await?;

        // One review per user per content.
        manager
            .create_index(
                Index::create()
                    .name("idx_review_content_user")
                    .table(Review)
                    .col(crate::entities::review::Column::ContentId)
                    .col(crate::entities::review::Column::UserId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert()
            .into_table(Role)
            .columns([crate::entities::role::Column::Name])
            .to_owned();
        for role in CanonicalRole::ALL {
            insert.values_panic([role.name().into()]);
        }
        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorite).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Review).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Episode).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Season).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Series).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Movie).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContentFact).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContentPicture).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContentPerson).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContentGenre).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContentCountry).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Person).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Role).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Genre).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Country).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Content).to_owned())
            .await?;

        Ok(())
    }
}
