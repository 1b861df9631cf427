use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250601_000001_create_profile_tables"
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Username,
    Name,
    Surname,
    Avatar,
    Cover,
}

#[derive(DeriveIden)]
enum Post {
    Table,
    Id,
    AuthorId,
    Content,
}

#[derive(DeriveIden)]
enum Follower {
    Table,
    Id,
    FollowerId,
    FollowingId,
}

#[derive(DeriveIden)]
enum Block {
    Table,
    Id,
    BlockerId,
    BlockedId,
}

fn user_fk(
    name: &str,
    from: (impl IntoTableRef, impl IntoIden),
) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(from.0, from.1)
        .to(User::Table, User::Id)
        .on_update(ForeignKeyAction::Cascade)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::Id).primary_key())
                    .col(string_uniq(User::Username))
                    .col(string_null(User::Name))
                    .col(string_null(User::Surname))
                    .col(string_null(User::Avatar))
                    .col(string_null(User::Cover))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(pk_auto(Post::Id))
                    .col(string(Post::AuthorId))
                    .col(text(Post::Content))
                    .foreign_key(&mut user_fk(
                        "fk_post_author_id",
                        (Post::Table, Post::AuthorId),
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Follower::Table)
                    .if_not_exists()
                    .col(pk_auto(Follower::Id))
                    .col(string(Follower::FollowerId))
                    .col(string(Follower::FollowingId))
                    .foreign_key(&mut user_fk(
                        "fk_follower_follower_id",
                        (Follower::Table, Follower::FollowerId),
                    ))
                    .foreign_key(&mut user_fk(
                        "fk_follower_following_id",
                        (Follower::Table, Follower::FollowingId),
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Block::Table)
                    .if_not_exists()
                    .col(pk_auto(Block::Id))
                    .col(string(Block::BlockerId))
                    .col(string(Block::BlockedId))
                    .foreign_key(&mut user_fk(
                        "fk_block_blocker_id",
                        (Block::Table, Block::BlockerId),
                    ))
                    .foreign_key(&mut user_fk(
                        "fk_block_blocked_id",
                        (Block::Table, Block::BlockedId),
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_post_author_id")
                    .table(Post::Table)
                    .col(Post::AuthorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_follower_pair")
                    .table(Follower::Table)
                    .col(Follower::FollowerId)
                    .col(Follower::FollowingId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_follower_following_id")
                    .table(Follower::Table)
                    .col(Follower::FollowingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_block_pair")
                    .table(Block::Table)
                    .col(Block::BlockerId)
                    .col(Block::BlockedId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            Block::Table.into_iden(),
            Follower::Table.into_iden(),
            Post::Table.into_iden(),
            User::Table.into_iden(),
        ] {
            manager
                .drop_table(Table::drop().table(table).if_exists().to_owned())
                .await?;
        }

        Ok(())
    }
}
