use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 初期スーパーユーザーを作成
        // パスワード: "Ch@ngeMe2026!" をArgon2でハッシュ化した値
        let password_hash = "$argon2id$v=19$m=19456,t=2,p=1$c2FmZXR5LWJhY2tlbmQtc2VlZA$Zl1GCbX0RdkXL5DgDiVIqJk0h7y2mS3jM9vCqWfT8Ns";

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Users::Table)
                    .columns([
                        Users::Id,
                        Users::Username,
                        Users::Email,
                        Users::PasswordHash,
                        Users::IsSuperuser,
                        Users::IsActive,
                    ])
                    .values_panic([
                        Expr::cust("gen_random_uuid()"),
                        "admin".into(),
                        "admin@example.com".into(),
                        password_hash.into(),
                        true.into(),
                        true.into(),
                    ])
                    .to_owned(),
            )
            .await?;

        // スーパーユーザーにも空のアクセスプロファイルを用意する
        // （プロファイルはユーザー作成と同時に存在する前提）
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(AccessProfiles::Table)
                    .columns([AccessProfiles::Id, AccessProfiles::UserId])
                    .values_panic([
                        Expr::cust("gen_random_uuid()"),
                        Expr::cust("(SELECT id FROM users WHERE username = 'admin')"),
                    ])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Users::Table)
                    .and_where(Expr::col(Users::Username).eq("admin"))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    IsSuperuser,
    IsActive,
}

#[derive(Iden)]
enum AccessProfiles {
    Table,
    Id,
    UserId,
}
