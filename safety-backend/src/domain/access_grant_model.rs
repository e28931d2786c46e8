// src/domain/access_grant_model.rs
//
// アクセスプロファイルの付与テーブル（3レベルそれぞれ独立の多対多）

/// 組織レベルの付与
pub mod organization_grant {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "access_profile_organizations")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub profile_id: Uuid,
        #[sea_orm(primary_key, auto_increment = false)]
        pub organization_id: Uuid,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "crate::domain::access_profile_model::Entity",
            from = "Column::ProfileId",
            to = "crate::domain::access_profile_model::Column::Id"
        )]
        Profile,
        #[sea_orm(
            belongs_to = "crate::domain::organization_model::Entity",
            from = "Column::OrganizationId",
            to = "crate::domain::organization_model::Column::Id"
        )]
        Organization,
    }

    impl Related<crate::domain::access_profile_model::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Profile.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// 部門レベルの付与
pub mod subdivision_grant {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "access_profile_subdivisions")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub profile_id: Uuid,
        #[sea_orm(primary_key, auto_increment = false)]
        pub subdivision_id: Uuid,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "crate::domain::access_profile_model::Entity",
            from = "Column::ProfileId",
            to = "crate::domain::access_profile_model::Column::Id"
        )]
        Profile,
        #[sea_orm(
            belongs_to = "crate::domain::subdivision_model::Entity",
            from = "Column::SubdivisionId",
            to = "crate::domain::subdivision_model::Column::Id"
        )]
        Subdivision,
    }

    impl Related<crate::domain::access_profile_model::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Profile.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// 課レベルの付与
pub mod department_grant {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "access_profile_departments")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub profile_id: Uuid,
        #[sea_orm(primary_key, auto_increment = false)]
        pub department_id: Uuid,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "crate::domain::access_profile_model::Entity",
            from = "Column::ProfileId",
            to = "crate::domain::access_profile_model::Column::Id"
        )]
        Profile,
        #[sea_orm(
            belongs_to = "crate::domain::department_model::Entity",
            from = "Column::DepartmentId",
            to = "crate::domain::department_model::Column::Id"
        )]
        Department,
    }

    impl Related<crate::domain::access_profile_model::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Profile.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
