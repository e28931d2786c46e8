// src/access/resolver.rs
//
// DBを背にしたスコープ解決。閉包計算はトップダウンの1パス:
// 付与行を取得 → 各レベルのID集合を導出 → AccessContext にキャッシュ。

use crate::access::context::AccessContext;
use crate::access::scope::{AccessScopes, ScopeAncestry, ScopeRef, ScopeSources};
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::{
    access_profile_repository::AccessProfileRepository,
    department_repository::DepartmentRepository, organization_repository::OrganizationRepository,
    subdivision_repository::SubdivisionRepository,
};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection};
use std::collections::HashSet;
use uuid::Uuid;

/// レコード型のスコープカラム（SQL側フィルタ用の静的ディスクリプタ）
#[derive(Debug, Clone, Copy)]
pub struct ScopeColumns<C: ColumnTrait> {
    pub organization: Option<C>,
    pub subdivision: Option<C>,
    pub department: Option<C>,
}

pub struct AccessControlService {
    db: DatabaseConnection,
}

impl AccessControlService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// リクエストのスコープを返す（初回のみ解決、以降はコンテキストのキャッシュ）
    pub async fn scopes<'a>(&self, context: &'a AccessContext) -> AppResult<&'a AccessScopes> {
        context
            .scopes_or_init(|| self.resolve(context.user_id(), context.is_superuser()))
            .await
    }

    /// スコープ解決の本体
    ///
    /// プロファイルが無い・無効・付与が空の場合は全レベル空（フェイルクローズ）。
    /// 解決自体がドメインエラーを返すことはなく、伝播するのはDBエラーのみ。
    async fn resolve(&self, user_id: Uuid, is_superuser: bool) -> AppResult<AccessScopes> {
        if is_superuser {
            return Ok(AccessScopes::for_superuser());
        }

        let Some(profile) = AccessProfileRepository::find_by_user_id(&self.db, user_id).await?
        else {
            log_with_context!(
                tracing::Level::DEBUG,
                "No access profile, resolving to empty scope",
                "user_id" => user_id
            );
            return Ok(AccessScopes::empty());
        };

        if !profile.is_active {
            return Ok(AccessScopes::empty());
        }

        let grants = AccessProfileRepository::find_grant_set(&self.db, profile.id).await?;
        if grants.is_empty() {
            return Ok(AccessScopes {
                grants,
                ..AccessScopes::empty()
            });
        }

        // 付与された部門・課の行（親参照の導出に必要）
        let granted_subdivisions =
            SubdivisionRepository::find_by_ids(&self.db, &grants.subdivisions).await?;
        let granted_departments =
            DepartmentRepository::find_by_ids(&self.db, &grants.departments).await?;

        let subdivisions_of_granted_organizations =
            SubdivisionRepository::find_ids_by_organization_ids(&self.db, &grants.organizations)
                .await?;
        let departments_of_granted_organizations =
            DepartmentRepository::find_ids_by_organization_ids(&self.db, &grants.organizations)
                .await?;
        let departments_of_granted_subdivisions =
            DepartmentRepository::find_ids_by_subdivision_ids(&self.db, &grants.subdivisions)
                .await?;

        let sources = ScopeSources {
            granted_subdivisions: granted_subdivisions
                .iter()
                .map(|s| (s.id, s.organization_id))
                .collect(),
            granted_departments: granted_departments
                .iter()
                .map(|d| (d.id, d.organization_id, d.subdivision_id))
                .collect(),
            subdivisions_of_granted_organizations,
            departments_of_granted_organizations,
            departments_of_granted_subdivisions,
        };

        Ok(AccessScopes::from_grants(grants, sources))
    }

    /// 可視な組織のID集合
    pub async fn accessible_organizations(
        &self,
        context: &AccessContext,
    ) -> AppResult<HashSet<Uuid>> {
        if context.is_superuser() {
            return OrganizationRepository::find_all_ids(&self.db).await;
        }
        Ok(self.scopes(context).await?.organizations.clone())
    }

    /// 可視な部門のID集合
    pub async fn accessible_subdivisions(
        &self,
        context: &AccessContext,
    ) -> AppResult<HashSet<Uuid>> {
        if context.is_superuser() {
            return SubdivisionRepository::find_all_ids(&self.db).await;
        }
        Ok(self.scopes(context).await?.subdivisions.clone())
    }

    /// 可視な課のID集合
    pub async fn accessible_departments(
        &self,
        context: &AccessContext,
    ) -> AppResult<HashSet<Uuid>> {
        if context.is_superuser() {
            return DepartmentRepository::find_all_ids(&self.db).await;
        }
        Ok(self.scopes(context).await?.departments.clone())
    }

    /// メモリ上のコレクションをスコープでフィルタリング
    pub async fn filter_records<R: crate::access::scope::HierarchyScoped>(
        &self,
        context: &AccessContext,
        records: Vec<R>,
    ) -> AppResult<Vec<R>> {
        let scopes = self.scopes(context).await?;
        Ok(scopes.filter_records(records))
    }

    /// 一覧クエリ用のスコープ条件を構築
    pub async fn scope_condition<C: ColumnTrait>(
        &self,
        context: &AccessContext,
        columns: ScopeColumns<C>,
    ) -> AppResult<Condition> {
        let scopes = self.scopes(context).await?;
        Ok(scoped_condition(&columns, scopes))
    }

    /// オブジェクト単位のアクセス可否
    pub async fn can_access_object(
        &self,
        context: &AccessContext,
        scope: &ScopeRef,
    ) -> AppResult<bool> {
        let scopes = self.scopes(context).await?;
        if scopes.superuser {
            return Ok(true);
        }

        let ancestry = self.load_ancestry(scope).await?;
        Ok(scopes.can_access_object(scope, &ancestry))
    }

    /// アクセスできない場合に Forbidden を返すヘルパ
    pub async fn ensure_can_access(
        &self,
        context: &AccessContext,
        scope: &ScopeRef,
    ) -> AppResult<()> {
        if self.can_access_object(context, scope).await? {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Access to this record is not permitted".to_string(),
            ))
        }
    }

    /// オブジェクトの帰属フィールドから祖先参照を取得
    async fn load_ancestry(&self, scope: &ScopeRef) -> AppResult<ScopeAncestry> {
        let subdivision_organization = match scope.subdivision {
            Some(subdivision_id) => {
                SubdivisionRepository::find_by_id(&self.db, subdivision_id)
                    .await?
                    .map(|s| s.organization_id)
            }
            None => None,
        };

        let department_parents = match scope.department {
            Some(department_id) => DepartmentRepository::find_by_id(&self.db, department_id)
                .await?
                .map(|d| (d.organization_id, d.subdivision_id)),
            None => None,
        };

        Ok(ScopeAncestry {
            subdivision_organization,
            department_parents,
        })
    }
}

/// 解決済みスコープからSQL条件を構築
///
/// メモリ内の `AccessScopes::is_visible` と同じ
/// 「最も具体的な帰属フィールド優先」ルールをSQLに写したもの。
pub fn scoped_condition<C: ColumnTrait>(
    columns: &ScopeColumns<C>,
    scopes: &AccessScopes,
) -> Condition {
    if scopes.superuser {
        return Condition::all();
    }

    // 課のみのユーザー: department カラムを持つ型は department 必須
    if scopes.grants.department_only() {
        if let Some(department) = columns.department {
            return Condition::all()
                .add(department.is_not_null())
                .add(department.is_in(scopes.departments.iter().copied()));
        }
    }

    let mut condition = Condition::any();
    let mut has_arm = false;
    // 細かいフィールドが埋まっている行を粗いアームから除外するためのガード
    let mut null_guards: Vec<C> = Vec::new();

    if let Some(department) = columns.department {
        condition = condition.add(
            Condition::all()
                .add(department.is_not_null())
                .add(department.is_in(scopes.departments.iter().copied())),
        );
        null_guards.push(department);
        has_arm = true;
    }

    if let Some(subdivision) = columns.subdivision {
        let mut arm = Condition::all();
        for guard in &null_guards {
            arm = arm.add(guard.is_null());
        }
        arm = arm
            .add(subdivision.is_not_null())
            .add(subdivision.is_in(scopes.subdivisions.iter().copied()));
        condition = condition.add(arm);
        null_guards.push(subdivision);
        has_arm = true;
    }

    if let Some(organization) = columns.organization {
        let mut arm = Condition::all();
        for guard in &null_guards {
            arm = arm.add(guard.is_null());
        }
        arm = arm.add(organization.is_in(scopes.organizations.iter().copied()));
        condition = condition.add(arm);
        has_arm = true;
    }

    if !has_arm {
        // 帰属フィールドを持たない型はスコープ外（フェイルクローズ）
        return Condition::all().add(Expr::value(false));
    }

    condition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee_model;
    use sea_orm::{DatabaseBackend, EntityTrait, QueryFilter, QueryTrait};

    fn employee_columns() -> ScopeColumns<employee_model::Column> {
        ScopeColumns {
            organization: Some(employee_model::Column::OrganizationId),
            subdivision: Some(employee_model::Column::SubdivisionId),
            department: Some(employee_model::Column::DepartmentId),
        }
    }

    /// 条件をSQLに描画し、WHERE句だけを返す（SELECT句のカラム名を誤検知しないため）
    fn render_where(condition: Condition) -> String {
        let sql = employee_model::Entity::find()
            .filter(condition)
            .build(DatabaseBackend::Postgres)
            .to_string();

        sql.split_once("WHERE")
            .map(|(_, where_clause)| where_clause.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_superuser_condition_is_unrestricted() {
        let scopes = AccessScopes::for_superuser();
        // 空の all() は条件なし＝無制限
        assert!(render_where(scoped_condition(&employee_columns(), &scopes)).is_empty());
    }

    #[test]
    fn test_department_only_condition_requires_department() {
        let dept = Uuid::new_v4();
        let mut scopes = AccessScopes::empty();
        scopes.grants.departments.insert(dept);
        scopes.departments.insert(dept);

        let where_clause = render_where(scoped_condition(&employee_columns(), &scopes));

        // department IS NOT NULL が必須条件として入り、
        // 粗いフィールドへのフォールバックアームは存在しない
        assert!(where_clause.contains(r#""department_id" IS NOT NULL"#));
        assert!(!where_clause.contains("organization_id"));
    }

    #[test]
    fn test_most_specific_field_guards_coarser_arms() {
        let org = Uuid::new_v4();
        let mut scopes = AccessScopes::empty();
        scopes.grants.organizations.insert(org);
        scopes.organizations.insert(org);

        let where_clause = render_where(scoped_condition(&employee_columns(), &scopes));

        // 組織アームには department / subdivision の NULL ガードが付く
        assert!(where_clause.contains(r#""department_id" IS NULL"#));
        assert!(where_clause.contains(r#""subdivision_id" IS NULL"#));
        assert!(where_clause.contains("organization_id"));
    }

    #[test]
    fn test_no_scope_columns_fails_closed() {
        let scopes = AccessScopes::empty();
        let columns: ScopeColumns<employee_model::Column> = ScopeColumns {
            organization: None,
            subdivision: None,
            department: None,
        };
        let where_clause = render_where(scoped_condition(&columns, &scopes));
        assert!(where_clause.contains("FALSE"));
    }
}
