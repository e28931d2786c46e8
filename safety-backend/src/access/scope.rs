// src/access/scope.rs
//
// スコープ解決の純粋ロジック。DBアクセスは resolver.rs 側に分離し、
// ここでは解決済みのID集合に対する可視性判定のみを行う。

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// レコード型がどの帰属フィールドを持つかを表す静的ディスクリプタ
///
/// 実行時のフィールド探索ではなく、型ごとにコンパイル時に確定する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeFields {
    pub organization: bool,
    pub subdivision: bool,
    pub department: bool,
}

impl ScopeFields {
    /// 3フィールドすべてを持つレコード型（従業員・役職・設備など）
    pub const FULL: Self = Self {
        organization: true,
        subdivision: true,
        department: true,
    };

    pub const fn any(&self) -> bool {
        self.organization || self.subdivision || self.department
    }
}

/// 1レコード分の帰属フィールド値
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeRef {
    pub organization: Option<Uuid>,
    pub subdivision: Option<Uuid>,
    pub department: Option<Uuid>,
}

/// 階層スコープを持つレコード型
pub trait HierarchyScoped {
    /// 型が持つ帰属フィールドの集合
    const SCOPE_FIELDS: ScopeFields;

    /// このレコードの帰属フィールド値
    fn scope_ref(&self) -> ScopeRef;
}

/// アクセスプロファイルの直接付与（解決前の生データ）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantSet {
    pub organizations: HashSet<Uuid>,
    pub subdivisions: HashSet<Uuid>,
    pub departments: HashSet<Uuid>,
}

impl GrantSet {
    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
            && self.subdivisions.is_empty()
            && self.departments.is_empty()
    }

    /// 課レベルの付与しか持たないか
    ///
    /// このケースのユーザーは「一つの課だけを管理し、その上位は見えない」
    /// 扱いになり、department が空のレコードは一切見えない。
    pub fn department_only(&self) -> bool {
        !self.departments.is_empty()
            && self.organizations.is_empty()
            && self.subdivisions.is_empty()
    }
}

/// 課・部門の親参照（オブジェクト単位チェック用に取得した祖先情報）
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeAncestry {
    /// レコードの subdivision の organization_id
    pub subdivision_organization: Option<Uuid>,
    /// レコードの department の (organization_id, subdivision_id)
    pub department_parents: Option<(Uuid, Option<Uuid>)>,
}

/// ユーザーのアクセスレベル（サマリ表示用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Superuser,
    Organization,
    Subdivision,
    Department,
    None,
}

/// 解決済みアクセススコープ（リクエスト内でキャッシュされる）
///
/// organizations / subdivisions / departments は閉包計算後のID集合:
/// - organizations: 直接付与 ∪ 付与部門の組織 ∪ 付与課の組織
/// - subdivisions: 直接付与組織の全部門 ∪ 直接付与 ∪ 付与課の部門
/// - departments: 直接付与組織の全課 ∪ 直接付与部門の全課 ∪ 直接付与
#[derive(Debug, Clone, Default)]
pub struct AccessScopes {
    pub superuser: bool,
    pub grants: GrantSet,
    pub organizations: HashSet<Uuid>,
    pub subdivisions: HashSet<Uuid>,
    pub departments: HashSet<Uuid>,
}

/// 閉包計算に必要な、ストアから取得済みの行データ
///
/// どの行を取るかはリゾルバの責務、集合の合成規則はこちらの責務。
#[derive(Debug, Clone, Default)]
pub struct ScopeSources {
    /// 直接付与された部門の (id, organization_id)
    pub granted_subdivisions: Vec<(Uuid, Uuid)>,
    /// 直接付与された課の (id, organization_id, subdivision_id)
    pub granted_departments: Vec<(Uuid, Uuid, Option<Uuid>)>,
    /// 直接付与組織に属する全部門のID
    pub subdivisions_of_granted_organizations: HashSet<Uuid>,
    /// 直接付与組織に属する全課のID
    pub departments_of_granted_organizations: HashSet<Uuid>,
    /// 直接付与部門に属する全課のID
    pub departments_of_granted_subdivisions: HashSet<Uuid>,
}

impl AccessScopes {
    /// スーパーユーザー: 全レベル無制限
    pub fn for_superuser() -> Self {
        Self {
            superuser: true,
            ..Self::default()
        }
    }

    /// プロファイルなし・付与なし: 全レベル空（フェイルクローズ）
    pub fn empty() -> Self {
        Self::default()
    }

    /// 付与と取得済み行データから3レベルの閉包を構築
    ///
    /// - 組織: 直接付与 ∪ 付与部門の組織 ∪ 付与課の組織
    /// - 部門: 直接付与組織の全部門 ∪ 直接付与 ∪ 付与課の部門
    /// - 課: 直接付与組織の全課 ∪ 直接付与部門の全課 ∪ 直接付与
    ///
    /// カスケードの起点はあくまで直接付与。部門の付与から導出された
    /// 組織が、その組織の他部門を解放することはない。
    pub fn from_grants(grants: GrantSet, sources: ScopeSources) -> Self {
        let mut organizations = grants.organizations.clone();
        organizations.extend(sources.granted_subdivisions.iter().map(|(_, org)| *org));
        organizations.extend(sources.granted_departments.iter().map(|(_, org, _)| *org));

        let mut subdivisions = sources.subdivisions_of_granted_organizations;
        subdivisions.extend(grants.subdivisions.iter().copied());
        subdivisions.extend(
            sources
                .granted_departments
                .iter()
                .filter_map(|(_, _, subdivision)| *subdivision),
        );

        let mut departments = sources.departments_of_granted_organizations;
        departments.extend(sources.departments_of_granted_subdivisions);
        departments.extend(grants.departments.iter().copied());

        Self {
            superuser: false,
            grants,
            organizations,
            subdivisions,
            departments,
        }
    }

    /// レコード1件の可視性判定
    ///
    /// 「最も具体的な帰属フィールド優先」: department が埋まっていれば
    /// 課レベルの可否だけで決まり、粗いフィールドへのフォールバックはない。
    /// フィールドが埋まっていなければ次に細かいフィールドへ降りる。
    pub fn is_visible<R: HierarchyScoped>(&self, record: &R) -> bool {
        if self.superuser {
            return true;
        }

        let fields = R::SCOPE_FIELDS;

        // 帰属フィールドを持たない型はスコープ外（フェイルクローズ）
        if !fields.any() {
            return false;
        }

        let scope = record.scope_ref();

        // 課のみのユーザー: department が埋まったレコードだけが対象。
        // department フィールド自体を持たない型は一般ルールに従う。
        if self.grants.department_only() && fields.department {
            return match scope.department {
                Some(department) => self.departments.contains(&department),
                None => false,
            };
        }

        if fields.department {
            if let Some(department) = scope.department {
                return self.departments.contains(&department);
            }
        }

        if fields.subdivision {
            if let Some(subdivision) = scope.subdivision {
                return self.subdivisions.contains(&subdivision);
            }
        }

        if fields.organization {
            if let Some(organization) = scope.organization {
                return self.organizations.contains(&organization);
            }
        }

        false
    }

    /// コレクションのフィルタリング
    ///
    /// 空の結果は正常な結果であり、エラーではない。
    pub fn filter_records<R: HierarchyScoped>(&self, records: Vec<R>) -> Vec<R> {
        if self.superuser {
            return records;
        }

        records
            .into_iter()
            .filter(|record| self.is_visible(record))
            .collect()
    }

    /// オブジェクト単位のアクセス可否
    ///
    /// 順にチェックする: 組織の直接付与、部門（直接またはその組織経由）、
    /// 課（直接、その部門経由、またはその組織経由）。
    /// どの帰属フィールドも解決しなければ false。
    pub fn can_access_object(&self, scope: &ScopeRef, ancestry: &ScopeAncestry) -> bool {
        if self.superuser {
            return true;
        }

        let grants = &self.grants;

        // 組織: 直接付与のみ
        if let Some(organization) = scope.organization {
            if grants.organizations.contains(&organization) {
                return true;
            }
        }

        // 部門: 直接付与、またはその組織経由
        if let Some(subdivision) = scope.subdivision {
            if grants.subdivisions.contains(&subdivision) {
                return true;
            }
            if let Some(parent_org) = ancestry.subdivision_organization {
                if grants.organizations.contains(&parent_org) {
                    return true;
                }
            }
        }

        // 課: 直接付与、その部門経由、またはその組織経由
        if let Some(department) = scope.department {
            if grants.departments.contains(&department) {
                return true;
            }
            if let Some((parent_org, parent_subdivision)) = ancestry.department_parents {
                if let Some(parent_subdivision) = parent_subdivision {
                    if grants.subdivisions.contains(&parent_subdivision) {
                        return true;
                    }
                }
                if grants.organizations.contains(&parent_org) {
                    return true;
                }
            }
        }

        false
    }

    /// アクセスレベルのサマリ（直接付与の最上位レベル）
    pub fn access_level(&self) -> AccessLevel {
        if self.superuser {
            AccessLevel::Superuser
        } else if !self.grants.organizations.is_empty() {
            AccessLevel::Organization
        } else if !self.grants.subdivisions.is_empty() {
            AccessLevel::Subdivision
        } else if !self.grants.departments.is_empty() {
            AccessLevel::Department
        } else {
            AccessLevel::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRecord {
        scope: ScopeRef,
    }

    impl HierarchyScoped for TestRecord {
        const SCOPE_FIELDS: ScopeFields = ScopeFields::FULL;

        fn scope_ref(&self) -> ScopeRef {
            self.scope
        }
    }

    // department フィールドを持たない型（部門・組織のみ）
    struct SubdivisionScopedRecord {
        scope: ScopeRef,
    }

    impl HierarchyScoped for SubdivisionScopedRecord {
        const SCOPE_FIELDS: ScopeFields = ScopeFields {
            organization: true,
            subdivision: true,
            department: false,
        };

        fn scope_ref(&self) -> ScopeRef {
            self.scope
        }
    }

    fn record(
        organization: Option<Uuid>,
        subdivision: Option<Uuid>,
        department: Option<Uuid>,
    ) -> TestRecord {
        TestRecord {
            scope: ScopeRef {
                organization,
                subdivision,
                department,
            },
        }
    }

    #[test]
    fn test_superuser_sees_everything() {
        let scopes = AccessScopes::for_superuser();
        let r = record(Some(Uuid::new_v4()), None, Some(Uuid::new_v4()));
        assert!(scopes.is_visible(&r));
    }

    #[test]
    fn test_empty_scopes_see_nothing() {
        let scopes = AccessScopes::empty();
        let r = record(Some(Uuid::new_v4()), None, None);
        assert!(!scopes.is_visible(&r));
    }

    #[test]
    fn test_populated_department_decides_alone() {
        let org = Uuid::new_v4();
        let inaccessible_dept = Uuid::new_v4();

        // 組織は見えるが、レコードの department は付与外
        let mut scopes = AccessScopes::empty();
        scopes.grants.organizations.insert(org);
        scopes.organizations.insert(org);

        let r = record(Some(org), None, Some(inaccessible_dept));

        // department が埋まっている以上、組織へのアクセスでは救済されない
        assert!(!scopes.is_visible(&r));
    }

    #[test]
    fn test_department_null_falls_back_to_subdivision() {
        let org = Uuid::new_v4();
        let subdivision = Uuid::new_v4();

        let mut scopes = AccessScopes::empty();
        scopes.grants.subdivisions.insert(subdivision);
        scopes.subdivisions.insert(subdivision);
        scopes.organizations.insert(org); // 部門付与から導出された組織

        let r = record(Some(org), Some(subdivision), None);
        assert!(scopes.is_visible(&r));
    }

    #[test]
    fn test_department_only_user_excludes_department_null_records() {
        let org = Uuid::new_v4();
        let subdivision = Uuid::new_v4();
        let dept = Uuid::new_v4();

        let mut scopes = AccessScopes::empty();
        scopes.grants.departments.insert(dept);
        scopes.departments.insert(dept);
        scopes.organizations.insert(org);
        scopes.subdivisions.insert(subdivision);

        // 自分の課のレコードは見える
        let own = record(Some(org), Some(subdivision), Some(dept));
        assert!(scopes.is_visible(&own));

        // 課が空のレコードは、同じ部門のものでも見えない
        let department_null = record(Some(org), Some(subdivision), None);
        assert!(!scopes.is_visible(&department_null));
    }

    #[test]
    fn test_department_only_user_general_rule_for_types_without_department() {
        let subdivision = Uuid::new_v4();
        let dept = Uuid::new_v4();

        let mut scopes = AccessScopes::empty();
        scopes.grants.departments.insert(dept);
        scopes.departments.insert(dept);
        scopes.subdivisions.insert(subdivision); // 課から導出された部門

        // department フィールドを持たない型は一般ルールで部門チェック
        let r = SubdivisionScopedRecord {
            scope: ScopeRef {
                organization: Some(Uuid::new_v4()),
                subdivision: Some(subdivision),
                department: None,
            },
        };
        assert!(scopes.is_visible(&r));
    }

    #[test]
    fn test_filter_records_identity_for_superuser() {
        let scopes = AccessScopes::for_superuser();
        let records = vec![
            record(Some(Uuid::new_v4()), None, None),
            record(None, None, None),
        ];
        let filtered = scopes.filter_records(records);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_records_is_idempotent() {
        let org = Uuid::new_v4();
        let mut scopes = AccessScopes::empty();
        scopes.grants.organizations.insert(org);
        scopes.organizations.insert(org);

        let records = vec![
            record(Some(org), None, None),
            record(Some(Uuid::new_v4()), None, None),
        ];

        let first: Vec<ScopeRef> = scopes
            .filter_records(records)
            .iter()
            .map(|r| r.scope)
            .collect();
        let second: Vec<ScopeRef> = scopes
            .filter_records(first.iter().map(|s| TestRecord { scope: *s }).collect())
            .iter()
            .map(|r| r.scope)
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_can_access_object_direct_organization_only() {
        let org = Uuid::new_v4();
        let implied_org = Uuid::new_v4();
        let subdivision = Uuid::new_v4();

        let mut scopes = AccessScopes::empty();
        scopes.grants.subdivisions.insert(subdivision);
        scopes.subdivisions.insert(subdivision);
        // 部門付与から organizations 閉包には implied_org が入る
        scopes.organizations.insert(implied_org);

        // 組織フィールドしか埋まっていないオブジェクトは、直接付与の
        // 組織でなければオブジェクト単位チェックを通らない
        let scope = ScopeRef {
            organization: Some(implied_org),
            subdivision: None,
            department: None,
        };
        assert!(!scopes.can_access_object(&scope, &ScopeAncestry::default()));

        let mut direct = AccessScopes::empty();
        direct.grants.organizations.insert(org);
        direct.organizations.insert(org);
        let scope = ScopeRef {
            organization: Some(org),
            subdivision: None,
            department: None,
        };
        assert!(direct.can_access_object(&scope, &ScopeAncestry::default()));
    }

    #[test]
    fn test_can_access_object_department_via_ancestry() {
        let org = Uuid::new_v4();
        let subdivision = Uuid::new_v4();
        let dept = Uuid::new_v4();

        let mut scopes = AccessScopes::empty();
        scopes.grants.subdivisions.insert(subdivision);
        scopes.subdivisions.insert(subdivision);

        let scope = ScopeRef {
            organization: None,
            subdivision: None,
            department: Some(dept),
        };
        let ancestry = ScopeAncestry {
            subdivision_organization: None,
            department_parents: Some((org, Some(subdivision))),
        };

        // 課の親部門が付与されているので経由アクセス可
        assert!(scopes.can_access_object(&scope, &ancestry));

        // 祖先情報がなければ解決しない
        assert!(!scopes.can_access_object(&scope, &ScopeAncestry::default()));
    }

    #[test]
    fn test_access_level_priority() {
        let mut scopes = AccessScopes::empty();
        assert_eq!(scopes.access_level(), AccessLevel::None);

        scopes.grants.departments.insert(Uuid::new_v4());
        assert_eq!(scopes.access_level(), AccessLevel::Department);

        scopes.grants.subdivisions.insert(Uuid::new_v4());
        assert_eq!(scopes.access_level(), AccessLevel::Subdivision);

        scopes.grants.organizations.insert(Uuid::new_v4());
        assert_eq!(scopes.access_level(), AccessLevel::Organization);

        assert_eq!(
            AccessScopes::for_superuser().access_level(),
            AccessLevel::Superuser
        );
    }
}
