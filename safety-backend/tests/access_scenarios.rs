// tests/access_scenarios.rs
//
// 階層スコープ解決のシナリオテスト。
// 閉包計算・可視性判定・オブジェクト単位チェックはすべて純粋ロジックなので、
// ストアの行データをメモリ上のディレクトリで差し替えて検証する。

use safety_backend::access::{
    AccessLevel, AccessScopes, GrantSet, HierarchyScoped, ScopeAncestry, ScopeFields, ScopeRef,
    ScopeSources,
};
use std::collections::HashSet;
use uuid::Uuid;

/// メモリ上の組織ディレクトリ（Organization → Subdivision → Department）
struct Directory {
    /// (id, organization_id)
    subdivisions: Vec<(Uuid, Uuid)>,
    /// (id, organization_id, subdivision_id)
    departments: Vec<(Uuid, Uuid, Option<Uuid>)>,
}

impl Directory {
    fn sources_for(&self, grants: &GrantSet) -> ScopeSources {
        ScopeSources {
            granted_subdivisions: self
                .subdivisions
                .iter()
                .filter(|(id, _)| grants.subdivisions.contains(id))
                .copied()
                .collect(),
            granted_departments: self
                .departments
                .iter()
                .filter(|(id, _, _)| grants.departments.contains(id))
                .copied()
                .collect(),
            subdivisions_of_granted_organizations: self
                .subdivisions
                .iter()
                .filter(|(_, org)| grants.organizations.contains(org))
                .map(|(id, _)| *id)
                .collect(),
            departments_of_granted_organizations: self
                .departments
                .iter()
                .filter(|(_, org, _)| grants.organizations.contains(org))
                .map(|(id, _, _)| *id)
                .collect(),
            departments_of_granted_subdivisions: self
                .departments
                .iter()
                .filter(|(_, _, subdivision)| {
                    subdivision.is_some_and(|s| grants.subdivisions.contains(&s))
                })
                .map(|(id, _, _)| *id)
                .collect(),
        }
    }

    /// ストアのクエリに相当する閉包解決
    fn resolve(&self, grants: GrantSet) -> AccessScopes {
        let sources = self.sources_for(&grants);
        AccessScopes::from_grants(grants, sources)
    }

    /// オブジェクト単位チェック用の祖先参照
    fn ancestry_for(&self, scope: &ScopeRef) -> ScopeAncestry {
        ScopeAncestry {
            subdivision_organization: scope.subdivision.and_then(|subdivision_id| {
                self.subdivisions
                    .iter()
                    .find(|(id, _)| *id == subdivision_id)
                    .map(|(_, org)| *org)
            }),
            department_parents: scope.department.and_then(|department_id| {
                self.departments
                    .iter()
                    .find(|(id, _, _)| *id == department_id)
                    .map(|(_, org, subdivision)| (*org, *subdivision))
            }),
        }
    }
}

/// 3つの帰属フィールドをすべて持つレコード型
#[derive(Debug, Clone, PartialEq)]
struct Record {
    name: &'static str,
    scope: ScopeRef,
}

impl Record {
    fn new(
        name: &'static str,
        organization: Option<Uuid>,
        subdivision: Option<Uuid>,
        department: Option<Uuid>,
    ) -> Self {
        Self {
            name,
            scope: ScopeRef {
                organization,
                subdivision,
                department,
            },
        }
    }
}

impl HierarchyScoped for Record {
    const SCOPE_FIELDS: ScopeFields = ScopeFields::FULL;

    fn scope_ref(&self) -> ScopeRef {
        self.scope
    }
}

/// 固定の2組織構成:
/// org_a ── sub_a1 ── dept_a1x
///      └── sub_a2 ── dept_a2x
/// org_b ── sub_b1 ── dept_b1x
struct Fixture {
    directory: Directory,
    org_a: Uuid,
    org_b: Uuid,
    sub_a1: Uuid,
    sub_a2: Uuid,
    sub_b1: Uuid,
    dept_a1x: Uuid,
    dept_a2x: Uuid,
    dept_b1x: Uuid,
}

impl Fixture {
    fn new() -> Self {
        let org_a = Uuid::new_v4();
        let org_b = Uuid::new_v4();
        let sub_a1 = Uuid::new_v4();
        let sub_a2 = Uuid::new_v4();
        let sub_b1 = Uuid::new_v4();
        let dept_a1x = Uuid::new_v4();
        let dept_a2x = Uuid::new_v4();
        let dept_b1x = Uuid::new_v4();

        let directory = Directory {
            subdivisions: vec![(sub_a1, org_a), (sub_a2, org_a), (sub_b1, org_b)],
            departments: vec![
                (dept_a1x, org_a, Some(sub_a1)),
                (dept_a2x, org_a, Some(sub_a2)),
                (dept_b1x, org_b, Some(sub_b1)),
            ],
        };

        Self {
            directory,
            org_a,
            org_b,
            sub_a1,
            sub_a2,
            sub_b1,
            dept_a1x,
            dept_a2x,
            dept_b1x,
        }
    }
}

fn grants(
    organizations: &[Uuid],
    subdivisions: &[Uuid],
    departments: &[Uuid],
) -> GrantSet {
    GrantSet {
        organizations: organizations.iter().copied().collect(),
        subdivisions: subdivisions.iter().copied().collect(),
        departments: departments.iter().copied().collect(),
    }
}

fn names(records: &[Record]) -> HashSet<&'static str> {
    records.iter().map(|r| r.name).collect()
}

#[test]
fn superuser_filter_is_identity() {
    let fx = Fixture::new();
    let scopes = AccessScopes::for_superuser();

    let records = vec![
        Record::new("a", Some(fx.org_a), Some(fx.sub_a1), Some(fx.dept_a1x)),
        Record::new("b", Some(fx.org_b), None, None),
        Record::new("empty", None, None, None),
    ];

    let filtered = scopes.filter_records(records.clone());
    assert_eq!(filtered, records);
    assert_eq!(scopes.access_level(), AccessLevel::Superuser);
}

#[test]
fn empty_profile_sees_nothing() {
    let fx = Fixture::new();
    let scopes = fx.directory.resolve(GrantSet::default());

    let records = vec![
        Record::new("a", Some(fx.org_a), None, None),
        Record::new("b", Some(fx.org_b), Some(fx.sub_b1), Some(fx.dept_b1x)),
    ];

    assert!(scopes.filter_records(records).is_empty());
    assert_eq!(scopes.access_level(), AccessLevel::None);
}

#[test]
fn organization_grant_reveals_whole_subtree() {
    let fx = Fixture::new();
    let scopes = fx.directory.resolve(grants(&[fx.org_a], &[], &[]));

    // 組織の付与だけで、部門・課への明示的な付与なしに配下すべてが可視
    assert!(scopes.subdivisions.contains(&fx.sub_a1));
    assert!(scopes.subdivisions.contains(&fx.sub_a2));
    assert!(scopes.departments.contains(&fx.dept_a1x));
    assert!(scopes.departments.contains(&fx.dept_a2x));

    // 他組織の配下は見えない
    assert!(!scopes.subdivisions.contains(&fx.sub_b1));
    assert!(!scopes.departments.contains(&fx.dept_b1x));

    let records = vec![
        Record::new("a1x", Some(fx.org_a), Some(fx.sub_a1), Some(fx.dept_a1x)),
        Record::new("a2", Some(fx.org_a), Some(fx.sub_a2), None),
        Record::new("a", Some(fx.org_a), None, None),
        Record::new("b", Some(fx.org_b), None, None),
    ];

    let visible = names(&scopes.filter_records(records));
    assert_eq!(visible, ["a1x", "a2", "a"].into_iter().collect());
}

#[test]
fn populated_department_field_decides_alone() {
    let fx = Fixture::new();
    let scopes = fx.directory.resolve(grants(&[fx.org_a], &[], &[]));

    // department が埋まっている以上、課レベルの可否だけで決まる。
    // レコード自身の organization が可視でも、課が別ツリーなら見えない。
    let foreign_department =
        Record::new("foreign", Some(fx.org_a), Some(fx.sub_a1), Some(fx.dept_b1x));

    assert!(!scopes.is_visible(&foreign_department));
}

#[test]
fn department_only_profile_is_strictly_scoped() {
    let fx = Fixture::new();
    let scopes = fx.directory.resolve(grants(&[], &[], &[fx.dept_a1x]));

    assert_eq!(scopes.access_level(), AccessLevel::Department);

    let records = vec![
        // 自分の課のレコード
        Record::new("own", Some(fx.org_a), Some(fx.sub_a1), Some(fx.dept_a1x)),
        // 同じ部門だが課が空のレコード: 見えない
        Record::new("dept_null", Some(fx.org_a), Some(fx.sub_a1), None),
        // 組織のみのレコード: 見えない
        Record::new("org_only", Some(fx.org_a), None, None),
        // 隣の課: 見えない
        Record::new("sibling", Some(fx.org_a), Some(fx.sub_a2), Some(fx.dept_a2x)),
    ];

    let visible = names(&scopes.filter_records(records));
    assert_eq!(visible, ["own"].into_iter().collect());
}

#[test]
fn subdivision_grant_scenario() {
    // 部門 sub_a1 のみ付与されたユーザー
    let fx = Fixture::new();
    let scopes = fx.directory.resolve(grants(&[], &[fx.sub_a1], &[]));

    let records = vec![
        // R1: S 配下の課に帰属
        Record::new("r1", Some(fx.org_a), Some(fx.sub_a1), Some(fx.dept_a1x)),
        // R2: S に帰属、課は空
        Record::new("r2", Some(fx.org_a), Some(fx.sub_a1), None),
        // R3: 組織のみ帰属。部門付与から導出された組織閉包により可視
        Record::new("r3", Some(fx.org_a), None, None),
        // 隣の部門に帰属するレコードは見えない
        Record::new("sibling", Some(fx.org_a), Some(fx.sub_a2), None),
    ];

    let visible = names(&scopes.filter_records(records));
    assert_eq!(visible, ["r1", "r2", "r3"].into_iter().collect());

    // 部門付与は組織を組織レベルの閉包に加えるが、
    // その組織の他部門（sub_a2）を解放はしない
    assert!(scopes.organizations.contains(&fx.org_a));
    assert!(!scopes.subdivisions.contains(&fx.sub_a2));
    assert!(!scopes.departments.contains(&fx.dept_a2x));
}

#[test]
fn filter_is_idempotent() {
    let fx = Fixture::new();
    let scopes = fx.directory.resolve(grants(&[], &[fx.sub_a1], &[]));

    let records = vec![
        Record::new("r1", Some(fx.org_a), Some(fx.sub_a1), Some(fx.dept_a1x)),
        Record::new("r2", Some(fx.org_a), Some(fx.sub_a1), None),
        Record::new("b", Some(fx.org_b), Some(fx.sub_b1), None),
    ];

    let once = scopes.filter_records(records);
    let twice = scopes.filter_records(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn can_access_object_checks_in_order() {
    let fx = Fixture::new();

    // 組織の直接付与
    let org_scopes = fx.directory.resolve(grants(&[fx.org_a], &[], &[]));
    let org_record = ScopeRef {
        organization: Some(fx.org_a),
        subdivision: None,
        department: None,
    };
    assert!(org_scopes.can_access_object(&org_record, &fx.directory.ancestry_for(&org_record)));

    // 部門: 組織経由で可
    let sub_record = ScopeRef {
        organization: None,
        subdivision: Some(fx.sub_a1),
        department: None,
    };
    assert!(org_scopes.can_access_object(&sub_record, &fx.directory.ancestry_for(&sub_record)));

    // 課: 部門経由で可
    let sub_scopes = fx.directory.resolve(grants(&[], &[fx.sub_a1], &[]));
    let dept_record = ScopeRef {
        organization: None,
        subdivision: None,
        department: Some(fx.dept_a1x),
    };
    assert!(sub_scopes.can_access_object(&dept_record, &fx.directory.ancestry_for(&dept_record)));

    // 別ツリーの課は不可
    let foreign_record = ScopeRef {
        organization: None,
        subdivision: None,
        department: Some(fx.dept_b1x),
    };
    assert!(
        !sub_scopes.can_access_object(&foreign_record, &fx.directory.ancestry_for(&foreign_record))
    );
}

#[test]
fn object_check_requires_direct_organization_grant() {
    let fx = Fixture::new();

    // 部門 S のみ付与: 一覧では組織閉包により org_a のレコードが見えるが、
    // 組織フィールドしか持たないオブジェクトの個別チェックは直接付与のみで判定
    let scopes = fx.directory.resolve(grants(&[], &[fx.sub_a1], &[]));

    let org_record = ScopeRef {
        organization: Some(fx.org_a),
        subdivision: None,
        department: None,
    };

    let list_visible = scopes.is_visible(&Record::new("r3", Some(fx.org_a), None, None));
    let object_visible =
        scopes.can_access_object(&org_record, &fx.directory.ancestry_for(&org_record));

    assert!(list_visible);
    assert!(!object_visible);
}

#[test]
fn multi_level_grants_contribute_independently() {
    let fx = Fixture::new();

    // 組織 B の付与と、組織 A 内の課の付与が同時に存在するケース。
    // 両者は独立に各レベルの和集合へ寄与する。
    let scopes = fx
        .directory
        .resolve(grants(&[fx.org_b], &[], &[fx.dept_a1x]));

    let records = vec![
        Record::new("b_sub", Some(fx.org_b), Some(fx.sub_b1), None),
        Record::new("a_dept", Some(fx.org_a), Some(fx.sub_a1), Some(fx.dept_a1x)),
        Record::new("a_other", Some(fx.org_a), Some(fx.sub_a2), None),
    ];

    let visible = names(&scopes.filter_records(records));
    assert_eq!(visible, ["b_sub", "a_dept"].into_iter().collect());

    // 組織レベルの閉包には両方の組織が入る
    assert!(scopes.organizations.contains(&fx.org_a));
    assert!(scopes.organizations.contains(&fx.org_b));
}
