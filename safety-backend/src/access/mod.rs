// src/access/mod.rs
//
// 階層スコープによるアクセス制御（Scope-Based Access Control）
//
// 階層: Organization → Subdivision → Department
//   1. 組織への付与 → その組織の全部門・全課へのアクセス
//   2. 部門への付与 → その部門の全課へのアクセス
//   3. 課への付与 → その課のみへのアクセス

pub mod context;
pub mod resolver;
pub mod scope;

pub use context::AccessContext;
pub use resolver::AccessControlService;
pub use scope::{
    AccessLevel, AccessScopes, GrantSet, HierarchyScoped, ScopeAncestry, ScopeFields, ScopeRef,
    ScopeSources,
};
