// src/access/context.rs

use crate::access::scope::AccessScopes;
use crate::domain::user_model::UserClaims;
use tokio::sync::OnceCell;
use uuid::Uuid;

/// リクエスト単位のアクセス解決コンテキスト
///
/// 解決済みスコープをリクエストの寿命の間だけ遅延キャッシュする。
/// プロセス全体のシングルトンにはしない: 付与はリクエスト間で変わり得る
/// ため、キャッシュがリクエスト境界を越えて生き残ってはならない。
///
/// 1リクエスト＝1実行コンテキストが排他所有するため、OnceCell の初期化
/// ガード以外のロックは不要。
#[derive(Debug)]
pub struct AccessContext {
    user_id: Uuid,
    is_superuser: bool,
    scopes: OnceCell<AccessScopes>,
}

impl AccessContext {
    pub fn new(claims: &UserClaims) -> Self {
        Self {
            user_id: claims.user_id,
            is_superuser: claims.is_superuser,
            scopes: OnceCell::new(),
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn is_superuser(&self) -> bool {
        self.is_superuser
    }

    /// キャッシュ済みスコープ、または init で解決した結果
    pub async fn scopes_or_init<F, Fut, E>(&self, init: F) -> Result<&AccessScopes, E>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<AccessScopes, E>>,
    {
        self.scopes.get_or_try_init(init).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(is_superuser: bool) -> UserClaims {
        UserClaims {
            user_id: Uuid::new_v4(),
            username: "inspector".to_string(),
            is_superuser,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_scopes_resolved_once_per_context() {
        let context = AccessContext::new(&claims(false));
        let mut calls = 0u32;

        for _ in 0..3 {
            let result: Result<&AccessScopes, std::convert::Infallible> = context
                .scopes_or_init(|| {
                    calls += 1;
                    async { Ok(AccessScopes::empty()) }
                })
                .await;
            assert!(result.is_ok());
        }

        // 2回目以降はキャッシュが返り、解決は走らない
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_fresh_context_does_not_share_cache() {
        let user = claims(false);

        let first = AccessContext::new(&user);
        let _ = first
            .scopes_or_init(|| async {
                Ok::<_, std::convert::Infallible>(AccessScopes::for_superuser())
            })
            .await;

        // 新しいリクエスト＝新しいコンテキストは前回の結果を見ない
        let second = AccessContext::new(&user);
        let scopes = second
            .scopes_or_init(|| async { Ok::<_, std::convert::Infallible>(AccessScopes::empty()) })
            .await
            .unwrap();
        assert!(!scopes.superuser);
    }
}
