use serde::{Deserialize, Serialize};

/// デフォルトページサイズ
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// 最大ページサイズ
pub const MAX_PAGE_SIZE: i32 = 100;

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// 統一ページネーションクエリパラメータ
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PaginationQuery {
    /// デフォルト値を適用してページとper_pageを取得
    pub fn get_pagination(&self) -> (i32, i32) {
        let page = self.page.max(1) as i32;
        let per_page = (self.per_page as i32).clamp(1, MAX_PAGE_SIZE);
        (page, per_page)
    }
}

/// 統一ソートクエリパラメータ
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SortQuery {
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: SortOrder,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let query = PaginationQuery::default();
        let (page, per_page) = query.get_pagination();
        assert_eq!(page, 1);
        assert_eq!(per_page, DEFAULT_PAGE_SIZE as i32);
    }

    #[test]
    fn test_pagination_clamps_per_page() {
        let query = PaginationQuery {
            page: 0,
            per_page: 10_000,
        };
        let (page, per_page) = query.get_pagination();
        assert_eq!(page, 1);
        assert_eq!(per_page, MAX_PAGE_SIZE);
    }
}
