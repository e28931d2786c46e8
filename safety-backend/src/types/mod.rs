pub mod query;
pub mod response;

pub use query::{PaginationQuery, SortOrder, SortQuery};
pub use response::ApiResponse;
