// Jobs: CRUD plus title/salary/equity search over the `jobs` table.

pub mod handlers;
pub mod store;
