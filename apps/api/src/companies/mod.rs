// Companies: CRUD plus name/size search over the `companies` table.

pub mod handlers;
pub mod store;
