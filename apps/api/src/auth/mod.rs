// Bearer-token auth for mutation routes. Tokens are HS256 JWTs signed with
// `SECRET_KEY`; only the `isAdmin` claim is consulted here.

pub mod middleware;
pub mod token;

pub use middleware::require_admin;
pub use token::{create_token, verify_token, Claims};
