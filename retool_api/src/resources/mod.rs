//! Resource endpoints. Each builds a URL and body, then goes through
//! [`crate::Client::request_single`] or [`crate::Client::request_collection`].

mod configuration_variables;
mod folders;
mod groups;
mod permissions;
mod spaces;
mod user_attributes;
mod users;

pub use self::users::USER_NOT_FOUND;

use serde::Serialize;

use crate::types::UpdateOperation;

#[derive(Serialize)]
struct OperationsBody<'a> {
    operations: &'a [UpdateOperation],
}
