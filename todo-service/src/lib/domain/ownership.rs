use thiserror::Error;

use crate::domain::user::models::UserId;

/// Error raised when a principal touches a resource it does not own.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum OwnershipError {
    #[error("not enough permission")]
    NotOwner,
}

/// Authorize a mutation of a resource owned by `resource_owner`.
///
/// Pure comparison: allowed iff the principal is the resource owner.
/// There is no administrative override role.
///
/// # Errors
/// * `NotOwner` - Principal does not own the resource
pub fn authorize_mutation(principal: UserId, resource_owner: UserId) -> Result<(), OwnershipError> {
    if principal == resource_owner {
        Ok(())
    } else {
        Err(OwnershipError::NotOwner)
    }
}
