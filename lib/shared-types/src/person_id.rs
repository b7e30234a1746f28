use serde::{Deserialize, Serialize};

use crate::macros::impls_for_integer_newtype;

/// Surrogate key of a person. Persons are addressed by [`crate::Ssn`] everywhere else.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(transparent)]
#[repr(transparent)]
pub struct PersonId(i32);

impls_for_integer_newtype!(PersonId);

#[cfg(feature = "sea-orm")]
use crate::macros::impls_for_seaorm_integer_newtype;

#[cfg(feature = "sea-orm")]
impls_for_seaorm_integer_newtype!(PersonId);
