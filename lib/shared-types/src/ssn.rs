use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// National identity number, the natural key of a person.
///
/// The format is not validated.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "utoipa", schema(example = "1203735289"))]
#[serde(transparent)]
#[repr(transparent)]
pub struct Ssn(String);

impls_for_string_newtype!(Ssn);

#[cfg(feature = "sea-orm")]
use crate::macros::impls_for_seaorm_newtype;

#[cfg(feature = "sea-orm")]
impls_for_seaorm_newtype!(Ssn);
