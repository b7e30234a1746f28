use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Code of a course template, e.g. `T-514-VEFT`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "utoipa", schema(example = "T-514-VEFT"))]
#[serde(transparent)]
#[repr(transparent)]
pub struct CourseId(String);

impls_for_string_newtype!(CourseId);

#[cfg(feature = "sea-orm")]
use crate::macros::impls_for_seaorm_newtype;

#[cfg(feature = "sea-orm")]
impls_for_seaorm_newtype!(CourseId);
