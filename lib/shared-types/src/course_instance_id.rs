use serde::{Deserialize, Serialize};

use crate::macros::impls_for_integer_newtype;

/// Surrogate key of one semester's offering of a course.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(transparent)]
#[repr(transparent)]
pub struct CourseInstanceId(i32);

impls_for_integer_newtype!(CourseInstanceId);

#[cfg(feature = "sea-orm")]
use crate::macros::impls_for_seaorm_integer_newtype;

#[cfg(feature = "sea-orm")]
impls_for_seaorm_integer_newtype!(CourseInstanceId);
