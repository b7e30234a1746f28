pub mod error;
pub(crate) mod response;
