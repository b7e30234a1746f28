pub mod course;
pub mod error;
pub mod seed;

#[cfg(test)]
pub(crate) mod test_utilities;
