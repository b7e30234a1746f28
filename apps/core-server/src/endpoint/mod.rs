pub mod course;
pub mod misc;
