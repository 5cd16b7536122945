pub mod course;
pub mod enrollment;
pub mod outline;
