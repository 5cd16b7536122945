// Courses domain - generative course synthesis and expansion
pub mod data;
pub mod effects;
pub mod error;
pub mod models;

pub use data::{CourseRequest, CreatedCourse, ExpandedCourse};
pub use error::CourseError;
pub use models::course::Course;
pub use models::enrollment::Enrollment;
pub use models::outline::{Chapter, ChapterContent, CourseOutline, TopicContent, VideoRef};
