// Course pipeline effects
pub mod content;
pub mod enroll;
pub mod extraction;
pub mod layout;
pub mod prompts;
pub mod quota;

pub use content::expand_course_content;
pub use enroll::{enroll, enrolled_courses, EnrollmentOutcome};
pub use extraction::{extract_json, extract_typed, ExtractError};
pub use layout::synthesize_layout;
pub use quota::may_create;
