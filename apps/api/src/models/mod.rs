pub mod job;
pub mod resume;
pub mod skills;

pub use job::JobRecord;
pub use resume::ResumeRecord;
pub use skills::SkillVector;
