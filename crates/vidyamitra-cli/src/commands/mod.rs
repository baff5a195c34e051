pub mod evaluate;
pub mod health;
pub mod interview;
pub mod jobs;
pub mod plan;
pub mod progress;
pub mod quiz;
pub mod resume;
