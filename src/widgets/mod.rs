pub mod auth_modal;
pub mod dashboard;
pub mod effects;
pub mod job_tracker;
pub mod landing;
pub mod resume_gallery;
pub mod subscription;
pub mod toasts;
