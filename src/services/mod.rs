pub mod employee_service;
pub mod upload_service;
pub mod user_service;
