pub mod models;
pub mod utilities;
pub mod services;
pub mod forms;
pub mod views;
