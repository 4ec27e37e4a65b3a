pub mod config;
pub mod validation;
pub mod amounts;
pub mod explorer;
pub mod demo;
pub mod clipboard;
pub mod responses;
pub mod logging;
pub mod id_generator;
