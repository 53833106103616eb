//! Backend worker: owns the tokio runtime and the employee list controller.

pub mod commands;
pub mod runtime;
pub mod view;
