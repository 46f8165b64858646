//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - Quiz file upload to the QuizMe backend

pub mod upload;

pub use upload::*;
