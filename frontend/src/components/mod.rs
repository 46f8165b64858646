//! UI Components for the QuizMe application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Quiz file upload with drag & drop
//! - [`QuestionsReady`] - Summary of the parsed questions

mod hero;
mod upload;
mod questions;
mod footer;

pub use hero::*;
pub use upload::*;
pub use questions::*;
pub use footer::*;
