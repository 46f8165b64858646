//! QuizMe - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading quiz files to the QuizMe backend,
//! which parses them into questions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  └── UploadSection or QuestionsReady                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Backend URL, accepted extensions, user-facing messages
//! - [`types`] - Wire types and upload errors
//! - [`state`] - Upload widget state and its transitions
//! - [`components`] - UI components (Hero, Upload, etc.)
//! - [`services`] - Backend communication

use leptos::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    FileHandle,
    // API
    Questions, UploadResponse, ErrorBody,
    // Errors
    UploadError, AppResult,
};

// State
pub use state::{UploadForm, UploadState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Start the application. Called once from the trunk binary.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 QuizMe - Starting Leptos App (backend: {})", backend_url());

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (questions, set_questions) = create_signal(None::<Questions>);

    let on_file_processed = move |parsed: Questions| {
        log::info!("🧠 Questions received from backend");
        set_questions.set(Some(parsed));
    };

    let on_reset = move |_: ()| set_questions.set(None);

    view! {
        <div class="container">
            <Hero/>

            // Show the upload widget until questions arrive
            <Show
                when=move || questions.with(Option::is_none)
                fallback=move || view! {
                    <QuestionsReady questions=questions on_reset=on_reset/>
                }
            >
                <UploadSection on_file_processed=on_file_processed/>
            </Show>
        </div>

        <Footer/>
    }
}
