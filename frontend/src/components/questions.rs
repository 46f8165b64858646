//! Summary shown once the backend has parsed a file.

use leptos::*;

use crate::types::Questions;

/// Number of questions in a backend payload, when it is a list.
pub fn question_count(questions: &Questions) -> Option<usize> {
    questions.as_array().map(Vec::len)
}

#[component]
pub fn QuestionsReady(
    questions: ReadSignal<Option<Questions>>,
    /// Go back to the upload widget
    #[prop(into)]
    on_reset: Callback<()>,
) -> impl IntoView {
    let summary = move || {
        questions.with(|q| match q.as_ref().and_then(question_count) {
            Some(1) => "1 question loaded".to_string(),
            Some(n) => format!("{} questions loaded", n),
            None => "Questions loaded".to_string(),
        })
    };

    view! {
        <div class="questions-ready fade-in">
            <div class="questions-title">"✅ " {summary}</div>
            <button class="btn btn-secondary" on:click=move |_| on_reset.call(())>
                "Upload another file"
            </button>
        </div>
    }
}
