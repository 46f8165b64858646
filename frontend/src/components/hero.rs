//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"QuizMe"</h1>
            <p class="subtitle">
                "Turn your question files into interactive tests. "
                "Upload a document and we will extract the questions for you."
            </p>
        </div>
    }
}
