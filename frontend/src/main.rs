//! Entry point for the WASM application

pub fn main() {
    quizme_frontend::run();
}
