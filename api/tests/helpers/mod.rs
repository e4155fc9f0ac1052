pub mod app;

pub use app::{body_text, make_test_app, send_form, send_json};
