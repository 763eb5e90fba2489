pub mod explorer;
pub mod render_failure;
