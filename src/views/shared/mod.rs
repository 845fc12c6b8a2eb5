pub mod spinner;

pub use spinner::render_spinner;
