pub mod shared;
pub mod intake_form;
pub mod results;

pub use intake_form::render_intake_form;
pub use results::render_results;
