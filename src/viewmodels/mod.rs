pub mod intake_viewmodel;
pub mod results_viewmodel;

pub use intake_viewmodel::IntakeViewModel;
pub use results_viewmodel::ResultsViewModel;
