// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod intake_state;
pub mod results_state;

pub use reactivity::RenderGate;
pub use intake_state::*;
pub use results_state::*;
