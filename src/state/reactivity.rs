// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Lista compartida de subscribers. Los clones comparten la misma lista.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify(&self) {
        // Copia para que un callback pueda suscribir sin un doble borrow
        let callbacks: Vec<Callback> = self.subscribers.borrow().iter().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }
}

/// Marca de render pendiente: solo la primera notificación de una ráfaga
/// programa el render, las demás lo encuentran ya en cola.
#[derive(Clone, Default)]
pub struct RenderGate {
    pending: Rc<Cell<bool>>,
}

impl RenderGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` si el llamador debe programar el render
    pub fn try_schedule(&self) -> bool {
        !self.pending.replace(true)
    }

    /// El render programado arrancó: la próxima notificación vuelve a programar
    pub fn complete(&self) {
        self.pending.set(false);
    }
}
