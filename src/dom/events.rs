// ============================================================================
// EVENT HANDLING
// ============================================================================
// Los closures de los listeners quedan en LISTENERS mientras su árbol está
// montado. App::render llama a release_listeners() antes de vaciar el root:
// un Closure olvidado con forget() no lo libera nadie, ni el navegador.
// ============================================================================

use std::any::Any;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, InputEvent, MouseEvent};

thread_local! {
    static LISTENERS: RefCell<Vec<Box<dyn Any>>> = RefCell::new(Vec::new());
}

fn keep_alive<T: 'static>(listener: T) {
    LISTENERS.with(|listeners| listeners.borrow_mut().push(Box::new(listener)));
}

/// Suelta los closures del árbol actual. Devuelve cuántos se liberaron.
pub fn release_listeners() -> usize {
    let released = LISTENERS.with(|listeners| std::mem::take(&mut *listeners.borrow_mut()));
    released.len()
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    keep_alive(closure);
    Ok(())
}

/// Helper para crear input handler simple
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(InputEvent)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    keep_alive(closure);
    Ok(())
}

/// `change` (inputs de tipo file)
pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    keep_alive(closure);
    Ok(())
}

/// `submit` de un form, con preventDefault ya aplicado
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    keep_alive(closure);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn release_drops_listeners_of_previous_render() {
        release_listeners();
        let dropped = Rc::new(Cell::new(false));
        keep_alive(DropFlag(dropped.clone()));
        keep_alive(DropFlag(Rc::new(Cell::new(false))));
        assert!(!dropped.get());

        assert_eq!(release_listeners(), 2);
        assert!(dropped.get());
        assert_eq!(release_listeners(), 0);
    }
}
