// ============================================================================
// INTAKE STATE - Estado del formulario (nombre + 3 fotos)
// ============================================================================
// Vive solo mientras la pantalla está montada: no se persiste nada.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use crate::models::{FaceImages, FacePosition, SelectedImage};
use crate::state::reactivity::ChangeNotifier;

/// NameEntry -> UploadPending -> Submitted (con "back" manual a NameEntry)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStep {
    NameEntry,
    UploadPending,
    Submitted,
}

#[derive(Clone)]
pub struct IntakeState {
    pub step: Rc<RefCell<FormStep>>,
    pub username: Rc<RefCell<String>>,
    pub user_id: Rc<RefCell<String>>,
    pub images: Rc<RefCell<HashMap<FacePosition, SelectedImage>>>,
    pub previews: Rc<RefCell<HashMap<FacePosition, String>>>,
    pub notifier: ChangeNotifier,
}

impl IntakeState {
    pub fn new() -> Self {
        Self {
            step: Rc::new(RefCell::new(FormStep::NameEntry)),
            username: Rc::new(RefCell::new(String::new())),
            user_id: Rc::new(RefCell::new(String::new())),
            images: Rc::new(RefCell::new(HashMap::new())),
            previews: Rc::new(RefCell::new(HashMap::new())),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn get_step(&self) -> FormStep {
        *self.step.borrow()
    }

    pub fn set_step(&self, step: FormStep) {
        *self.step.borrow_mut() = step;
    }

    /// Sin notificar: el input conserva su valor y no hace falta re-render
    pub fn set_username(&self, username: String) {
        *self.username.borrow_mut() = username;
    }

    pub fn get_username(&self) -> String {
        self.username.borrow().clone()
    }

    pub fn set_user_id(&self, user_id: String) {
        *self.user_id.borrow_mut() = user_id;
    }

    pub fn get_user_id(&self) -> String {
        self.user_id.borrow().clone()
    }

    /// Reemplaza imagen y preview del slot
    pub fn set_image(&self, position: FacePosition, image: SelectedImage) {
        let preview = image.to_data_url();
        self.images.borrow_mut().insert(position, image);
        self.previews.borrow_mut().insert(position, preview);
    }

    /// Limpia solo ese slot
    pub fn clear_image(&self, position: FacePosition) {
        self.images.borrow_mut().remove(&position);
        self.previews.borrow_mut().remove(&position);
    }

    pub fn get_image(&self, position: FacePosition) -> Option<SelectedImage> {
        self.images.borrow().get(&position).cloned()
    }

    pub fn get_preview(&self, position: FacePosition) -> Option<String> {
        self.previews.borrow().get(&position).cloned()
    }

    /// Slots vacíos, en orden del formulario
    pub fn missing_positions(&self) -> Vec<FacePosition> {
        let images = self.images.borrow();
        FacePosition::ALL
            .into_iter()
            .filter(|position| !images.contains_key(position))
            .collect()
    }

    /// Las tres imágenes si están todas
    pub fn complete_images(&self) -> Option<FaceImages> {
        let images = self.images.borrow();
        Some(FaceImages {
            left: images.get(&FacePosition::Left)?.clone(),
            middle: images.get(&FacePosition::Middle)?.clone(),
            right: images.get(&FacePosition::Right)?.clone(),
        })
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.notifier.subscribe(callback);
    }

    pub fn notify_subscribers(&self) {
        self.notifier.notify();
    }
}

impl Default for IntakeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str, bytes: &[u8]) -> SelectedImage {
        SelectedImage::new(name, "image/jpeg", bytes.to_vec())
    }

    #[test]
    fn reselecting_replaces_preview() {
        let state = IntakeState::new();
        state.set_image(FacePosition::Left, image("a.jpg", b"first"));
        let first = state.get_preview(FacePosition::Left).unwrap();
        state.set_image(FacePosition::Left, image("b.jpg", b"second"));
        let second = state.get_preview(FacePosition::Left).unwrap();

        assert_ne!(first, second);
        assert_eq!(second, image("b.jpg", b"second").to_data_url());
        assert_eq!(state.previews.borrow().len(), 1);
        assert_eq!(state.get_image(FacePosition::Left).unwrap().file_name, "b.jpg");
    }

    #[test]
    fn clearing_one_slot_keeps_the_others() {
        let state = IntakeState::new();
        for position in FacePosition::ALL {
            state.set_image(position, image(position.as_str(), position.as_str().as_bytes()));
        }
        state.clear_image(FacePosition::Middle);

        assert_eq!(state.get_image(FacePosition::Middle), None);
        assert_eq!(state.get_preview(FacePosition::Middle), None);
        assert!(state.get_preview(FacePosition::Left).is_some());
        assert!(state.get_preview(FacePosition::Right).is_some());
        assert_eq!(state.missing_positions(), vec![FacePosition::Middle]);
        assert!(state.complete_images().is_none());
    }

    #[test]
    fn complete_images_when_all_slots_filled() {
        let state = IntakeState::new();
        assert_eq!(state.missing_positions(), FacePosition::ALL.to_vec());
        for position in FacePosition::ALL {
            state.set_image(position, image(position.as_str(), b"x"));
        }
        let images = state.complete_images().unwrap();
        assert_eq!(images.right.file_name, "right");
        assert!(state.missing_positions().is_empty());
    }
}
