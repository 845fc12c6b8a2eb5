use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};

/// Bloque spinner + mensaje. `class` decide si cubre toda la vista o solo una sección.
pub fn render_spinner(class: &str, message: &str) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class(class)
        .build();

    let spinner = ElementBuilder::new("div")?
        .class("spinner")
        .build();

    let text = ElementBuilder::new("p")?
        .text(message)
        .build();

    append_child(&container, &spinner)?;
    append_child(&container, &text)?;
    Ok(container)
}
