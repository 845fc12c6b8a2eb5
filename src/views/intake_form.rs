// ============================================================================
// INTAKE FORM VIEW - Nombre + 3 fotos (left / middle / right)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};
use crate::dom::{
    alert, append_child, create_element, first_file_from_event, on_change, on_click, on_input,
    on_submit, read_selected_image, set_attribute, ElementBuilder,
};
use crate::models::FacePosition;
use crate::state::{FormStep, IntakeState};
use crate::utils::{navigate_to, tr};
use crate::viewmodels::IntakeViewModel;

/// Renderizar el formulario según el paso actual
pub fn render_intake_form(state: &IntakeState) -> Result<Element, JsValue> {
    log::info!("🎬 [FORM] render_intake_form() paso: {:?}", state.get_step());

    let container = ElementBuilder::new("div")?
        .class("form-container")
        .build();

    let title = ElementBuilder::new("div")?
        .class("body-title")
        .text(&tr("upload_photo"))
        .build();
    append_child(&container, &title)?;

    let body = match state.get_step() {
        FormStep::NameEntry => render_name_step(state)?,
        FormStep::UploadPending | FormStep::Submitted => render_upload_step(state)?,
    };
    append_child(&container, &body)?;

    Ok(container)
}

fn render_name_step(state: &IntakeState) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?
        .class("intake-form")
        .build();

    let label = ElementBuilder::new("label")?
        .class("form-label")
        .attr("for", "username")?
        .text(&tr("enter_name"))
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", "text")?;
    set_attribute(&input, "id", "username")?;
    set_attribute(&input, "placeholder", &tr("name_placeholder"))?;
    set_attribute(&input, "required", "")?;
    set_attribute(&input, "value", &state.get_username())?;
    input.set_class_name("form-input");

    {
        let state = state.clone();
        on_input(&input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                state.set_username(target.value());
            }
        })?;
    }

    let next_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("form-button")
        .text(&tr("next"))
        .build();

    {
        let state = state.clone();
        let submit = move || {
            let state = state.clone();
            spawn_local(async move {
                let name = state.get_username();
                let vm = IntakeViewModel::new(state);
                if let Err(message) = vm.submit_username(&name).await {
                    alert(&message);
                }
            });
        };
        let submit_on_enter = submit.clone();
        on_click(&next_btn, move |_| submit())?;
        // Enter dentro del input dispara submit del form
        on_submit(&form, move || submit_on_enter())?;
    }

    append_child(&form, &label)?;
    append_child(&form, &input)?;
    append_child(&form, &next_btn)?;
    Ok(form)
}

fn render_upload_step(state: &IntakeState) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?
        .class("intake-form")
        .attr("enctype", "multipart/form-data")?
        .build();

    // Cabecera: [← Back] [título] [hueco]
    let header = ElementBuilder::new("div")?
        .class("upload-header")
        .build();

    let back_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-outline-danger")
        .text(&tr("back"))
        .build();
    {
        let state = state.clone();
        on_click(&back_btn, move |_| {
            IntakeViewModel::new(state.clone()).go_back();
        })?;
    }

    let heading = ElementBuilder::new("div")?
        .class("upload-heading")
        .text(&tr("upload_three"))
        .build();

    let spacer = ElementBuilder::new("div")?
        .class("upload-spacer")
        .build();

    append_child(&header, &back_btn)?;
    append_child(&header, &heading)?;
    append_child(&header, &spacer)?;

    let previews = ElementBuilder::new("div")?
        .class("preview-container")
        .build();
    for position in FacePosition::ALL {
        append_child(&previews, &render_preview_block(state, position)?)?;
    }

    let upload_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("form-button")
        .text(&tr("upload_images"))
        .build();

    {
        let state = state.clone();
        on_submit(&form, move || {
            let state = state.clone();
            spawn_local(async move {
                let vm = IntakeViewModel::new(state);
                match vm.submit_upload().await {
                    Ok(url) => {
                        if let Err(e) = navigate_to(&url) {
                            log::error!("❌ [FORM] {}", e);
                        }
                    }
                    Err(message) => alert(&message),
                }
            });
        })?;
    }

    append_child(&form, &header)?;
    append_child(&form, &previews)?;
    append_child(&form, &upload_btn)?;
    Ok(form)
}

fn render_preview_block(state: &IntakeState, position: FacePosition) -> Result<Element, JsValue> {
    let block = ElementBuilder::new("div")?
        .class("preview-block")
        .build();

    // Sin `required`: cada render recrea el input vacío, la validación la hace el viewmodel
    let input = create_element("input")?;
    set_attribute(&input, "type", "file")?;
    set_attribute(&input, "accept", "image/*")?;
    set_attribute(&input, "name", position.as_str())?;
    input.set_class_name("form-input");

    {
        let state = state.clone();
        on_change(&input, move |e: web_sys::Event| {
            let file = match first_file_from_event(&e) {
                Some(file) => file,
                None => return,
            };
            let state = state.clone();
            spawn_local(async move {
                match read_selected_image(file).await {
                    Ok(image) => IntakeViewModel::new(state).select_image(position, image),
                    Err(e) => log::error!("❌ [FORM] Error leyendo imagen {}: {:?}", position.as_str(), e),
                }
            });
        })?;
    }
    append_child(&block, &input)?;

    if let Some(preview) = state.get_preview(position) {
        let img = ElementBuilder::new("img")?
            .class("preview-image")
            .attr("src", &preview)?
            .attr("alt", &format!("{} Face", position.as_str()))?
            .build();

        let delete_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-danger")
            .text(&tr("delete"))
            .build();
        {
            let state = state.clone();
            on_click(&delete_btn, move |_| {
                IntakeViewModel::new(state.clone()).clear_image(position);
            })?;
        }

        append_child(&block, &img)?;
        append_child(&block, &create_element("br")?)?;
        append_child(&block, &delete_btn)?;
    }

    Ok(block)
}
