// ============================================================================
// RESULTS VIEW - Tarjetas por región + consejos del chatbot
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::{capitalize, AnalysisResult};
use crate::services::ApiClient;
use crate::state::{AdviceContent, ResultsState};
use crate::utils::tr;
use crate::views::shared::render_spinner;

pub fn render_results(state: &ResultsState) -> Result<Element, JsValue> {
    let wrapper = ElementBuilder::new("div")?
        .class("results-wrapper")
        .build();

    // Overlay bloqueante mientras llega /result
    if state.get_loading() {
        let overlay = render_spinner("loading-overlay", &tr("loading_results"))?;
        append_child(&wrapper, &overlay)?;
        return Ok(wrapper);
    }

    let user_id = state.get_user_id().unwrap_or_default();

    let title = ElementBuilder::new("h1")?
        .class("results-title")
        .text(&format!("{} {}", tr("results_title"), user_id))
        .build();

    let upload_time = ElementBuilder::new("p")?
        .class("upload-time")
        .text(&format!("{} {}", tr("upload_time"), state.get_upload_time()))
        .build();

    append_child(&wrapper, &title)?;
    append_child(&wrapper, &upload_time)?;

    if let Some(error) = state.get_error() {
        let notice = ElementBuilder::new("p")?
            .class("results-error")
            .text(&error)
            .build();
        append_child(&wrapper, &notice)?;
    }

    let cards = ElementBuilder::new("div")?
        .class("image-container")
        .build();
    let api = ApiClient::new();
    for result in state.get_results().iter() {
        let image_url = api.uploaded_image_url(&user_id, &result.filename);
        append_child(&cards, &render_result_card(result, &image_url)?)?;
    }
    let result_container = ElementBuilder::new("div")?
        .class("result-container")
        .child(cards)?
        .build();
    append_child(&wrapper, &result_container)?;

    append_child(&wrapper, &render_advice_section(state)?)?;

    let back_link = ElementBuilder::new("a")?
        .class("back-link")
        .attr("href", "/")?
        .text(&tr("back_home"))
        .build();
    append_child(&wrapper, &back_link)?;

    Ok(wrapper)
}

fn render_result_card(result: &AnalysisResult, image_url: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("result-card")
        .child(ElementBuilder::new("h3")?
            .text(&format!("{} Face", capitalize(&result.face_part)))
            .build())?
        .child(ElementBuilder::new("img")?
            .class("result-image")
            .attr("src", image_url)?
            .attr("alt", &format!("{} face", result.face_part))?
            .build())?
        .child(ElementBuilder::new("p")?
            .text(&format!("{} {}", tr("severity"), result.severity))
            .build())?
        .child(ElementBuilder::new("p")?
            .text(&format!("{} {}", tr("confidence"), result.confidence.as_str()))
            .build())?
        .build();
    Ok(card)
}

fn render_advice_section(state: &ResultsState) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("div")?
        .class("advice-section")
        .child(ElementBuilder::new("h2")?
            .text(&tr("advice_title"))
            .build())?
        .build();

    if state.get_advice_loading() {
        append_child(&section, &render_spinner("advice-loading", &tr("advice_loading"))?)?;
        return Ok(section);
    }

    match state.get_advice() {
        Some(AdviceContent::Html(html)) => {
            let body = ElementBuilder::new("div")?
                .class("advice-html")
                .html(&html)
                .build();
            append_child(&section, &body)?;
        }
        Some(AdviceContent::Fallback(text)) => {
            let body = ElementBuilder::new("div")?
                .class("advice-html advice-failed")
                .text(&text)
                .build();
            append_child(&section, &body)?;
        }
        None => {}
    }

    Ok(section)
}
