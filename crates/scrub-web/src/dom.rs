use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up the scrub target `<video>` by element id.
pub fn video_element(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlVideoElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?;
    el.dyn_into::<web::HtmlVideoElement>()
        .map_err(|el| anyhow::anyhow!("#{id} is a <{}>, not a <video>", el.tag_name()))
}
