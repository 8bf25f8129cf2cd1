//! Browser entry point: binds `.roll-button` elements once the document
//! is parsed and renders roll markers into the neighbouring
//! `.roll-result`.

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod http;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use crate::dom::DomOutput;
    use crate::dom::DomPage;
    use crate::http::GlooFetch;
    use roller_lib::output::Output;
    use roller_lib::Binder;
    use roller_lib::Config;
    use roller_lib::Invoker;
    use roller_lib::Request;
    use tracing::debug;
    use tracing::error;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::Document;
    use web_sys::Element;

    fn document() -> Option<Document> {
        web_sys::window().and_then(|window| window.document())
    }

    fn bind_document(document: Document) -> usize {
        Binder::new(GlooFetch, Config::default()).bind(&DomPage(document))
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();

        let Some(document) = document() else {
            error!("No document to bind roll buttons in");
            return;
        };
        if document.ready_state() == "loading" {
            debug!("Waiting for DOMContentLoaded");
            let target = document.clone();
            let on_ready = Closure::once_into_js(move || {
                bind_document(target);
            });
            if let Err(e) = document
                .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            {
                error!("Could not wait for DOMContentLoaded: {:?}", e);
            }
        } else {
            bind_document(document);
        }
    }

    /// Bind triggers added after page load, already bound ones are skipped
    #[wasm_bindgen]
    pub fn bind() -> usize {
        document().map(bind_document).unwrap_or(0)
    }

    /// Roll once and write the marker into `output`, returns the marker
    #[wasm_bindgen]
    pub async fn roll(
        character_id: String,
        attribute: String,
        skill: String,
        output: Option<Element>,
    ) -> String {
        let output = output.map(DomOutput);
        Invoker::new(GlooFetch)
            .roll(
                &Request::new(character_id, attribute, skill),
                output.as_ref().map(|o| o as &dyn Output),
            )
            .await
            .marker()
    }
}
