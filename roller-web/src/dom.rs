use roller_lib::binder::Handler;
use roller_lib::binder::Page;
use roller_lib::binder::Trigger;
use roller_lib::output::Output;
use tracing::error;
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;
use web_sys::Element;

pub struct DomPage(pub Document);

impl Page for DomPage {
    type Trigger = DomTrigger;

    fn triggers(&self, selector: &str) -> Vec<DomTrigger> {
        match self.0.query_selector_all(selector) {
            Ok(nodes) => (0..nodes.length())
                .filter_map(|index| nodes.item(index))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .map(DomTrigger)
                .collect(),
            Err(e) => {
                error!("Invalid trigger selector `{}`: {:?}", selector, e);
                Vec::new()
            }
        }
    }
}

#[derive(Clone)]
pub struct DomTrigger(pub Element);

impl Trigger for DomTrigger {
    type Output = DomOutput;

    fn data(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    /// Parent element first, then its first descendant matching `selector`
    fn output(&self, selector: &str) -> Option<DomOutput> {
        self.0
            .parent_element()?
            .query_selector(selector)
            .ok()
            .flatten()
            .map(DomOutput)
    }

    fn is_marked(&self, name: &str) -> bool {
        self.0.has_attribute(name)
    }

    fn mark(&self, name: &str) {
        if let Err(e) = self.0.set_attribute(name, "") {
            warn!("Could not set `{}` on trigger: {:?}", name, e);
        }
    }

    fn on_click(&self, handler: Handler) {
        let listener = Closure::<dyn FnMut()>::new(move || {
            wasm_bindgen_futures::spawn_local(handler());
        });
        if let Err(e) = self
            .0
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        {
            error!("Could not attach click handler: {:?}", e);
        }
        // lives as long as the page
        listener.forget();
    }
}

pub struct DomOutput(pub Element);

impl Output for DomOutput {
    fn write(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}
