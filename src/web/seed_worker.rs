//! Main-thread handle for the seed worker.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::MessageEvent;

use crate::seed_client::SeedClient;

/// Handle to the worker hosting the seed generator.
///
/// Owns the single-flight guard: at most one request may be outstanding,
/// and a second one is rejected until the reply arrives. The reply callback
/// receives the raw reply envelope (a JSON string) as posted by the worker.
#[wasm_bindgen]
pub struct SeedWorker {
    worker: web_sys::Worker,
    client: Rc<RefCell<SeedClient>>,
    _onmessage: Closure<dyn FnMut(MessageEvent)>,
}

#[wasm_bindgen]
impl SeedWorker {
    /// Spawn the worker from its script URL and register the reply callback.
    #[wasm_bindgen(constructor)]
    pub fn new(script_url: &str, on_reply: js_sys::Function) -> Result<SeedWorker, JsValue> {
        let worker = web_sys::Worker::new(script_url)?;
        let client = Rc::new(RefCell::new(SeedClient::new()));

        let callback_client = Rc::clone(&client);
        let onmessage = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            // Re-arm before dispatching so the callback can request again.
            callback_client.borrow_mut().finish();
            if on_reply.call1(&JsValue::NULL, &event.data()).is_err() {
                log::warn!("seed reply callback failed");
            }
        });
        worker.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

        Ok(SeedWorker { worker, client, _onmessage: onmessage })
    }

    /// Send a settings payload to the generator.
    ///
    /// Errors if a request is already in flight, or if the payload cannot be
    /// serialized or posted — in the latter cases the slot is released since
    /// the request never left.
    pub fn request(&self, settings: &JsValue) -> Result<(), JsValue> {
        self.client
            .borrow_mut()
            .begin()
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        let posted = js_sys::JSON::stringify(settings)
            .and_then(|json| self.worker.post_message(&JsValue::from(json)));
        if let Err(err) = posted {
            self.client.borrow_mut().finish();
            return Err(err);
        }
        Ok(())
    }

    /// Whether a request is currently outstanding.
    #[must_use]
    pub fn busy(&self) -> bool {
        self.client.borrow().in_flight()
    }
}
