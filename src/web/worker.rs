//! Worker-side entry point.
//!
//! The worker host script loads the seed-generator artifact — which installs
//! a global `generate_seed` function in the worker scope — and then calls
//! [`boot_worker`]. The message handler is registered before the unit is
//! resolved, so messages arriving early land in the relay's loading queue;
//! binding the unit is deferred to a spawned task, and draining the queue
//! posts the pending replies as soon as it completes.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{DedicatedWorkerGlobalScope, MessageEvent};

use crate::relay::{ComputationUnit, ComputeError, Relay, RelayReply};
use crate::web::init_logging;

/// Function the external module is expected to install in the worker scope.
const UNIT_EXPORT: &str = "generate_seed";

/// Computation unit backed by the module's exported function.
///
/// Settings cross into JS as a structured value and the result comes back
/// the same way; both conversions go through `JSON` so the payloads stay
/// opaque to this crate.
pub struct JsUnit {
    generate: js_sys::Function,
}

impl ComputationUnit for JsUnit {
    fn compute(&mut self, settings: &Value) -> Result<Value, ComputeError> {
        let input = js_sys::JSON::parse(&settings.to_string())
            .map_err(|err| ComputeError(describe(&err)))?;
        let output = self
            .generate
            .call1(&JsValue::NULL, &input)
            .map_err(|err| ComputeError(describe(&err)))?;
        let json = js_sys::JSON::stringify(&output)
            .map(String::from)
            .map_err(|err| ComputeError(describe(&err)))?;
        serde_json::from_str(&json).map_err(|err| ComputeError(err.to_string()))
    }
}

/// Start the relay inside the worker context.
#[wasm_bindgen]
pub fn boot_worker() {
    init_logging();

    let scope: DedicatedWorkerGlobalScope = js_sys::global().unchecked_into();
    let relay = Rc::new(RefCell::new(Relay::<JsUnit>::new()));

    let handler_scope = scope.clone();
    let handler_relay = Rc::clone(&relay);
    let onmessage = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        let settings = match parse_settings(&event.data()) {
            Ok(value) => value,
            Err(error) => {
                post_reply(&handler_scope, &RelayReply::Error { error });
                return;
            }
        };
        if let Some(reply) = handler_relay.borrow_mut().on_message(settings) {
            post_reply(&handler_scope, &reply);
        }
    });
    scope.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
    onmessage.forget();

    wasm_bindgen_futures::spawn_local(async move {
        let replies = match resolve_unit() {
            Ok(unit) => relay.borrow_mut().module_loaded(unit),
            Err(error) => relay.borrow_mut().module_failed(error),
        };
        for reply in replies {
            post_reply(&scope, &reply);
        }
    });
}

/// Bind the unit's exported function from the worker's global scope.
fn resolve_unit() -> Result<JsUnit, String> {
    let export = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(UNIT_EXPORT))
        .map_err(|err| describe(&err))?;
    match export.dyn_into::<js_sys::Function>() {
        Ok(generate) => Ok(JsUnit { generate }),
        Err(_) => Err(format!("worker scope has no {UNIT_EXPORT} function")),
    }
}

/// Decode an inbound message; only JSON well-formedness is checked here.
fn parse_settings(data: &JsValue) -> Result<Value, String> {
    let Some(text) = data.as_string() else {
        return Err("settings message must be a JSON string".to_owned());
    };
    serde_json::from_str(&text).map_err(|err| format!("settings message is not valid JSON: {err}"))
}

/// Post one reply envelope back to the main thread.
fn post_reply(scope: &DedicatedWorkerGlobalScope, reply: &RelayReply) {
    match serde_json::to_string(reply) {
        Ok(json) => {
            if scope.post_message(&JsValue::from_str(&json)).is_err() {
                log::warn!("failed to post relay reply");
            }
        }
        Err(err) => log::warn!("failed to encode relay reply: {err}"),
    }
}

fn describe(err: &JsValue) -> String {
    match err.as_string() {
        Some(text) => text,
        None => format!("{err:?}"),
    }
}
