//! Browser Transport
//!
//! Executes an `HttpRequest` through `window.fetch`.

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::error::ApiError;
use super::http::{HttpRequest, HttpResponse};

/// Send the request and collect status and body text.
///
/// Non-2xx responses come back as data; only a rejected fetch is an error here.
pub async fn execute(request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    let init = RequestInit::new();
    init.set_method(request.method.as_str());

    let headers = Headers::new().map_err(network)?;
    for (name, value) in &request.headers {
        headers.set(name, value).map_err(network)?;
    }
    init.set_headers(&headers);

    if let Some(body) = &request.body {
        init.set_body(&JsValue::from_str(body));
    }

    let js_request = Request::new_with_str_and_init(&request.url, &init).map_err(network)?;
    let promise: Promise = window.fetch_with_request(&js_request);
    let response: Response = JsFuture::from(promise)
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;

    let status = response.status();
    let text = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?;

    Ok(HttpResponse {
        status,
        body: text.as_string().unwrap_or_default(),
    })
}

fn network(err: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", err))
}
