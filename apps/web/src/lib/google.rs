//! Google Identity Services sign-in button. Expects the GIS script
//! (`https://accounts.google.com/gsi/client`) on the page.

use attendance_core::AttendError;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

fn unavailable() -> AttendError {
    AttendError::Config("Google Identity Services is not available".to_string())
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, AttendError> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or_else(unavailable)
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), AttendError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|_| unavailable())
}

fn method(target: &JsValue, name: &str) -> Result<Function, AttendError> {
    get(target, name)?
        .dyn_into::<Function>()
        .map_err(|_| unavailable())
}

/// Initializes GIS with `client_id` and renders its button into `container_id`.
/// `on_credential` receives the assertion string, or `None` when the provider
/// answered without one.
///
/// # Errors
/// Returns an error when the GIS script is missing or the container does not exist.
pub fn render_sign_in(
    client_id: &str,
    container_id: &str,
    on_credential: impl Fn(Option<String>) + 'static,
) -> Result<(), AttendError> {
    let window = web_sys::window().ok_or(AttendError::Unsupported)?;
    let accounts_id = get(&get(&get(&window, "google")?, "accounts")?, "id")?;

    let callback = Closure::<dyn Fn(JsValue)>::new(move |response: JsValue| {
        let credential = Reflect::get(&response, &JsValue::from_str("credential"))
            .ok()
            .and_then(|value| value.as_string());
        on_credential(credential);
    })
    .into_js_value();

    let options = Object::new();
    set(&options, "client_id", &JsValue::from_str(client_id))?;
    set(&options, "callback", &callback)?;
    method(&accounts_id, "initialize")?
        .call1(&accounts_id, &options)
        .map_err(|_| unavailable())?;

    let container = window
        .document()
        .and_then(|document| document.get_element_by_id(container_id))
        .ok_or_else(unavailable)?;

    let button = Object::new();
    for (key, value) in [
        ("theme", "filled_blue"),
        ("size", "large"),
        ("text", "signin_with"),
        ("shape", "rectangular"),
    ] {
        set(&button, key, &JsValue::from_str(value))?;
    }
    method(&accounts_id, "renderButton")?
        .call2(&accounts_id, &container, &button)
        .map_err(|_| unavailable())?;

    Ok(())
}
