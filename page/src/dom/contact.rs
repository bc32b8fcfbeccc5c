//! Contact form bindings. Validation feedback goes through `alert`; nothing
//! is sent anywhere.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, FormData, HtmlFormElement, Window};

use crate::consts::CONTACT_FORM_SELECTOR;
use crate::contact::{ContactSubmission, SUCCESS_MESSAGE};
use crate::dom::{Listeners, report};

/// Read the three contact fields. Missing fields read as empty.
fn read_submission(form: &HtmlFormElement) -> Result<ContactSubmission, JsValue> {
    let data = FormData::new_with_form(form)?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Ok(ContactSubmission { name: field("name"), email: field("email"), message: field("message") })
}

fn handle_submit(window: &Window, form: &HtmlFormElement) -> Result<(), JsValue> {
    let submission = read_submission(form)?;
    match submission.validate() {
        Ok(()) => {
            log::info!("contact form accepted");
            window.alert_with_message(SUCCESS_MESSAGE)?;
            form.reset();
        }
        Err(e) => {
            log::debug!("contact form rejected: {e}");
            window.alert_with_message(&e.to_string())?;
        }
    }
    Ok(())
}

/// Intercept submission of `.contact-form`, if the page has one.
///
/// # Errors
///
/// Returns `Err` if the query or listener registration fails.
pub fn mount(window: &Window, document: &Document, listeners: &mut Listeners) -> Result<(), JsValue> {
    let Some(form) = document
        .query_selector(CONTACT_FORM_SELECTOR)?
        .and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned())
    else {
        return Ok(());
    };
    let window = window.clone();
    let target = form.clone();
    listeners.on(&form, "submit", move |event: Event| {
        event.prevent_default();
        report("contact submit", handle_submit(&window, &target));
    })?;
    Ok(())
}
