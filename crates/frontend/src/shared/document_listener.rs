use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, KeyboardEvent};

/// `keydown` listener on the document, removed when dropped.
///
/// Holding the guard is holding the subscription: store it while it is needed
/// and drop it on every exit path.
pub struct DocumentKeyListener {
    document: Document,
    closure: Closure<dyn FnMut(Event)>,
}

impl DocumentKeyListener {
    /// Returns `None` outside a browser document or if the listener could not
    /// be registered.
    pub fn attach(mut on_key: impl FnMut(&KeyboardEvent) + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;

        let closure = Closure::wrap(Box::new(move |event: Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                on_key(keyboard_event);
            }
        }) as Box<dyn FnMut(_)>);

        document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { document, closure })
    }
}

impl Drop for DocumentKeyListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.closure.as_ref().unchecked_ref());
    }
}
