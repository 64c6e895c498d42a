use crate::app::GrokListApp;
use crate::events::Event;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static DEV_API_APP: RefCell<Option<GrokListApp>> = const { RefCell::new(None) };
}

fn with_app<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&GrokListApp) -> R,
{
    DEV_API_APP.with(|cell| cell.borrow().as_ref().map(f))
}

/// Expose dev tooling hooks on `window.__grok_list_dev`.
pub fn expose_dev_api(app: GrokListApp) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };

    DEV_API_APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    let api = js_sys::Object::new();

    let remount_closure = Closure::wrap(Box::new(remount_impl) as Box<dyn Fn() -> bool>);
    js_sys::Reflect::set(
        &api,
        &"remount".into(),
        remount_closure.as_ref().unchecked_ref(),
    )
    .ok();
    remount_closure.forget();

    let dispatch_closure =
        Closure::wrap(Box::new(dispatch_impl) as Box<dyn Fn(String) -> bool>);
    js_sys::Reflect::set(
        &api,
        &"dispatch".into(),
        dispatch_closure.as_ref().unchecked_ref(),
    )
    .ok();
    dispatch_closure.forget();

    js_sys::Reflect::set(&window, &"__grok_list_dev".into(), &api).ok();

    zoon::println!("[Grok List] Dev API exposed on window.__grok_list_dev");
}

fn remount_impl() -> bool {
    with_app(|app| {
        app.remount();
        zoon::println!("[Grok List] Remounted (generation {})", app.mount_generation());
    })
    .is_some()
}

fn dispatch_impl(event_id: String) -> bool {
    let event = match event_id.parse::<Event>() {
        Ok(event) => event,
        Err(error) => {
            zoon::eprintln!("[Grok List] {}", error);
            return false;
        }
    };
    with_app(|app| app.store.dispatch(event)).is_some()
}
