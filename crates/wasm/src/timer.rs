//! A `setTimeout` that owns its callback, so cancelling it frees the closure.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

type Pending = (i32, Closure<dyn FnMut()>);

/// At most one pending callback. Re-arming cancels and drops the previous
/// one. The callback must not re-arm or cancel its own `Timeout`, since that
/// would drop the closure while it runs.
#[derive(Default)]
pub struct Timeout {
    pending: RefCell<Option<Pending>>,
}

impl Timeout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(
        &self,
        window: &Window,
        delay_ms: f64,
        callback: impl FnMut() + 'static,
    ) -> Result<(), JsValue> {
        self.cancel(window);
        let callback = Closure::<dyn FnMut()>::new(callback);
        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms.round() as i32,
        )?;
        *self.pending.borrow_mut() = Some((handle, callback));
        Ok(())
    }

    /// Clear the browser timer and drop its closure. A no-op when nothing is
    /// armed; clearing a timer that already fired is harmless.
    pub fn cancel(&self, window: &Window) {
        let pending = self.pending.borrow_mut().take();
        if let Some((handle, _closure)) = pending {
            window.clear_timeout_with_handle(handle);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::rc::Rc;

    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn window() -> Option<Window> {
        web_sys::window()
    }

    #[wasm_bindgen_test]
    fn rearming_drops_the_cancelled_callback() {
        let Some(window) = window() else { return };
        let timeout = Timeout::new();
        let captured = Rc::new(());

        for _ in 0..5 {
            let held = captured.clone();
            let armed = timeout.arm(&window, 10_000.0, move || {
                let _count = Rc::strong_count(&held);
            });
            assert!(armed.is_ok());
        }
        // Only the newest callback is still alive.
        assert_eq!(Rc::strong_count(&captured), 2);

        timeout.cancel(&window);
        assert!(timeout.pending.borrow().is_none());
        assert_eq!(Rc::strong_count(&captured), 1);
    }
}
