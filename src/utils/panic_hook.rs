use leptos::logging::log;
use std::panic;

/// Sets up a panic hook that adds context for Leptos owner disposal panics
/// on top of the console hook.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") {
            log!("[PANIC] Leptos owner disposal detected. This usually happens when:");
            log!("[PANIC] 1. A component has been unmounted but a timer is still firing");
            log!("[PANIC] 2. An effect or signal update is running after the component is gone");
            log!("[PANIC] 3. A closure or callback is being called after cleanup");

            // The unread-count poll is the only interval in the app; surface
            // its state when an owner disposal hits.
            let js_code = r#"
                if (window.reviewhubUnreadPoll) {
                    console.log('[PANIC] Unread poll state:', window.reviewhubUnreadPoll);
                } else {
                    console.log('[PANIC] No unread poll registered');
                }
            "#;

            let _ = js_sys::eval(js_code);
        }
    }));
}

/// Call during hydration, before mounting the app.
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook installed");
}
