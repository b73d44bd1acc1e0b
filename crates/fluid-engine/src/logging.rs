use std::panic::UnwindSafe;
use std::sync::Once;

#[cfg(target_os = "android")]
use crate::config::EngineConfig;

static PANIC_HOOK: Once = Once::new();

/// Route `log` records to logcat. Safe to call more than once; only the
/// first call configures the logger.
#[cfg(target_os = "android")]
pub fn init_android_logging(config: &EngineConfig) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(config.level_filter())
            .with_tag(config.log_tag.as_str()),
    );
}

/// Log panics before they unwind into the caller.
pub fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let location = info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown".to_string());
            log::error!("PANIC at {}: {}", location, panic_message(info.payload()));
        }));
    });
}

/// Run `f`, logging and swallowing a panic instead of letting it unwind into
/// the caller. Returns `None` if `f` panicked.
pub fn catch_panic<R>(name: &str, f: impl FnOnce() -> R + UnwindSafe) -> Option<R> {
    match std::panic::catch_unwind(f) {
        Ok(value) => Some(value),
        Err(payload) => {
            log::error!(
                target: "FluidEngine",
                "{} panicked: {}",
                name,
                panic_message(payload.as_ref())
            );
            None
        }
    }
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "Unknown panic".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_message_from_str_and_string() {
        let caught = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(panic_message(caught.as_ref()), "boom");

        let caught = std::panic::catch_unwind(|| panic!("{} {}", "formatted", 7)).unwrap_err();
        assert_eq!(panic_message(caught.as_ref()), "formatted 7");

        let caught = std::panic::catch_unwind(|| std::panic::panic_any(5u8)).unwrap_err();
        assert_eq!(panic_message(caught.as_ref()), "Unknown panic");
    }

    #[test]
    fn catch_panic_passes_values_through() {
        assert_eq!(catch_panic("frame", || 7), Some(7));
    }

    #[test]
    fn catch_panic_swallows_panics() {
        let result: Option<()> = catch_panic("JNI_OnLoad", || panic!("logger setup failed"));
        assert_eq!(result, None);
    }
}
