use jni::{
    JNIEnv,
    objects::JObject,
    sys::{JNI_FALSE, JNI_VERSION_1_6, jboolean, jfloat, jint},
};
use once_cell::sync::OnceCell;
use std::ffi::c_void;
use std::panic::UnwindSafe;

use crate::config::EngineConfig;
use crate::host::EngineHost;
use crate::logging::{catch_panic, init_android_logging, install_panic_hook};

// The JNI exports have fixed `void` signatures, so the host can't be passed
// back and forth as a handle. It is created once when the library loads.
static HOST: OnceCell<EngineHost> = OnceCell::new();

fn host() -> &'static EngineHost {
    HOST.get_or_init(|| {
        let config = EngineConfig::default();
        init_android_logging(&config);
        install_panic_hook();
        log::info!(target: "FluidEngine", "Engine host created");
        EngineHost::for_platform(&config)
    })
}

/// Run `f` against the host without letting a panic reach the JVM.
fn guarded(name: &str, f: impl FnOnce(&EngineHost) + UnwindSafe) {
    catch_panic(name, move || f(host()));
}

/// Called by the VM after `System.loadLibrary("fluid_engine")`.
#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(_vm: *mut jni::sys::JavaVM, _reserved: *mut c_void) -> jint {
    // Logger and host setup happen here; a panic must not cross into the VM.
    guarded("JNI_OnLoad", |_| {});
    JNI_VERSION_1_6
}

/// Engine.init(width: Int, height: Int, useVulkan: Boolean)
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_example_engine_Engine_init(
    _env: JNIEnv,
    _this: JObject,
    width: jint,
    height: jint,
    use_vulkan: jboolean,
) {
    guarded("init", move |host| {
        host.init(width, height, use_vulkan != JNI_FALSE)
    });
}

/// Engine.touch(x: Float, y: Float, dx: Float, dy: Float, color: Int)
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_example_engine_Engine_touch(
    _env: JNIEnv,
    _this: JObject,
    x: jfloat,
    y: jfloat,
    dx: jfloat,
    dy: jfloat,
    color: jint,
) {
    guarded("touch", move |host| host.touch(x, y, dx, dy, color));
}

/// Engine.frame(dt: Float)
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_example_engine_Engine_frame(
    _env: JNIEnv,
    _this: JObject,
    dt: jfloat,
) {
    guarded("frame", move |host| host.frame(dt));
}

/// Engine.setAiStrengthNative(strength: Float)
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_example_engine_Engine_setAiStrengthNative(
    _env: JNIEnv,
    _this: JObject,
    strength: jfloat,
) {
    guarded("setAiStrength", move |host| host.set_ai_strength(strength));
}
