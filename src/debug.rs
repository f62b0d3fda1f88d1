//! Error checking around individual GL calls.
//!
//! GL reports failures through a sticky error queue rather than return
//! values. [`gl_call!`](crate::gl_call) drains the queue, performs one call,
//! and then reports whatever the call left behind together with the call's
//! source text and location.

use crate::driver::Driver;

/// Discard every pending error so the next check only sees fresh ones.
pub fn clear_errors<D: Driver + ?Sized>(driver: &D) {
    while driver.get_error() != glow::NO_ERROR {}
}

/// Log every pending error, attributing it to `function` at `file:line`.
///
/// Returns `false` if any error was pending.
pub fn log_call<D: Driver + ?Sized>(driver: &D, function: &str, file: &str, line: u32) -> bool {
    let mut ok = true;
    loop {
        let error = driver.get_error();
        if error == glow::NO_ERROR {
            return ok;
        }
        log::error!("[OpenGL Error] ({error:#x}) {} in {function} at {file} on line {line}", describe(error));
        ok = false;
    }
}

/// Symbolic name of a GL error code.
#[must_use]
pub fn describe(error: u32) -> &'static str {
    match error {
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        glow::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        glow::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        _ => "unknown error",
    }
}

/// Perform a driver call with error checking.
///
/// `gl_call!(driver, driver.bind_buffer(target, None))` clears pending
/// errors, evaluates the call, logs any error it raised, and yields the
/// call's value. With debug assertions enabled a reported error panics.
#[macro_export]
macro_rules! gl_call {
    ($driver:expr, $call:expr) => {{
        $crate::debug::clear_errors(&*$driver);
        let value = $call;
        let ok = $crate::debug::log_call(&*$driver, stringify!($call), file!(), line!());
        debug_assert!(ok, "OpenGL error in `{}`", stringify!($call));
        value
    }};
}
