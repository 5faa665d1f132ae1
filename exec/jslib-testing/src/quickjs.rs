//! Hands the bundle to a QuickJS context owned by the host.
//!
//! The host decides when a context gets the library; these helpers only do the
//! evaluation in `rquickjs` terms and report failures as [`Error`]s.

use crate::{Bundle, Error, GLOBAL_NAME, SCRIPT_NAME};
use log::{debug, trace};
use rquickjs::{CatchResultExt, Ctx, Object, Value};

// Globals the bundle reads while initialising. k6 provides both; other hosts
// get an empty environment and a `k6/execution` module whose `test.abort` and
// `test.fail` throw the assertion message, so failed expectations surface as
// exceptions carrying the matcher output.
pub const HOST_SHIM_JS: &str = r#"
    if (typeof globalThis.__ENV === 'undefined') {
        globalThis.__ENV = {};
    }
    if (typeof globalThis.require === 'undefined') {
        const k6Execution = {
            test: {
                abort(message) {
                    throw new Error(message);
                },
                fail(message) {
                    throw new Error(message);
                },
            },
        };
        globalThis.require = function (name) {
            return name === 'k6/execution' ? k6Execution : {};
        };
    }
"#;

fn js_engine_error(err: impl ToString) -> Error {
    Error::Engine(err.to_string())
}

/// Defines `__ENV` and `require` on the global object when they are missing.
pub fn install_host_shims(ctx: &Ctx<'_>) -> Result<(), Error> {
    trace!("Installing host shims for {SCRIPT_NAME}");
    ctx.eval::<(), _>(HOST_SHIM_JS)
        .catch(ctx)
        .map_err(js_engine_error)
}

/// Evaluates `bundle` as a classic global script and returns the object it
/// defines under [`GLOBAL_NAME`].
///
/// Outside k6 call [`install_host_shims`] first, otherwise the bundle fails on
/// its first `require`.
pub fn install<'js>(ctx: &Ctx<'js>, bundle: Bundle) -> Result<Object<'js>, Error> {
    debug!("Evaluating {SCRIPT_NAME} ({} bytes)", bundle.len());

    ctx.eval::<Value<'js>, _>(bundle.as_bytes())
        .catch(ctx)
        .map_err(js_engine_error)?;

    ctx.globals()
        .get::<_, Option<Object<'js>>>(GLOBAL_NAME)
        .catch(ctx)
        .map_err(js_engine_error)?
        .ok_or(Error::MissingGlobal(GLOBAL_NAME))
}
