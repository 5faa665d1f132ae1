//! The [k6 testing jslib](https://github.com/grafana/k6-jslib-testing) bundle,
//! compiled into the binary.
//!
//! The bundle is a self-contained IIFE script that defines the `k6Testing`
//! global and installs `globalThis.expect`. It is embedded from
//! `bundle/index.iife.js` at build time, so a host never has to ship or read
//! it from disk. A missing or empty bundle fails the build.
//!
//! ```
//! let bundle = golem_exec_jslib_testing::bundle();
//! assert!(!bundle.is_empty());
//! assert!(bundle.as_str().unwrap().contains("k6Testing"));
//! ```

mod error;
#[cfg(feature = "quickjs")]
pub mod quickjs;

pub use error::Error;

use std::fmt;
use std::ops::Deref;

const BUNDLE_BYTES: &[u8] = include_bytes!("../bundle/index.iife.js");

const _: () = assert!(
    !BUNDLE_BYTES.is_empty(),
    "bundle/index.iife.js is empty"
);

/// Name of the global object the bundle defines.
pub const GLOBAL_NAME: &str = "k6Testing";

/// Name of the function the bundle installs on `globalThis`.
pub const EXPECT_GLOBAL: &str = "expect";

/// Script name to report to engines when evaluating the bundle.
pub const SCRIPT_NAME: &str = "k6-testing.js";

/// The embedded bundle. There is exactly one per process.
pub static BUNDLE: Bundle = Bundle::from_static(BUNDLE_BYTES);

/// Returns the embedded bundle.
///
/// Every call returns a view over the same bytes, exactly as they were in
/// `bundle/index.iife.js` when the crate was built.
pub fn bundle() -> Bundle {
    BUNDLE
}

/// A read-only view over an embedded JavaScript bundle.
///
/// The bytes live in the binary image and are never copied unless a caller
/// asks for an owned buffer with [`Bundle::to_vec`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bundle {
    bytes: &'static [u8],
}

impl Bundle {
    /// Wraps bytes embedded with `include_bytes!` (or any other static data).
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        Self { bytes }
    }

    pub const fn as_bytes(&self) -> &'static [u8] {
        self.bytes
    }

    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The bundle as source text, for engines that take `&str`.
    pub fn as_str(&self) -> Result<&'static str, Error> {
        Ok(std::str::from_utf8(self.bytes)?)
    }

    /// An owned copy of the bundle that the caller is free to modify.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }
}

impl Deref for Bundle {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.bytes
    }
}

impl AsRef<[u8]> for Bundle {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl fmt::Debug for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bundle")
            .field("len", &self.bytes.len())
            .finish()
    }
}
