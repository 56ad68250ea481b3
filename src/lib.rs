//! Native numeric routines packaged for a dynamically-typed host: a seeded
//! generator, a batch Hamming-distance reducer and a few addition helpers.
//! On `wasm32` they are exported to JavaScript through `wasm-bindgen`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod hamming;
pub mod reference;
pub mod simple_function;
mod xorshift;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use error::{Error, Result};
pub use generator::SeededRng;
pub use hamming::{hamming_distance_batch, HammingDistanceCalculator};
pub use simple_function::{add_doubles, add_generic, add_integers};
pub use xorshift::{splitmix64, Xorshift64Star, Xorshift64StarSeed};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs the logger. Native builds read `RUST_LOG` (default `warn`);
/// wasm builds log to the browser console and route panics there too.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn init_logging() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch="wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            // a second init only means a logger is already installed
            let _ = console_log::init_with_level(log::Level::Warn);
        } else {
            let env = env_logger::Env::default().default_filter_or("warn");
            let _ = env_logger::Builder::from_env(env).try_init();
        }
    }
}
