pub mod filter;
pub mod motion;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
