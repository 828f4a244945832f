pub mod contact;
pub mod effects;
pub mod filter;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod toast;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
