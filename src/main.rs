// Pure page logic compiles everywhere so its tests run natively; only the
// browser build renders it.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod content;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod counter;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod hire_me;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod puzzle;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod sections;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod theme;

#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(target_arch = "wasm32")]
mod views;
#[cfg(target_arch = "wasm32")]
mod widgets;

#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
