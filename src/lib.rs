pub mod classifier;
pub mod config;
pub mod control;
pub mod error;
pub mod events;
pub mod ffi;
pub mod renderer;
pub mod stream;
pub mod surface;
pub mod theme;

#[no_mangle]
pub extern "C" fn svg_preview_version() -> *const std::ffi::c_char {
    c"0.1.0".as_ptr()
}
