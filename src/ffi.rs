/// C ABI bridge for host shells that load the control as a shared library.
/// This is the public API a native preview pane consumes.

use crate::control::PreviewControl;
use std::ffi::{c_char, c_int, c_uint, CString};
use std::io::Cursor;
use std::ptr;

/// Opaque handle to one preview control instance.
pub struct PreviewSession {
    control: PreviewControl,
}

#[no_mangle]
pub extern "C" fn svg_preview_new(width: c_uint, height: c_uint) -> *mut PreviewSession {
    let session = Box::new(PreviewSession {
        control: PreviewControl::new(width, height),
    });
    Box::into_raw(session)
}

#[no_mangle]
pub extern "C" fn svg_preview_free(session: *mut PreviewSession) {
    if !session.is_null() {
        unsafe { drop(Box::from_raw(session)); }
    }
}

/// Start previewing `len` bytes of SVG data. The bytes are copied; the caller
/// keeps ownership of `data`. Returns 0, or -1 on a null argument.
#[no_mangle]
pub extern "C" fn svg_preview_do_preview(
    session: *mut PreviewSession,
    data: *const u8,
    len: usize,
) -> c_int {
    if session.is_null() || (data.is_null() && len > 0) {
        return -1;
    }
    let session = unsafe { &mut *session };
    let bytes = if len == 0 {
        Vec::new()
    } else {
        unsafe { std::slice::from_raw_parts(data, len) }.to_vec()
    };
    session.control.do_preview(Cursor::new(bytes));
    0
}

/// Drain pending completions on the owner thread. Returns the region count
/// after applying, or -1 on a null session.
#[no_mangle]
pub extern "C" fn svg_preview_pump(session: *mut PreviewSession) -> c_int {
    if session.is_null() {
        return -1;
    }
    let session = unsafe { &mut *session };
    session.control.pump();
    session.control.surface().region_count() as c_int
}

#[no_mangle]
pub extern "C" fn svg_preview_region_count(session: *const PreviewSession) -> c_int {
    if session.is_null() {
        return -1;
    }
    let session = unsafe { &*session };
    session.control.surface().region_count() as c_int
}

#[no_mangle]
pub extern "C" fn svg_preview_resize(session: *mut PreviewSession, width: c_uint) {
    if session.is_null() {
        return;
    }
    let session = unsafe { &mut *session };
    session.control.on_resize(width);
}

/// JSON snapshot of the composed surface. Returns null on failure; the caller
/// frees the string with `svg_preview_string_free`.
#[no_mangle]
pub extern "C" fn svg_preview_snapshot_json(session: *const PreviewSession) -> *mut c_char {
    if session.is_null() {
        return ptr::null_mut();
    }
    let session = unsafe { &*session };
    let json = match serde_json::to_string(session.control.surface()) {
        Ok(j) => j,
        Err(_) => return ptr::null_mut(),
    };
    match CString::new(json) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn svg_preview_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe { drop(CString::from_raw(s)); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn pump_until_regions(session: *mut PreviewSession, want: c_int) -> bool {
        let deadline = Instant::now() + Duration::from_secs(3);
        while Instant::now() < deadline {
            if svg_preview_pump(session) == want {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_session_lifecycle() {
        let session = svg_preview_new(640, 480);
        assert!(!session.is_null());
        assert_eq!(svg_preview_region_count(session), 0);
        svg_preview_free(session);
    }

    #[test]
    fn test_preview_through_abi() {
        let session = svg_preview_new(640, 480);
        let svg = b"<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>";
        assert_eq!(svg_preview_do_preview(session, svg.as_ptr(), svg.len()), 0);
        assert!(pump_until_regions(session, 1));

        let json_ptr = svg_preview_snapshot_json(session);
        assert!(!json_ptr.is_null());
        let json = unsafe { std::ffi::CStr::from_ptr(json_ptr) }.to_str().unwrap().to_string();
        svg_preview_string_free(json_ptr);
        assert!(json.contains("\"kind\":\"Renderer\""));

        svg_preview_free(session);
    }

    #[test]
    fn test_blocked_preview_through_abi() {
        let session = svg_preview_new(640, 480);
        let svg = b"<svg><script>alert(1)</script></svg>";
        assert_eq!(svg_preview_do_preview(session, svg.as_ptr(), svg.len()), 0);
        assert!(pump_until_regions(session, 2));

        svg_preview_resize(session, 700);
        let json_ptr = svg_preview_snapshot_json(session);
        let json = unsafe { std::ffi::CStr::from_ptr(json_ptr) }.to_str().unwrap().to_string();
        svg_preview_string_free(json_ptr);
        assert!(json.contains("\"kind\":\"Banner\""));
        assert!(json.contains("\"width\":700"));

        svg_preview_free(session);
    }

    #[test]
    fn test_null_safety() {
        assert_eq!(svg_preview_do_preview(ptr::null_mut(), ptr::null(), 0), -1);
        assert_eq!(svg_preview_pump(ptr::null_mut()), -1);
        assert_eq!(svg_preview_region_count(ptr::null()), -1);
        assert!(svg_preview_snapshot_json(ptr::null()).is_null());
        svg_preview_resize(ptr::null_mut(), 100);
        svg_preview_free(ptr::null_mut());
        svg_preview_string_free(ptr::null_mut());
    }
}
