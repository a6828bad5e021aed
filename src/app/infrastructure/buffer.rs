use fltk::text::TextBuffer;

/// Copy the contents of an FLTK text buffer into an owned `String`.
///
/// `TextBuffer::text()` hands back a copy of a `malloc()`'d C string but
/// never frees the original, so the input box would leak its whole contents
/// on every keystroke. This goes through the C API directly and releases the
/// allocation itself.
pub fn read_buffer_text(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is the live FLTK buffer owned by `buf`.
    // Fl_Text_Buffer_text returns a NUL-terminated malloc'd copy (or null),
    // which is read once and then released with the matching `free`.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}
