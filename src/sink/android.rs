//! liblog sink for Android targets

use std::ffi::CString;

use libc::{c_char, c_int};

use super::{LogSink, SinkRecord};

#[link(name = "log")]
extern "C" {
    fn __android_log_write(prio: c_int, tag: *const c_char, text: *const c_char) -> c_int;
}

/// Writes lines to the Android log buffer (`adb logcat`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidSink;

fn c_string(text: &str) -> CString {
    // Interior NULs are stripped, so this cannot fail
    CString::new(text.replace('\0', "")).unwrap_or_default()
}

impl LogSink for AndroidSink {
    fn write(&self, record: &SinkRecord<'_>) {
        let tag = c_string(record.tag);
        let text = c_string(&record.full_text());
        // SAFETY: both pointers are valid NUL-terminated strings that outlive the call
        unsafe {
            __android_log_write(record.priority as c_int, tag.as_ptr(), text.as_ptr());
        }
    }
}
