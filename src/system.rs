//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.

use log::warn;


#[cfg(any(target_os = "macos", target_os = "ios"))]
extern {
    fn gettimeofday(tp: *mut libc::timeval, tzp: *mut libc::timezone) -> libc::c_int;
}

#[cfg(all(unix, not(target_os = "macos"), not(target_os = "ios")))]
use libc::clock_gettime;


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) unsafe fn sys_time() -> (i64, i32) {
    use std::ptr::null_mut;

    let mut tv = libc::timeval { tv_sec: 0, tv_usec: 0 };
    if gettimeofday(&mut tv, null_mut()) != 0 {
        warn!("gettimeofday failed; using the Unix epoch as the current time");
    }

    (tv.tv_sec as i64, tv.tv_usec as i32 * 1000)
}

#[cfg(windows)] use winapi::shared::minwindef::FILETIME;
#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(windows)]
pub(crate) unsafe fn sys_time() -> (i64, i32) {
    use std::mem;
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;
    let mut ft = mem::zeroed();

    GetSystemTimeAsFileTime(&mut ft);
    let since_epoch = file_time_as_u64(&ft) as i64 - HECTONANOSEC_TO_UNIX_EPOCH;
    if since_epoch < 0 {
        warn!("System clock reads {} ticks before the Unix epoch", -since_epoch);
    }

    (since_epoch.div_euclid(HECTONANOSECS_IN_SEC), (since_epoch.rem_euclid(HECTONANOSECS_IN_SEC) * 100) as i32)
}

#[cfg(windows)]
fn file_time_as_u64(ft: &FILETIME) -> u64 {
    ((ft.dwHighDateTime as u64) << 32) | (ft.dwLowDateTime as u64)
}


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(all(unix, not(target_os = "macos"), not(target_os = "ios")))]
pub(crate) unsafe fn sys_time() -> (i64, i32) {
    let mut tv = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    if clock_gettime(libc::CLOCK_REALTIME, &mut tv) != 0 {
        warn!("clock_gettime failed; using the Unix epoch as the current time");
    }

    (tv.tv_sec as i64, tv.tv_nsec as i32)
}

/// Falls back to the standard library’s clock on platforms without one of
/// the system calls above.
#[cfg(not(any(unix, windows)))]
pub(crate) unsafe fn sys_time() -> (i64, i32) {
    use std::time::{SystemTime, UNIX_EPOCH};

    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => (elapsed.as_secs() as i64, elapsed.subsec_nanos() as i32),
        Err(e) => {
            warn!("System clock is before the Unix epoch: {}", e);
            (0, 0)
        }
    }
}
