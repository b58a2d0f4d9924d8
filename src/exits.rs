//! Exit statuses and process hardening.

pub const SUCCESS: u8 = 0;
pub const FAILURE: u8 = 1;
pub const USAGE: u8 = 2;

/// Keep generated passwords out of core dumps.
/// Call this early in main().
pub fn harden() {
    #[cfg(unix)]
    disable_core_dumps();
    #[cfg(target_os = "linux")]
    set_non_dumpable();
}

#[cfg(unix)]
fn disable_core_dumps() {
    let limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    if unsafe { libc::setrlimit(libc::RLIMIT_CORE, &limit) } != 0 {
        log::debug!("setrlimit(RLIMIT_CORE) failed");
    }
}

#[cfg(target_os = "linux")]
fn set_non_dumpable() {
    if unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) } != 0 {
        log::debug!("prctl(PR_SET_DUMPABLE) failed");
    }
}
