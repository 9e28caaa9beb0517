use std::io;
use std::time::Duration;

/// CPU time consumed by the calling thread so far.
#[cfg(unix)]
pub fn thread_cpu_time() -> io::Result<Duration> {
    use std::mem::MaybeUninit;

    let mut ts = MaybeUninit::<libc::timespec>::uninit();
    // SAFETY: `ts` points to writable storage for one timespec; it is only read back after
    // clock_gettime reports success, at which point the kernel has filled it in.
    let ts = unsafe {
        if libc::clock_gettime(libc::CLOCK_THREAD_CPUTIME_ID, ts.as_mut_ptr()) != 0 {
            return Err(io::Error::last_os_error());
        }
        ts.assume_init()
    };
    Ok(Duration::new(ts.tv_sec as u64, ts.tv_nsec as u32))
}

/// Falls back to a monotonic wall clock where no per-thread CPU clock is available.
#[cfg(not(unix))]
pub fn thread_cpu_time() -> io::Result<Duration> {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    Ok(ORIGIN.get_or_init(Instant::now).elapsed())
}

/// Runs `f` and returns its result with the CPU time spent strictly inside it.
pub fn measure<T>(f: impl FnOnce() -> T) -> io::Result<(T, Duration)> {
    let start = thread_cpu_time()?;
    let out = f();
    let end = thread_cpu_time()?;
    Ok((out, end.saturating_sub(start)))
}
