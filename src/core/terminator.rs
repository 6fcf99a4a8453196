//! Process termination used by `Logger::fatal`

/// Exit status used after a fatal log line
pub const FATAL_EXIT_CODE: i32 = 1;

/// Ends the process once a fatal call has finished its side effects.
///
/// Production code uses [`ProcessExit`]. Tests swap in a recorder so the
/// capture, emit and webhook sequence can be observed in-process.
pub trait Terminator: Send + Sync {
    fn terminate(&self, code: i32);
}

/// Calls [`std::process::exit`]; destructors do not run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, code: i32) {
        std::process::exit(code);
    }
}
