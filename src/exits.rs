//! Exit handling: terminal restore on signals and process hardening.

/// Put the tty back into cooked mode with echo.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Runs on every `exit`, including the one issued from the signal handler.
extern "C" fn cleanup_on_exit() {
    restore_termios();
    unsafe {
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            // reset attributes, show cursor
            let seq = b"\x1b[0m\x1b[?25h";
            libc::write(libc::STDOUT_FILENO, seq.as_ptr() as *const libc::c_void, seq.len());
        }
    }
}

extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Register cleanup and route SIGINT/SIGTERM/SIGHUP through it.
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep passwords out of core dumps and away from ptrace by other users.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}
