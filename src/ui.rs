/// User interface and status output utilities
///
/// This module handles:
/// - Thread-safe console output
/// - Colored terminal text
/// - Success, warning and error message formatting
use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;

/// Issue tracker shown when the tool crashes
pub const ISSUES_URL: &str = "https://github.com/infracost/infracost/issues/new";

/// Execute a function with exclusive access to console output
/// Prevents interleaved output from multiple threads
fn status_lock<F>(f: F)
where
    F: FnOnce(),
{
    lazy_static! {
        static ref LOCK: Mutex<()> = Mutex::new(());
    }
    let _guard = LOCK.lock();
    f();
}

/// Print colored bold text to stderr, with fallback to plain text
fn eprint_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        if let Some(ref mut t) = term::stderr() {
            if t.fg(fg).is_err() {
                return false;
            }
            let _ = t.attr(term::Attr::Bold);
            if write!(t, "{}", s).is_err() {
                return false;
            }
            let _ = t.reset();
            return true;
        }

        false
    }
}

/// Print a message with a colored label, e.g. "Warning: ..."
fn print_labeled(label: &str, color: term::color::Color, msg: &str, use_colors: bool) {
    status_lock(|| {
        if use_colors {
            eprint_color(label, color);
        } else {
            eprint!("{}", label);
        }
        eprintln!(" {}", msg);
    });
}

/// Print a success message with green "Success:" prefix
pub fn print_success(msg: &str, use_colors: bool) {
    print_labeled("Success:", term::color::BRIGHT_GREEN, msg, use_colors);
}

/// Print a warning message with yellow "Warning:" prefix
pub fn print_warning(msg: &str, use_colors: bool) {
    print_labeled("Warning:", term::color::BRIGHT_YELLOW, msg, use_colors);
}

/// Print an error message with red "Error:" prefix
pub fn print_error(msg: &str, use_colors: bool) {
    print_labeled("Error:", term::color::BRIGHT_RED, msg, use_colors);
}

/// Format the crash banner shown for panics
pub fn format_unexpected_error(err: &str, stack: &str) -> String {
    format!(
        "\nError: An unexpected error occurred\n\n{}\n{}\nEnvironment:\ninfracost-output {}\n\nPlease copy the above output and create a new issue at {}\n",
        err,
        stack,
        env!("CARGO_PKG_VERSION"),
        ISSUES_URL
    )
}

/// Print the crash banner to stderr
pub fn print_unexpected_error(err: &str, stack: &str) {
    status_lock(|| {
        eprint!("{}", format_unexpected_error(err, stack));
    });
}
