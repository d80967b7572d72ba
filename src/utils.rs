/// Console and log-file output helpers.
///
/// Discovered sets are reported on stdout for the interactive run, and
/// mirrored into a timestamped log file so a solve can be reviewed after
/// the terminal is gone. The log file handle is a process-wide Mutex so the
/// helpers stay callable from anywhere without threading a writer through
/// every signature.

use std::fs::OpenOptions;
use std::io::Write;
use std::io::stdout;
use std::sync::Mutex;

// Global log file handle (wrapped in Mutex for thread safety)
static LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);

/// Initialize the log file with a timestamped name.
pub fn init_log_file() {
    let now = chrono::Local::now();
    let filename = format!("log_set_solver_{}.txt", now.format("%Y-%m-%d_%H-%M-%S"));

    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&filename)
    {
        Ok(file) => {
            *LOG_FILE.lock().unwrap() = Some(file);
        }
        Err(e) => {
            eprintln!("Warning: Could not create log file {}: {}", filename, e);
        }
    }
}

/// Write to the log file if it's open
fn write_to_log(msg: &str) {
    if let Ok(mut log_guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *log_guard {
            let _ = writeln!(file, "{}", msg);
        }
    }
}

/// Report output for the interactive run: printed to stdout, flushed so it
/// shows up immediately, and mirrored to the log file.
pub fn report_print(msg: &str) {
    println!("{}", msg);
    let _ = stdout().flush();
    write_to_log(msg);
}

pub fn banner(msg: &str) {
    // set the banner's width
    const BANNER_WIDTH: usize = 80;
    // truncate the message if needed
    let msg_len = msg.len();
    let title = if msg_len > BANNER_WIDTH {
        &msg[..BANNER_WIDTH]
    } else {
        msg
    };
    // compute the required spaces before and after the message
    let total_padding = BANNER_WIDTH.saturating_sub(title.len());
    let left_padding = total_padding / 2;
    let right_padding = total_padding - left_padding;
    // Create the components of the banner
    let line = "=".repeat(BANNER_WIDTH);
    let left_spaces = " ".repeat(left_padding);
    let right_spaces = " ".repeat(right_padding);
    let banner_str = format!(
        "\n{}\n{}{}{}\n{}\n",
        line, left_spaces, title, right_spaces, line
    );
    // Display the banner (also writes to log)
    report_print(&banner_str);
}
