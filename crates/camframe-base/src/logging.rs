use crate::config::{LogConfig, LogSink};
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Writes log records to stdout.
pub struct StdoutLogger {
    max_level: LevelFilter,
}

impl StdoutLogger {
    pub fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }
}

/// Writes log records to `YYYY-MM-DD.log` files in a directory, switching
/// files when the UTC date changes.
pub struct FileLogger {
    max_level: LevelFilter,
    state: Mutex<FileLoggerState>,
}

struct FileLoggerState {
    dir: PathBuf,
    current_date: String,
    file: File,
}

fn open_day_file(dir: &Path, date: &str) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("{date}.log")))
}

fn format_record(record: &Record) -> String {
    format!(
        "{} [{}] [thread:{:?}] {}:{} - {}",
        format_timestamp(),
        record.level(),
        std::thread::current().id(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

impl FileLogger {
    /// Create the directory if needed and open today's file. Records above
    /// `max_level` are dropped.
    pub fn new(dir: impl Into<PathBuf>, max_level: LevelFilter) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let current_date = format_today();
        let file = open_day_file(&dir, &current_date)?;

        Ok(FileLogger {
            max_level,
            state: Mutex::new(FileLoggerState {
                dir,
                current_date,
                file,
            }),
        })
    }

    /// Path of the file currently being written.
    pub fn current_path(&self) -> PathBuf {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.dir.join(format!("{}.log", state.current_date))
    }
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", format_record(record));
        }
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        let today = format_today();
        if today != state.current_date {
            match open_day_file(&state.dir, &today) {
                Ok(file) => {
                    state.file = file;
                    state.current_date = today;
                }
                // keep writing to the old file
                Err(e) => eprintln!("failed to open log file for {today}: {e}"),
            }
        }

        let line = format_record(record);
        if let Err(e) = writeln!(state.file, "{line}") {
            eprintln!("failed to write to log file: {e}");
            eprintln!("{line}");
        }
    }

    fn flush(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.file.flush().ok();
    }
}

fn unix_secs() -> u64 {
    // a clock before 1970 is reported as the epoch
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS`.
pub fn format_timestamp() -> String {
    let secs = unix_secs();
    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let time_of_day = secs % 86400;

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Current UTC date as `YYYY-MM-DD`.
pub fn format_today() -> String {
    let (year, month, day) = civil_from_days((unix_secs() / 86400) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Days since the Unix epoch to a proleptic Gregorian (year, month, day).
/// Howard Hinnant's `civil_from_days`.
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

/// Install the process-wide logger described by `config`.
///
/// Only the first successful call in a process installs a logger; later calls
/// are ignored. Fails only when a file sink directory cannot be created.
pub fn init_logger(config: &LogConfig) -> std::io::Result<()> {
    let logger: Box<dyn Log> = match config.sink() {
        LogSink::Stdout => Box::new(StdoutLogger::new(config.max_level())),
        LogSink::Directory(dir) => Box::new(FileLogger::new(dir.clone(), config.max_level())?),
    };

    // set_logger needs a &'static, the leak happens once per process
    let installed = log::set_logger(Box::leak(logger)).is_ok();

    if installed {
        log::set_max_level(config.max_level());
    }

    Ok(())
}
