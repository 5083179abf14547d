// Call wrappers: deprecation warnings and execution timing

use std::time::{Duration, Instant};

/// What kind of item a deprecation warning refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeprecatedKind {
    Function,
    Type,
}

const NO_REASON: &str = "No reason provided";

/// Format the warning logged for a deprecated item
pub fn deprecation_message(kind: DeprecatedKind, name: &str, reason: Option<&str>) -> String {
    let kind = match kind {
        DeprecatedKind::Function => "function",
        DeprecatedKind::Type => "class",
    };
    format!(
        "Call to deprecated {}: {} - ({})",
        kind,
        name,
        reason.unwrap_or(NO_REASON)
    )
}

/// Run `f`, logging a deprecation warning for `name` on every call
pub fn deprecated<F, R>(name: &str, reason: Option<&str>, f: F) -> R
where
    F: FnOnce() -> R,
{
    log::warn!("{}", deprecation_message(DeprecatedKind::Function, name, reason));
    f()
}

/// Run `f` and measure how long it took
pub fn timed<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Run `f` and print its execution time
pub fn runtime<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let (result, elapsed) = timed(f);
    println!("Execution time: {}", format_elapsed(elapsed));
    result
}

/// Format a duration as `[D day(s), ]H:MM:SS[.ffffff]`
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    let micros = elapsed.subsec_micros();

    let mut out = String::new();
    if days > 0 {
        let unit = if days == 1 { "day" } else { "days" };
        out.push_str(&format!("{} {}, ", days, unit));
    }
    out.push_str(&format!("{}:{:02}:{:02}", hours, minutes, seconds));
    if micros > 0 {
        out.push_str(&format!(".{:06}", micros));
    }
    out
}
