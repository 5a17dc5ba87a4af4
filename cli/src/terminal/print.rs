use colored::*;
use pulse_common::config::Config;
use pulse_core::driver::RunSummary;
use tracing::info;

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{}", msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ PULSE v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = text_content.chars().count();
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();
    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn aligned_line<V: std::fmt::Display>(key: &str, value: V, key_width: usize) {
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    let colon: String = format!("{}{}", dots.color(colors::SEPARATOR), ":".color(colors::SEPARATOR));
    let value: ColoredString = value.to_string().color(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT)));
}

/// Lists the run parameters before the loop starts.
pub fn target_details(cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let interval: String = format!("{:.2}s", cfg.interval.as_secs_f64());
    let iterations: String = match cfg.iterations {
        Some(n) => n.to_string(),
        None => "until interrupted".to_string(),
    };
    let rows: [(&str, String); 6] = [
        ("Target", cfg.target_ip.to_string()),
        ("Port", cfg.target_port.to_string()),
        ("MAC", cfg.target_mac.to_string()),
        ("Interface", cfg.interface.clone()),
        ("Interval", interval),
        ("Iterations", iterations),
    ];
    let key_width: usize = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in rows {
        aligned_line(key, value, key_width);
    }
}

pub fn summary(summary: &RunSummary, q_level: u8) {
    if q_level > 1 {
        return;
    }

    let iterations: ColoredString = format!("{} iterations", summary.iterations).bold().green();
    let failures: ColoredString = match summary.failures {
        0 => "no failed invocations".normal(),
        n => format!("{n} failed invocations").bold().color(colors::ACCENT),
    };
    let reason: &str = if summary.interrupted { "interrupted" } else { "completed" };

    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
    print_status(format!("Run {reason}: {iterations}, {failures}"));
}
