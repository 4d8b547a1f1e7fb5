use colored::*;
use pinger_common::config::Config;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::spinner::TerminalWriter;

/// Target used for undecorated output lines.
pub const PRINT_TARGET: &str = "pinger::print";

const SUCCESS_TARGET: &str = "pinger::success";
const FAILURE_TARGET: &str = "pinger::failure";

pub struct PingerFormatter;

impl<S, N> FormatEvent<S, N> for PingerFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            let (symbol, color_func) = symbol_for(meta.target(), *meta.level());
            write!(writer, "{} ", color_func(symbol.into()))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

type Paint = fn(ColoredString) -> ColoredString;

fn symbol_for(target: &str, level: Level) -> (&'static str, Paint) {
    match target {
        SUCCESS_TARGET => ("[+]", |s| s.green().bold()),
        FAILURE_TARGET => ("[-]", |s| s.red().bold()),
        _ => match level {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[*]", |s| s.cyan()),
            Level::WARN => ("[!]", |s| s.yellow().bold()),
            Level::ERROR => ("[x]", |s| s.red().bold()),
        },
    }
}

/// Notification and screen targets; these stay visible whatever the filter.
const SCREEN_TARGETS: [&str; 3] = [PRINT_TARGET, SUCCESS_TARGET, FAILURE_TARGET];

fn default_directive(quiet: u8, verbose: u8) -> &'static str {
    match (quiet, verbose) {
        (_, 1) => "debug",
        (_, v) if v > 1 => "trace",
        (q, _) if q > 0 => "warn",
        _ => "info",
    }
}

fn build_filter(base: EnvFilter) -> EnvFilter {
    SCREEN_TARGETS.iter().fold(base, |filter, target| {
        match format!("{target}=info").parse::<Directive>() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        }
    })
}

/// Installs the global subscriber. `RUST_LOG` wins over `-q`/`-v`.
pub fn init(cfg: &Config) {
    let base = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(cfg.quiet, cfg.verbose)));

    tracing_subscriber::fmt()
        .event_format(PingerFormatter)
        .with_env_filter(build_filter(base))
        .with_writer(|| TerminalWriter)
        .init();
}
