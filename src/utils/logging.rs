use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostic logging on stderr.
///
/// Default level is WARN so regular command output stays clean; `-v` raises
/// it to info, `-vv` to debug, `-vvv` to trace, `-q` silences warnings.
pub fn init_logging(verbose: u8, quiet: u8) {
    let net = verbose as i8 - quiet as i8;
    let level = match net {
        i8::MIN..=-1 => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        3..=i8::MAX => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,mapty={level}")));

    let show_src = matches!(level, "debug" | "trace");

    // try_init: tests may initialize more than once in the same process
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .try_init();
}
