//! Output formatting for resolved transport configurations

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use scriptnet_core::TransportConfig;
use std::io::{self, Write};
use std::time::Duration;

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Write a resolved configuration in the selected format
    pub fn write_transport(&mut self, config: &TransportConfig, built: bool) -> Result<()> {
        let rendered = match self.format {
            OutputFormat::Json => serde_json::to_string(config)?,
            OutputFormat::JsonPretty => serde_json::to_string_pretty(config)?,
            OutputFormat::Yaml => serde_yaml::to_string(config)?,
            OutputFormat::Human => format_transport_human(config, built, self.use_color),
        };
        writeln!(self.writer, "{}", rendered.trim_end())?;
        Ok(())
    }

    /// Informational line, suppressed in quiet mode and machine formats
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }
}

/// Human-readable rendering of a transport configuration
pub fn format_transport_human(config: &TransportConfig, built: bool, use_color: bool) -> String {
    let label = |text: &str| {
        let padded = format!("{:<20}", format!("{}:", text));
        if use_color {
            padded.bold().to_string()
        } else {
            padded
        }
    };

    let verification = match (config.tls.verify_certificates, use_color) {
        (true, _) => "enabled".to_string(),
        (false, true) => "DISABLED".yellow().bold().to_string(),
        (false, false) => "DISABLED".to_string(),
    };

    let mut lines = vec![
        format!("{}{}", label("timeout"), format_duration(Some(config.timeout))),
        format!(
            "{}{}",
            label("proxy"),
            config.redacted_proxy().unwrap_or_else(|| "none".to_string())
        ),
        format!("{}{}", label("tls verification"), verification),
        format!(
            "{}{}",
            label("pool max idle"),
            config
                .pool
                .max_idle
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unlimited".to_string())
        ),
        format!("{}{}", label("pool idle per host"), config.pool.max_idle_per_host),
        format!("{}{}", label("pool idle timeout"), format_duration(config.pool.idle_timeout)),
        format!("{}{}", label("user agent"), config.user_agent),
    ];

    if built {
        lines.push(format!("{}{}", label("client"), "built"));
    }

    lines.join("\n")
}

fn format_duration(duration: Option<Duration>) -> String {
    match duration {
        Some(d) if !d.is_zero() => format!("{}s", d.as_secs_f64()),
        _ => "none".to_string(),
    }
}
