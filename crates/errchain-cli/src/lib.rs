//! errchain demo: builds a transaction failure four links deep and renders
//! it in each supported output format.

pub mod scenario;

use errchain::ChainError;
use std::fmt;

/// Output format for rendering an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Messages joined with `": "`
    Plain,
    /// Indented message/data/stack/cause blocks
    #[default]
    Detailed,
    /// Compact JSON record list
    Json,
    /// Indented JSON record list
    JsonPretty,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Detailed => write!(f, "detailed"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::JsonPretty => write!(f, "json-pretty"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "detailed" => Ok(OutputFormat::Detailed),
            "json" => Ok(OutputFormat::Json),
            "json-pretty" => Ok(OutputFormat::JsonPretty),
            other => Err(format!(
                "Unknown format: {}. Use 'plain', 'detailed', 'json', or 'json-pretty'",
                other
            )),
        }
    }
}

/// Options for running the demo.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub format: OutputFormat,
    pub transaction: String,
}

/// Render `err` in the requested format.
pub fn render(err: &ChainError, format: OutputFormat) -> errchain::Result<String> {
    let text = match format {
        OutputFormat::Plain => err.to_string(),
        OutputFormat::Detailed => format!("{err:#}"),
        OutputFormat::Json => serde_json::to_string(err)
            .map_err(|e| ChainError::wrap(e, "failed to encode the error as JSON"))?,
        OutputFormat::JsonPretty => serde_json::to_string_pretty(err)
            .map_err(|e| ChainError::wrap(e, "failed to encode the error as JSON"))?,
    };
    Ok(text)
}

/// Run the scenario and render its error. `None` if the scenario succeeded.
pub fn run_main(opts: &DemoOptions) -> errchain::Result<Option<String>> {
    match scenario::create_transaction(&opts.transaction) {
        Ok(()) => Ok(None),
        Err(err) => {
            tracing::debug!(links = err.records().len(), format = %opts.format, "rendering");
            render(&err, opts.format).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("plain".parse(), Ok(OutputFormat::Plain));
        assert_eq!("JSON-Pretty".parse(), Ok(OutputFormat::JsonPretty));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for format in [
            OutputFormat::Plain,
            OutputFormat::Detailed,
            OutputFormat::Json,
            OutputFormat::JsonPretty,
        ] {
            assert_eq!(format.to_string().parse(), Ok(format));
        }
    }
}
