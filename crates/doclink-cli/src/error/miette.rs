//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError, DocsError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Docs(e) => docs_error_to_miette(e),
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert DocsError to miette Report
pub fn docs_error_to_miette(err: DocsError) -> Report {
    match err {
        DocsError::Parse { message } => miette::miette!(
            help = "Input must be an array of doc nodes or { \"timestamp\", \"nodes\" }",
            "Malformed documentation: {}",
            message
        ),
        DocsError::InvalidNode { path, details } => miette::miette!(
            help = "Regenerate the documentation; the generator never emits this",
            "Invalid node '{}': {}",
            path,
            details
        ),
        DocsError::CyclicExtends { chain } => miette::miette!(
            help = "A class cannot inherit from itself, directly or indirectly",
            "Cyclic inheritance: {}",
            chain.join(" -> ")
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err.hint().map(str::to_string) {
        Some(hint) => miette::miette!(help = hint, "Configuration error: {}", err),
        None => miette::miette!("Configuration error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_report_lists_chain_and_help() {
        let report = cli_error_to_miette(CliError::Docs(DocsError::CyclicExtends {
            chain: vec!["C".into(), "D".into(), "C".into()],
        }));
        assert_eq!(report.to_string(), "Cyclic inheritance: C -> D -> C");
        assert!(report.help().is_some());
    }
}
