//! doclink CLI entry point: argument parsing, logging, and command dispatch.

use clap::Parser;
use doclink_cli::{cli, config::Context, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Config comes first so its log level can seed the subscriber.
    let ctx = Context::load(args.config.as_deref());
    let config_level = ctx
        .as_ref()
        .ok()
        .and_then(|ctx| ctx.config.settings.log_level.clone());

    logger::init_logger(args.verbose, args.quiet, args.no_color, config_level.as_deref());
    ui::init_colors(args.no_color);

    let result = ctx.and_then(|ctx| doclink_cli::run(args.command, &ctx));

    result.map_err(error::cli_error_to_miette)
}
