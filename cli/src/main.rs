mod commands;
mod terminal;

use commands::{CommandLine, project};
use estate_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        seed: commands.seed,
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        verbosity: commands.verbose,
    };

    logging::init_logging(cfg.verbosity)?;
    print::banner(cfg.no_banner, cfg.quiet);
    print::header("new building project", cfg.quiet);

    project::project(&cfg)
}
