//! `swad` command-line tool

fn main() -> anyhow::Result<()> {
    swadcore::cli::run_cli()
}
