use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use replit_config::{
    generate_init_file, run, should_use_colors, Colors, LoadOptions, OutputContext, OutputMode,
    DEFAULT_CONFIG_PATH, DEFAULT_MODULE_NAME, DEFAULT_TYPES_PATH,
};

#[derive(Parser)]
#[command(name = "replit-config")]
#[command(
    version,
    about = "Load a .replit config and generate its TypeScript declaration"
)]
struct Cli {
    /// Config file to read
    #[arg(long, value_name = "PATH", env = "CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Declaration file to write
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TYPES_PATH)]
    out: PathBuf,

    /// Module name used in the declaration
    #[arg(long, value_name = "NAME", default_value = DEFAULT_MODULE_NAME)]
    module: String,

    /// Check only (no writes), exit 1 if the declaration file is out of date
    #[arg(short, long)]
    check: bool,

    /// Show changes to the declaration file in diff format
    #[arg(short, long)]
    diff: bool,

    /// Print the generated declaration to stdout
    #[arg(short, long)]
    print: bool,

    /// Output only the declaration file name when it changes
    #[arg(short, long)]
    quiet: bool,

    /// Force colored output
    #[arg(long)]
    color: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Generate a template .replit in the current directory
    #[arg(long)]
    init: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let use_colors = should_use_colors(cli.color, cli.no_color);
    let colors = Colors::new(use_colors);

    if cli.init {
        return handle_init(colors);
    }

    let options = LoadOptions {
        config_path: cli.config,
        types_path: cli.out,
        module_name: cli.module,
    };

    if !cli.quiet {
        eprintln!("Using config: {}", options.config_path.display());
    }

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.diff {
        OutputMode::Diff
    } else {
        OutputMode::Normal
    };
    let ctx = OutputContext::new(output_mode, use_colors, cli.print);

    match run(&options, cli.check, &ctx) {
        Ok(result) => {
            if cli.check && result.changed {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("{} {e}", colors.error("Error:"));
            ExitCode::from(1)
        }
    }
}

fn handle_init(colors: Colors) -> ExitCode {
    match generate_init_file() {
        Ok(path) => {
            println!("{} {}", colors.success("Created"), path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", colors.error("Error:"));
            ExitCode::from(1)
        }
    }
}
