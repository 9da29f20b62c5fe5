pub mod colors;
pub mod config;
pub mod loader;
mod output;
pub mod stub;

pub use colors::{should_use_colors, Colors};
pub use config::{
    generate_init_file, generate_init_file_in, parse_config, parse_config_as, read_config,
    ConfigError, REPLIT_TEMPLATE,
};
pub use loader::{
    load_config, replit_config, LoadOptions, ReplitConfig, DEFAULT_CONFIG_PATH,
    DEFAULT_MODULE_NAME,
};
pub use output::{print_diff, OutputContext, OutputMode, RunResult};
pub use stub::{
    generate_config_types, generate_config_types_to, render_config_types, DEFAULT_TYPES_PATH,
};

use std::fs;
use std::io;

/// CLI entry point: load the config and bring the declaration file up to date.
///
/// In check mode nothing is written; the result reports whether the existing
/// declaration file matches what would be generated.
pub fn run(
    options: &LoadOptions,
    check_only: bool,
    ctx: &OutputContext,
) -> Result<RunResult, ConfigError> {
    let text = read_config(&options.config_path)?;
    let config = parse_config(&text)?;
    let previous = read_existing(options)?;

    let types = if check_only {
        render_config_types(&config, &options.module_name)
    } else {
        generate_config_types_to(&config, &options.module_name, &options.types_path)?
    };
    let result = RunResult {
        changed: previous.as_deref() != Some(types.as_str()),
        types,
    };

    if check_only {
        output::print_check_result(options, previous.as_deref(), &result, ctx);
    } else {
        output::print_write_result(options, previous.as_deref(), &result, ctx);
    }
    Ok(result)
}

/// Current contents of the declaration file, if there is one.
fn read_existing(options: &LoadOptions) -> Result<Option<String>, ConfigError> {
    match fs::read_to_string(&options.types_path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
