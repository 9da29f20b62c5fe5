//! Template generation for `--init` command

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::DEFAULT_CONFIG_PATH;

/// Template .replit with documentation
pub const REPLIT_TEMPLATE: &str = r#"# .replit - project configuration
#
# replit-config reads this file and writes replit.d.ts, a TypeScript
# declaration describing its shape, so editors can type-check code that
# consumes the parsed config.

# Command run when the project starts.
run = "npm start"

# File opened by default.
entrypoint = "index.ts"

# Toolchain modules available to the project.
modules = ["nodejs-20"]

# Paths hidden from the file tree.
hidden = [".config", "node_modules"]

[nix]
channel = "stable-24_05"

[deployment]
run = ["npm", "start"]

[[ports]]
localPort = 3000
externalPort = 80
"#;

/// Generate .replit in the specified directory (or current directory if None).
///
/// Returns an error if .replit already exists.
pub fn generate_init_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(
        || PathBuf::from(DEFAULT_CONFIG_PATH),
        |d| d.join(DEFAULT_CONFIG_PATH),
    );

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{DEFAULT_CONFIG_PATH} already exists"),
        ));
    }

    fs::write(&path, REPLIT_TEMPLATE)?;
    Ok(path)
}

/// Generate .replit in the current directory.
///
/// Returns an error if .replit already exists.
pub fn generate_init_file() -> io::Result<PathBuf> {
    generate_init_file_in(None)
}
