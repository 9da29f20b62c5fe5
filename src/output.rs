use crate::colors::Colors;
use crate::loader::LoadOptions;
use similar::{ChangeTag, TextDiff};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Normal,
    Quiet,
    Diff,
}

pub struct OutputContext {
    pub mode: OutputMode,
    pub colors: Colors,
    /// Also print the generated declaration to stdout
    pub print_types: bool,
}

impl OutputContext {
    pub fn new(mode: OutputMode, use_colors: bool, print_types: bool) -> Self {
        Self {
            mode,
            colors: Colors::new(use_colors),
            print_types,
        }
    }
}

pub struct RunResult {
    /// Generated declaration text
    pub types: String,
    /// Whether the declaration differs from what was on disk before
    pub changed: bool,
}

pub fn print_check_result(
    options: &LoadOptions,
    previous: Option<&str>,
    result: &RunResult,
    ctx: &OutputContext,
) {
    let path = options.types_path.display();

    match ctx.mode {
        OutputMode::Quiet => {
            if result.changed {
                println!("{path}");
            }
        }
        OutputMode::Diff => {
            if result.changed {
                print_diff(&path.to_string(), previous.unwrap_or(""), &result.types);
            }
        }
        OutputMode::Normal => {
            if result.changed {
                let reason = if previous.is_some() {
                    "out of date"
                } else {
                    "missing"
                };
                println!("{} {path} is {reason}", ctx.colors.error("Error:"));
            } else {
                print_up_to_date(options, ctx);
            }
        }
    }

    print_types(result, ctx);
}

pub fn print_write_result(
    options: &LoadOptions,
    previous: Option<&str>,
    result: &RunResult,
    ctx: &OutputContext,
) {
    let path = options.types_path.display();

    match ctx.mode {
        OutputMode::Quiet => {
            if result.changed {
                println!("{path}");
            }
        }
        OutputMode::Diff => {
            if result.changed {
                print_diff(&path.to_string(), previous.unwrap_or(""), &result.types);
            }
        }
        OutputMode::Normal => {
            if result.changed {
                println!("{} {path}", ctx.colors.success("Wrote:"));
            } else {
                print_up_to_date(options, ctx);
            }
        }
    }

    print_types(result, ctx);
}

fn print_up_to_date(options: &LoadOptions, ctx: &OutputContext) {
    println!(
        "{} {}",
        ctx.colors.info("Up to date:"),
        options.types_path.display()
    );
}

fn print_types(result: &RunResult, ctx: &OutputContext) {
    if ctx.print_types {
        print!("{}", result.types);
    }
}

pub fn print_diff(label: &str, original: &str, content: &str) {
    let diff = TextDiff::from_lines(original, content);

    println!("--- {label}");
    println!("+++ {label}");

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!();
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                print!("{sign}{change}");
            }
        }
    }
}
