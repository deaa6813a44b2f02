//! User-Friendly Error Formatting
//!
//! Provides user-friendly error messages with troubleshooting hints
//! for common error scenarios.

use std::fmt::Write;

use crate::error::EditorError;
use crate::wall::{Resolution, WallError, MAX_OUTPUTS};

/// Format error for user consumption
///
/// Takes technical error and produces user-friendly message with
/// troubleshooting steps and context.
pub fn format_user_error(error: &anyhow::Error) -> String {
    let mut output = String::new();

    // Header
    writeln!(&mut output).ok();
    writeln!(
        &mut output,
        "╔════════════════════════════════════════════════════════════╗"
    )
    .ok();
    writeln!(
        &mut output,
        "║                     ERROR                                  ║"
    )
    .ok();
    writeln!(
        &mut output,
        "╚════════════════════════════════════════════════════════════╝"
    )
    .ok();
    writeln!(&mut output).ok();

    // Analyze error and provide context
    if let Some(wall) = find_wall_error(error) {
        format_wall_error(&mut output, wall);
    } else if error.to_string().contains("config") {
        format_config_error(&mut output, &error.to_string());
    } else {
        format_generic_error(&mut output, &error.to_string());
    }

    // Technical details
    writeln!(&mut output).ok();
    writeln!(
        &mut output,
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
    )
    .ok();
    writeln!(&mut output, "Technical Details:").ok();
    writeln!(&mut output).ok();
    writeln!(&mut output, "{:#}", error).ok();
    writeln!(&mut output).ok();

    // Footer with help
    writeln!(
        &mut output,
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
    )
    .ok();
    writeln!(&mut output, "Need Help?").ok();
    writeln!(
        &mut output,
        "  - Run with --verbose for detailed logs: lamco-videowall -vvv"
    )
    .ok();
    writeln!(
        &mut output,
        "╚════════════════════════════════════════════════════════════╝"
    )
    .ok();

    output
}

fn find_wall_error(error: &anyhow::Error) -> Option<&WallError> {
    error.chain().find_map(|cause| {
        cause.downcast_ref::<WallError>().or_else(|| {
            match cause.downcast_ref::<EditorError>() {
                Some(EditorError::Wall(wall)) => Some(wall),
                _ => None,
            }
        })
    })
}

fn format_wall_error(output: &mut String, error: &WallError) {
    writeln!(output, "Wall Configuration Rejected").ok();
    writeln!(output).ok();
    writeln!(output, "{}", error).ok();
    writeln!(output, "The previous configuration is still active.").ok();
    writeln!(output).ok();

    match error {
        WallError::TooManyOutputs { .. } => {
            writeln!(output, "How to fix:").ok();
            writeln!(output).ok();
            writeln!(
                output,
                "  → Choose rows and columns whose product is at most {}",
                MAX_OUTPUTS
            )
            .ok();
            writeln!(output, "  → Examples: 1x8, 2x4, 2x3, 3x2").ok();
        }
        WallError::InvalidDimensions(..) => {
            writeln!(output, "How to fix:").ok();
            writeln!(output).ok();
            writeln!(output, "  → Rows and columns must both be at least 1").ok();
        }
        WallError::UnknownResolution(_) => {
            writeln!(output, "Supported resolutions:").ok();
            writeln!(output).ok();
            for resolution in Resolution::ALL {
                writeln!(
                    output,
                    "  → {} = {}",
                    resolution.key(),
                    resolution.display_name()
                )
                .ok();
            }
        }
    }
}

fn format_config_error(output: &mut String, _error: &str) {
    writeln!(output, "Configuration Error").ok();
    writeln!(output).ok();
    writeln!(output, "Problem with the configuration file.").ok();
    writeln!(output).ok();
    writeln!(output, "Common Causes:").ok();
    writeln!(output).ok();
    writeln!(output, "  1. Config file syntax error").ok();
    writeln!(output, "     → Check TOML syntax (quotes, brackets, equals signs)").ok();
    writeln!(output).ok();
    writeln!(output, "  2. Invalid values").ok();
    writeln!(output, "     → Resolution must be \"4k\" or \"2k\"").ok();
    writeln!(output, "     → Log level: trace, debug, info, warn or error").ok();
    writeln!(output).ok();
    writeln!(output, "  3. File not found").ok();
    writeln!(output, "     → Pass an existing file with --config").ok();
}

fn format_generic_error(output: &mut String, error: &str) {
    writeln!(output, "Operation Failed").ok();
    writeln!(output).ok();
    writeln!(output, "{}", error).ok();
}
