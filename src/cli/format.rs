//! Format output dispatch helpers

/// Macro to dispatch output by format with minimal boilerplate.
///
/// # Examples
///
/// ```rust,ignore
/// output_by_format!(ctx.cli.format,
///     json => { print_json(&report)? },
///     human => { print_human(&report); }
/// );
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:block, human => $human:block) => {
        match $format {
            graphkit_core::format::OutputFormat::Json => $json,
            graphkit_core::format::OutputFormat::Human => $human,
        }
    };
}

/// Pretty-print a JSON value on stdout
pub fn print_json(value: &serde_json::Value) -> graphkit_core::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
