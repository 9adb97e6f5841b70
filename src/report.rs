use crate::ValidationFailure;

/// Renders a failure list into one user-facing message.
///
/// An empty list renders to an empty string. A single failure renders
/// without any count prefix; two or more get a `found N target format
/// errors:` header followed by one line per failure, in input order.
pub fn format_validation_errors(failures: &[ValidationFailure]) -> String {
    match failures {
        [] => String::new(),
        [failure] => failure.to_string(),
        _ => {
            let lines: Vec<String> = failures.iter().map(|f| f.to_string()).collect();
            format!(
                "found {} target format errors:\n{}",
                failures.len(),
                lines.join("\n")
            )
        }
    }
}
