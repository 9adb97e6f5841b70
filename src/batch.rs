use tracing::debug;

use crate::ValidationFailure;
use crate::target::validate_single_target;

/// Validates every line of a multi-line target list.
///
/// Line numbers are 1-based and count every input line, including the
/// blank and `#` comment lines that are skipped. Failures come back in
/// input order and are never deduplicated, so repeating a bad target
/// repeats its diagnostic.
pub fn validate_targets(targets: &str) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    for (i, line) in targets.split('\n').enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(message) = validate_single_target(line) {
            failures.push(ValidationFailure {
                line: i + 1,
                target: line.to_string(),
                message,
            });
        }
    }
    debug!("target list checked, {} failures", failures.len());
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TargetError;

    #[test]
    fn test_empty_input() {
        assert!(validate_targets("").is_empty());
        assert!(validate_targets("\n\n\n").is_empty());
        assert!(validate_targets("# only\n# comments\n").is_empty());
    }

    #[test]
    fn test_line_numbers_skip_comments() {
        let input = "10.0.0.1\nbad target!\n# note\n\nexample.com\n999.1.1.1";
        let failures = validate_targets(input);
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].line, 2);
        assert_eq!(failures[0].target, "bad target!");
        assert_eq!(failures[1].line, 6);
        assert_eq!(failures[1].target, "999.1.1.1");
    }

    #[test]
    fn test_end_to_end_example() {
        let input = "10.0.0.1\n10.0.0.400\n#comment\n192.168.1.0/33\n192.168.1.5-192.168.1.2";
        let failures = validate_targets(input);
        assert_eq!(failures.len(), 3);
        assert_eq!(failures[0].line, 2);
        assert_eq!(failures[0].message, TargetError::UnrecognizedFormat);
        assert_eq!(failures[1].line, 4);
        assert_eq!(
            failures[1].message,
            TargetError::InvalidSubnetMask {
                mask: String::from("33")
            }
        );
        assert_eq!(failures[2].line, 5);
        assert_eq!(failures[2].message, TargetError::RangeStartExceedsEnd);
    }

    #[test]
    fn test_crlf_input() {
        let failures = validate_targets("10.0.0.1\r\nbad target!\r\nexample.com\r\n");
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].line, 2);
        assert_eq!(failures[0].target, "bad target!");
    }

    #[test]
    fn test_duplicates_kept() {
        let failures = validate_targets("10.0.0.400\n10.0.0.400");
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].line, 1);
        assert_eq!(failures[1].line, 2);
        assert_eq!(failures[0].message, failures[1].message);
    }

    #[test]
    fn test_idempotent() {
        let input = "10.0/24\nexample.com\n192.168.1.5-192.168.1.2";
        assert_eq!(validate_targets(input), validate_targets(input));
    }
}
