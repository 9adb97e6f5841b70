use thiserror::Error;

/// Everything that can be wrong with one target line.
///
/// The `Display` rendering of a variant is the exact diagnostic shown to
/// the user, so the message catalogue lives in the `#[error]` attributes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /* CIDR ERROR */
    #[error("invalid CIDR format")]
    InvalidCidrFormat,
    #[error("invalid subnet mask: {mask}")]
    InvalidSubnetMask { mask: String },
    #[error(
        "incomplete IP address, missing {missing} octets, correct format example: {suggestion}"
    )]
    IncompleteCidrAddress { missing: usize, suggestion: String },
    #[error("octet {position} '{octet}' is invalid, expected a number between 0 and 255")]
    InvalidOctet { position: usize, octet: String },

    /* RANGE ERROR */
    #[error("invalid IP range format")]
    InvalidRangeFormat,
    #[error("invalid start IP '{ip}'")]
    InvalidRangeStart { ip: String },
    #[error("invalid end IP '{ip}'")]
    InvalidRangeEnd { ip: String },
    #[error("start IP must not exceed end IP")]
    RangeStartExceedsEnd,

    /* FALLTHROUGH */
    #[error("invalid target format, expected a valid IP, CIDR, IP range, or domain name")]
    UnrecognizedFormat,
}
