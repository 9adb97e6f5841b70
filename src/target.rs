use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::TargetError;

// One or more labels (1-63 chars, letters/digits/hyphen, no hyphen at
// either end) followed by a TLD label of at least 2 letters.
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$")
        .expect("build domain regex failed")
});

/// Checks one line of target input.
///
/// Returns `None` when the line is a valid target (blank lines and `#`
/// comments count as valid) and the diagnostic to show the user
/// otherwise. Classification runs in a fixed order, CIDR before range
/// before plain IP before domain, and the first structural match wins:
/// a broken CIDR is reported as a CIDR error, never retried as a domain.
pub fn validate_single_target(target: &str) -> Option<TargetError> {
    let target = target.trim();
    if target.is_empty() || target.starts_with('#') {
        return None;
    }

    let host = strip_port(target);

    if host.contains('/') {
        debug!("[{}] classified as cidr", host);
        return validate_cidr(host);
    }

    if let Some((left, _)) = host.split_once('-') {
        if is_valid_ipv4(left.trim()) {
            debug!("[{}] classified as ip range", host);
            return validate_ip_range(host);
        }
        // a hyphen may also appear inside a domain name, fall through
    }

    if is_valid_ipv4(host) {
        debug!("[{}] classified as ipv4", host);
        return None;
    }

    if is_valid_domain(host) {
        debug!("[{}] classified as domain", host);
        return None;
    }

    Some(TargetError::UnrecognizedFormat)
}

/// Drops a trailing `:<port>` when the text after the last colon is an
/// integer in [1, 65535], otherwise returns the input untouched.
fn strip_port(target: &str) -> &str {
    match target.rfind(':') {
        Some(idx) => match target[idx + 1..].parse::<u16>() {
            Ok(port) if port >= 1 => &target[..idx],
            _ => target,
        },
        None => target,
    }
}

fn validate_cidr(cidr: &str) -> Option<TargetError> {
    let parts: Vec<&str> = cidr.split('/').collect();
    if parts.len() != 2 {
        return Some(TargetError::InvalidCidrFormat);
    }
    let ip_part = parts[0];
    let mask_part = parts[1];

    match mask_part.parse::<u8>() {
        Ok(mask) if mask <= 32 => (),
        _ => {
            return Some(TargetError::InvalidSubnetMask {
                mask: mask_part.to_string(),
            });
        }
    }

    let octets: Vec<&str> = ip_part.split('.').collect();
    if octets.len() != 4 {
        return Some(TargetError::IncompleteCidrAddress {
            missing: 4_usize.saturating_sub(octets.len()),
            suggestion: suggest_cidr_fix(ip_part, mask_part),
        });
    }

    for (i, octet) in octets.iter().enumerate() {
        if !is_canonical_octet(octet) {
            return Some(TargetError::InvalidOctet {
                position: i + 1,
                octet: octet.to_string(),
            });
        }
    }
    None
}

/// Right-pads a short CIDR prefix with `0` octets and rejoins the
/// original mask, e.g. `10.0` + `24` becomes `10.0.0.0/24`.
fn suggest_cidr_fix(ip_part: &str, mask_part: &str) -> String {
    let mut octets: Vec<&str> = ip_part.split('.').collect();
    while octets.len() < 4 {
        octets.push("0");
    }
    format!("{}/{}", octets.join("."), mask_part)
}

fn validate_ip_range(range: &str) -> Option<TargetError> {
    let parts: Vec<&str> = range.split('-').collect();
    if parts.len() != 2 {
        return Some(TargetError::InvalidRangeFormat);
    }
    let start = parts[0].trim();
    let end = parts[1].trim();

    if !is_valid_ipv4(start) {
        return Some(TargetError::InvalidRangeStart {
            ip: start.to_string(),
        });
    }
    if !is_valid_ipv4(end) {
        return Some(TargetError::InvalidRangeEnd {
            ip: end.to_string(),
        });
    }

    // first differing octet decides, equal addresses are a valid
    // single-address range
    for (s, e) in octet_values(start).iter().zip(octet_values(end).iter()) {
        if s > e {
            return Some(TargetError::RangeStartExceedsEnd);
        }
        if s < e {
            break;
        }
    }
    None
}

fn octet_values(ip: &str) -> Vec<u8> {
    ip.split('.').map(|o| o.parse().unwrap_or(0)).collect()
}

/// An octet is only accepted in its canonical form: `007` and `+7` are
/// rejected because they reparse to a different string than the input.
fn is_canonical_octet(octet: &str) -> bool {
    match octet.parse::<u16>() {
        Ok(value) => value <= 255 && octet == value.to_string(),
        Err(_) => false,
    }
}

fn is_valid_ipv4(ip: &str) -> bool {
    let parts: Vec<&str> = ip.split('.').collect();
    parts.len() == 4 && parts.iter().all(|octet| is_canonical_octet(octet))
}

fn is_valid_domain(host: &str) -> bool {
    DOMAIN_RE.is_match(host)
}
