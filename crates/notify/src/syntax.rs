//! Email-address and absolute-URL syntax checks.
//!
//! Email addresses go through `lettre`'s mailbox parser first. Forms it
//! refuses but RFC 5322 allows (quoted local parts, domain literals,
//! parenthetical comments) get a second look: comments are dropped, the
//! display name and angle brackets are split off, and the remaining
//! addr-spec is checked with `addr`. Failures are reported with the
//! `mail: ...` messages users already know.

use lettre::message::Mailbox;
use url::Url;

const NO_ADDRESS: &str = "mail: no address";
const MISSING_AT_OR_ANGLE_ADDR: &str = "mail: missing '@' or angle-addr";
const MISSING_AT_IN_ADDR_SPEC: &str = "mail: missing @ in addr-spec";
const NO_LOCAL_PART: &str = "mail: no local-part in addr-spec";
const NO_DOMAIN: &str = "mail: no domain in addr-spec";
const UNCLOSED_ANGLE_ADDR: &str = "mail: unclosed angle-addr";
const EXPECTED_SINGLE_ADDRESS: &str = "mail: expected single address";
const UNCLOSED_QUOTED_STRING: &str = "mail: unclosed quoted-string";
const INVALID_DISPLAY_NAME: &str = "mail: invalid display name";
const MISFORMATTED_COMMENT: &str = "mail: misformatted parenthetical comment";

/// Check that `value` is a single RFC 5322 address.
///
/// Returns the error message to show the user on failure.
pub fn check_email(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NO_ADDRESS.to_string());
    }
    if trimmed.parse::<Mailbox>().is_ok() {
        return Ok(());
    }
    check_mailbox(trimmed).map_err(str::to_string)
}

/// Full `mailbox` grammar: `addr-spec` or `[display-name] <addr-spec>`,
/// with comments allowed anywhere outside quoted strings.
fn check_mailbox(value: &str) -> Result<(), &'static str> {
    let stripped = strip_comments(value)?;
    let text = stripped.trim();
    if text.is_empty() {
        return Err(NO_ADDRESS);
    }

    let spec = match find_unquoted(text, '<') {
        Some(open) => {
            check_display_name(&text[..open])?;
            let rest = &text[open + 1..];
            let close = find_unquoted(rest, '>').ok_or(UNCLOSED_ANGLE_ADDR)?;
            if !rest[close + 1..].trim().is_empty() {
                return Err(EXPECTED_SINGLE_ADDRESS);
            }
            rest[..close].trim()
        }
        None => {
            if find_unquoted(text, '@').is_none() {
                return Err(MISSING_AT_OR_ANGLE_ADDR);
            }
            text
        }
    };

    check_addr_spec(spec)
}

fn check_addr_spec(spec: &str) -> Result<(), &'static str> {
    let at = spec.rfind('@').ok_or(MISSING_AT_IN_ADDR_SPEC)?;
    if spec[..at].trim().is_empty() {
        return Err(NO_LOCAL_PART);
    }
    if spec[at + 1..].trim().is_empty() {
        return Err(NO_DOMAIN);
    }

    addr::parse_email_address(spec)
        .map(|_| ())
        .map_err(|e| addr_spec_message(e.kind()))
}

fn addr_spec_message(kind: addr::error::Kind) -> &'static str {
    use addr::error::Kind;

    match kind {
        Kind::NoAtSign => MISSING_AT_IN_ADDR_SPEC,
        Kind::NoUserPart => NO_LOCAL_PART,
        Kind::NoHostPart | Kind::EmptyName => NO_DOMAIN,
        Kind::QuoteUnclosed => UNCLOSED_QUOTED_STRING,
        Kind::EmailTooLong | Kind::EmailLocalTooLong => "mail: address too long",
        Kind::InvalidIpAddr | Kind::NetDisabled => "mail: invalid domain literal",
        Kind::IllegalCharacter => "mail: invalid character in addr-spec",
        _ => "mail: invalid domain in addr-spec",
    }
}

/// A display name is a phrase: atoms, dots, spaces and quoted strings.
fn check_display_name(name: &str) -> Result<(), &'static str> {
    let mut chars = name.trim().chars();
    while let Some(c) = chars.next() {
        if c == '"' {
            skip_quoted(&mut chars)?;
        } else if !(is_atext(c) || c == '.' || c == ' ' || c == '\t') {
            return Err(INVALID_DISPLAY_NAME);
        }
    }
    Ok(())
}

/// Advance past a quoted string whose opening `"` was already consumed.
fn skip_quoted(chars: &mut std::str::Chars<'_>) -> Result<(), &'static str> {
    while let Some(c) = chars.next() {
        match c {
            '"' => return Ok(()),
            '\\' => {
                chars.next();
            }
            _ => {}
        }
    }
    Err(UNCLOSED_QUOTED_STRING)
}

/// Replace each (possibly nested) comment with a single space.
/// Quoted strings are copied through untouched.
fn strip_comments(value: &str) -> Result<String, &'static str> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    let mut depth = 0usize;
    let mut quoted = false;

    while let Some(c) = chars.next() {
        if depth > 0 {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        out.push(' ');
                    }
                }
                '\\' => {
                    chars.next();
                }
                _ => {}
            }
            continue;
        }

        match c {
            '\\' if quoted => {
                out.push(c);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '"' => {
                quoted = !quoted;
                out.push(c);
            }
            '(' if !quoted => depth = 1,
            ')' if !quoted => return Err(MISFORMATTED_COMMENT),
            _ => out.push(c),
        }
    }

    if depth > 0 {
        return Err(MISFORMATTED_COMMENT);
    }
    Ok(out)
}

/// Byte offset of the first `target` outside a quoted string.
fn find_unquoted(text: &str, target: char) -> Option<usize> {
    let mut quoted = false;
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
        } else if quoted && c == '\\' {
            escaped = true;
        } else if c == '"' {
            quoted = !quoted;
        } else if !quoted && c == target {
            return Some(i);
        }
    }
    None
}

/// RFC 5322 `atext`, widened to any non-ASCII character (RFC 6532).
fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c) || !c.is_ascii()
}

/// Check that `value` is an absolute URL (scheme required).
///
/// `Url::parse` silently drops surrounding spaces and strips tabs and
/// newlines, none of which an RFC 3986 URI may contain, so those are
/// refused before parsing.
pub fn check_absolute_url(value: &str) -> Result<(), String> {
    if value != value.trim() || value.chars().any(|c| c.is_ascii_control()) {
        return Err("url contains whitespace or control characters".to_string());
    }
    Url::parse(value).map(|_| ()).map_err(|e| e.to_string())
}
