//! Link targets for contact entries.
//!
//! `email` values become `mailto:` links. Everything else must be an
//! `http://` or `https://` URL with a host before it is handed to the
//! surface to open.

use crate::error::TargetError;
use crate::models::Contact;

/// Key whose value is a mail address rather than a URL.
pub const EMAIL_KEY: &str = "email";

/// Build the link the surface should open for `contact`.
pub fn contact_target(contact: &Contact) -> Result<String, TargetError> {
    let value = contact.value.trim();

    if value.is_empty() {
        return Err(TargetError::Empty(contact.key.clone()));
    }

    if contact.key == EMAIL_KEY {
        return Ok(format!("mailto:{}", value));
    }

    let lower = value.to_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return Err(TargetError::InvalidProtocol(contact.key.clone()));
    }

    if extract_host(value).is_none() {
        return Err(TargetError::NoHost(contact.key.clone()));
    }

    Ok(value.to_string())
}

/// Host part of an http(s) URL, lowercased, without port or `www.`.
fn extract_host(url: &str) -> Option<String> {
    let scheme_end = url.find("://")?;
    let without_protocol = &url[scheme_end + 3..];

    let host_part = without_protocol.split(['/', '?', '#']).next()?;
    let host = host_part.rsplit('@').next()?;
    let host = host.split(':').next()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    if host.is_empty() {
        return None;
    }

    Some(host.to_lowercase())
}
