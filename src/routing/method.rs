//! Method identities recognized by the dispatch table.
//!
//! # Responsibilities
//! - Enumerate the nine verbs that own a slot in a table
//! - Map `http::Method` and string tokens onto slots
//!
//! # Design Decisions
//! - Matching is exact and case-sensitive (`get` is an extension method)
//! - Anything outside the nine verbs has no slot and takes the miss path

use std::fmt;
use std::str::FromStr;

use axum::http::Method;
use thiserror::Error;

/// One of the nine method slots of a [`MethodRouter`](crate::routing::MethodRouter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MethodSlot {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Trace,
    Options,
    Connect,
    Patch,
}

/// Returned when a token is not one of the nine recognized verbs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized method token: {0:?}")]
pub struct UnknownMethod(pub String);

impl MethodSlot {
    /// All slots in canonical order.
    pub const ALL: [MethodSlot; 9] = [
        MethodSlot::Get,
        MethodSlot::Head,
        MethodSlot::Post,
        MethodSlot::Put,
        MethodSlot::Delete,
        MethodSlot::Trace,
        MethodSlot::Options,
        MethodSlot::Connect,
        MethodSlot::Patch,
    ];

    /// Map a request method onto its slot, or `None` for extension methods.
    pub fn from_method(method: &Method) -> Option<Self> {
        Self::from_token(method.as_str())
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "GET" => Some(MethodSlot::Get),
            "HEAD" => Some(MethodSlot::Head),
            "POST" => Some(MethodSlot::Post),
            "PUT" => Some(MethodSlot::Put),
            "DELETE" => Some(MethodSlot::Delete),
            "TRACE" => Some(MethodSlot::Trace),
            "OPTIONS" => Some(MethodSlot::Options),
            "CONNECT" => Some(MethodSlot::Connect),
            "PATCH" => Some(MethodSlot::Patch),
            _ => None,
        }
    }

    /// The uppercase wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            MethodSlot::Get => "GET",
            MethodSlot::Head => "HEAD",
            MethodSlot::Post => "POST",
            MethodSlot::Put => "PUT",
            MethodSlot::Delete => "DELETE",
            MethodSlot::Trace => "TRACE",
            MethodSlot::Options => "OPTIONS",
            MethodSlot::Connect => "CONNECT",
            MethodSlot::Patch => "PATCH",
        }
    }

    pub fn to_method(self) -> Method {
        match self {
            MethodSlot::Get => Method::GET,
            MethodSlot::Head => Method::HEAD,
            MethodSlot::Post => Method::POST,
            MethodSlot::Put => Method::PUT,
            MethodSlot::Delete => Method::DELETE,
            MethodSlot::Trace => Method::TRACE,
            MethodSlot::Options => Method::OPTIONS,
            MethodSlot::Connect => Method::CONNECT,
            MethodSlot::Patch => Method::PATCH,
        }
    }
}

impl fmt::Display for MethodSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MethodSlot {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_every_slot() {
        for slot in MethodSlot::ALL {
            assert_eq!(MethodSlot::from_method(&slot.to_method()), Some(slot));
            assert_eq!(slot.as_str().parse::<MethodSlot>(), Ok(slot));
        }
    }

    #[test]
    fn test_extension_methods_have_no_slot() {
        let unknown = Method::from_bytes(b"UNKNOWN").unwrap();
        assert_eq!(MethodSlot::from_method(&unknown), None);

        let lowercase = Method::from_bytes(b"get").unwrap();
        assert_eq!(MethodSlot::from_method(&lowercase), None);
    }

    #[test]
    fn test_parse_rejects_lowercase() {
        let err = "patch".parse::<MethodSlot>().unwrap_err();
        assert_eq!(err, UnknownMethod("patch".into()));
        assert_eq!(err.to_string(), "unrecognized method token: \"patch\"");
    }

    #[test]
    fn test_display_matches_token() {
        assert_eq!(MethodSlot::Options.to_string(), "OPTIONS");
    }
}
