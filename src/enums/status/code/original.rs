//! Reference implementation: a constant table indexed by discriminant.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseVariantError;

/// Outcome of a client request.
///
/// The set is closed: every variant carries a fixed `(code, message)` pair
/// assigned here and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Pending,
    Success,
    Error,
    NotFound,
}

struct Entry {
    name: &'static str,
    code: i32,
    message: &'static str,
}

// Row order must follow the declaration order of `Status`.
const TABLE: [Entry; 4] = [
    Entry {
        name: "Pending",
        code: 0,
        message: "",
    },
    Entry {
        name: "Success",
        code: 200,
        message: "Operation successful.",
    },
    Entry {
        name: "Error",
        code: 500,
        message: "Internal error.",
    },
    Entry {
        name: "NotFound",
        code: 404,
        message: "Not found.",
    },
];

impl Status {
    /// Every status, in declaration order.
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::Success,
        Status::Error,
        Status::NotFound,
    ];

    pub fn all() -> &'static [Status] {
        &Self::ALL
    }

    /// Position in declaration order.
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        TABLE[self as usize].name
    }

    pub const fn code(self) -> i32 {
        TABLE[self as usize].code
    }

    /// Internal message. `Pending` has none and yields an empty string.
    pub const fn message(self) -> &'static str {
        TABLE[self as usize].message
    }

    /// Reverse lookup by code.
    pub fn from_code(code: i32) -> Option<Status> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// `"<name> [<code>] <message>"`, or `"<name> [<code>]"` when there is no message.
    pub fn describe(self) -> String {
        match self.message() {
            "" => format!("{} [{}]", self.name(), self.code()),
            message => format!("{} [{}] {}", self.name(), self.code(), message),
        }
    }

    /// Sentence shown to the client for this status.
    pub const fn client_sentence(self) -> &'static str {
        match self {
            Status::Pending => "Your request is being processed.",
            Status::Success => "Operation completed successfully.",
            Status::Error => "An error occurred, please try again.",
            Status::NotFound => "Requested resource not found.",
        }
    }

    /// Full client-facing response, combining the sentence with code and message.
    pub fn client_response(self) -> String {
        let message = match self.message() {
            "" => "none",
            message => message,
        };
        format!(
            "Hello Client, {} Status code: {}, Internal Message: {}",
            self.client_sentence(),
            self.code(),
            message
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Status {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|status| status.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|s| s.name()).collect();
                ParseVariantError::new("status", s, &names)
            })
    }
}

/// Table lookup, used as the reference strategy.
#[inline(never)]
pub fn lookup_original(status: Status) -> (i32, &'static str) {
    (status.code(), status.message())
}
