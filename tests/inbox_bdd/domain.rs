//! Domain wrapper types for the notification inbox BDD tests.

use std::str::FromStr;

/// Number of notifications served or expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NotificationCount(usize);

impl NotificationCount {
    pub(crate) const fn value(self) -> usize {
        self.0
    }
}

impl FromStr for NotificationCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>().map(Self)
    }
}

/// Number of page requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageCount(u32);

impl PageCount {
    pub(crate) const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for PageCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

/// Position of a thread in the served inbox (1-based); doubles as its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ThreadNumber(usize);

impl ThreadNumber {
    pub(crate) const fn value(self) -> usize {
        self.0
    }
}

impl FromStr for ThreadNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<usize>().map_err(|error| error.to_string())?;
        if value == 0 {
            return Err("ThreadNumber must be >= 1".to_owned());
        }
        Ok(Self(value))
    }
}

/// Repository owner login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Owner(String);

impl Owner {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Owner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_matches('"');
        if trimmed.is_empty() || trimmed.contains('/') {
            return Err(format!("invalid owner: {s}"));
        }
        Ok(Self(trimmed.to_owned()))
    }
}
