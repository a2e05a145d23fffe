//! In-memory stand-ins for the OS tables, used by unit tests.

use std::collections::HashMap;
use std::io;

use super::{ConfigName, ControlTable, SystemConfig, control_query};
use crate::{MemoryError, Result};

/// What a stubbed query returns.
#[derive(Debug, Clone)]
pub(crate) enum Reply<T> {
    Value(T),
    /// The OS call returned an error status.
    Fails,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct StubConfig {
    values: HashMap<ConfigName, Reply<u64>>,
}

impl StubConfig {
    pub(crate) fn with(mut self, name: ConfigName, value: u64) -> Self {
        self.values.insert(name, Reply::Value(value));
        self
    }

    pub(crate) fn failing(mut self, name: ConfigName) -> Self {
        self.values.insert(name, Reply::Fails);
        self
    }

    /// `pages` physical pages of `page_size` bytes, `available` of them free.
    pub(crate) fn paged(pages: u64, page_size: u64, available: u64) -> Self {
        Self::default()
            .with(ConfigName::PhysicalPages, pages)
            .with(ConfigName::PageSize, page_size)
            .with(ConfigName::AvailablePages, available)
    }
}

impl SystemConfig for StubConfig {
    fn value(&self, name: ConfigName) -> Result<u64> {
        match self.values.get(&name) {
            Some(Reply::Value(v)) => Ok(*v),
            Some(Reply::Fails) => Err(MemoryError::failed(
                name.query(),
                io::Error::new(io::ErrorKind::PermissionDenied, "stubbed failure"),
            )),
            None => Err(MemoryError::unavailable(name.query(), "not stubbed")),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct StubTable {
    points: HashMap<String, Reply<Vec<u8>>>,
}

impl StubTable {
    pub(crate) fn with(mut self, name: &str, raw: impl Into<Vec<u8>>) -> Self {
        self.points.insert(name.to_string(), Reply::Value(raw.into()));
        self
    }

    pub(crate) fn failing(mut self, name: &str) -> Self {
        self.points.insert(name.to_string(), Reply::Fails);
        self
    }
}

impl ControlTable for StubTable {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        match self.points.get(name) {
            Some(Reply::Value(raw)) => Ok(raw.clone()),
            Some(Reply::Fails) => Err(MemoryError::failed(
                control_query(name),
                io::Error::new(io::ErrorKind::PermissionDenied, "stubbed failure"),
            )),
            None => Err(MemoryError::unavailable(
                control_query(name),
                "kernel does not expose this control point",
            )),
        }
    }
}
