use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identity of a placed step instance on the canvas.
///
/// Distinct from [`TemplateId`]: many instances of one template may coexist.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(u64);

impl StepId {
    pub const fn from_raw(raw: u64) -> Self {
        StepId(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step-{}", self.0)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step-{}", self.0)
    }
}

/// Identity of a catalog template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(u32);

impl TemplateId {
    pub const fn from_raw(raw: u32) -> Self {
        TemplateId(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "template-{}", self.0)
    }
}

/// Identity of a directed connection. Serialized as `"conn-<n>"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    const PREFIX: &'static str = "conn-";

    pub const fn from_raw(raw: u64) -> Self {
        ConnectionId(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Parse the `conn-<n>` form back into an id.
    pub fn parse(s: &str) -> Option<Self> {
        s.strip_prefix(Self::PREFIX)?.parse().ok().map(ConnectionId)
    }
}

impl fmt::Debug for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl Serialize for ConnectionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ConnectionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ConnectionId::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid connection id `{s}`")))
    }
}

/// Monotonic id source. Never rewinds, so ids stay unique for the
/// lifetime of the owner even when earlier state is restored.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Largest id accepted from outside. Everything above it is left for
    /// fresh allocations, so `allocate` cannot run out.
    pub const MAX_FOREIGN: u64 = i64::MAX as u64;

    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next raw id.
    pub fn allocate(&mut self) -> u64 {
        let n = self.next;
        self.next += 1;
        n
    }

    /// Make sure `raw` (an id that came from outside) is never handed out.
    ///
    /// Returns `false`, leaving the allocator untouched, when `raw` is above
    /// [`Self::MAX_FOREIGN`]; callers drop such entries.
    pub fn reserve(&mut self, raw: u64) -> bool {
        if raw > Self::MAX_FOREIGN {
            return false;
        }
        self.next = self.next.max(raw + 1);
        true
    }
}
