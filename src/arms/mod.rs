use std::fmt;

use crate::error::{BanditError, Result};

mod index;
mod placement;

pub use index::ArmIndex;
pub use placement::place_values_at_indices;

/// An opaque arm identifier, either an integer or a string token
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArmId {
    Int(i64),
    Name(String),
}

impl fmt::Display for ArmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ArmId {
                fn from(value: $t) -> Self {
                    Self::Int(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i32, i64, u32, u64, usize);

impl From<&str> for ArmId {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl From<String> for ArmId {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

/// The set of arms a bandit is built over
#[derive(Debug, Clone, PartialEq)]
pub enum Arms {
    /// `n` arms identified by the integers `0..n`
    Count(usize),
    /// Explicit arm ids, in canonical order
    Ids(Vec<ArmId>),
}

impl Arms {
    /// Resolve into the canonical, duplicate-free list of arm ids
    pub fn resolve(self) -> Result<Vec<ArmId>> {
        let ids = match self {
            Self::Count(n) => (0..n).map(ArmId::from).collect::<Vec<_>>(),
            Self::Ids(ids) => ids,
        };
        if ids.is_empty() {
            return Err(BanditError::NoArms);
        }
        ArmIndex::new(&ids)?;
        Ok(ids)
    }
}

impl From<usize> for Arms {
    fn from(n: usize) -> Self {
        Self::Count(n)
    }
}

impl<T: Into<ArmId>> From<Vec<T>> for Arms {
    fn from(ids: Vec<T>) -> Self {
        Self::Ids(ids.into_iter().map(Into::into).collect())
    }
}
