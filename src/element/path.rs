use crate::error::PathError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Child indices leading from a root element to one of its descendants.
///
/// The empty path addresses the root itself. Displayed as `/2/0` (child 0 of child 2),
/// and `/` for the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementPath(Vec<usize>);

impl ElementPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The path of this node's `index`-th child.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// The parent path and this node's index within it, or `None` for the root.
    pub fn parent(&self) -> Option<(Self, usize)> {
        let (last, rest) = self.0.split_last()?;
        Some((Self(rest.to_vec()), *last))
    }

    /// The first `depth` steps of this path.
    pub fn prefix(&self, depth: usize) -> Self {
        Self(self.0[..depth.min(self.0.len())].to_vec())
    }

    pub fn starts_with(&self, other: &ElementPath) -> bool {
        self.0.starts_with(&other.0)
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

impl FromStr for ElementPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed
            .strip_prefix('/')
            .ok_or_else(|| PathError::InvalidPath(s.to_string()))?;
        if body.is_empty() {
            return Ok(Self::root());
        }
        body.split('/')
            .map(|step| {
                step.parse::<usize>()
                    .map_err(|_| PathError::InvalidPath(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<Vec<usize>> for ElementPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for ElementPath {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for ElementPath {
    fn from(indices: [usize; N]) -> Self {
        Self(indices.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_agree() {
        let path = ElementPath::from([2, 0]);
        assert_eq!(path.to_string(), "/2/0");
        assert_eq!("/2/0".parse::<ElementPath>().unwrap(), path);
        assert_eq!("/".parse::<ElementPath>().unwrap(), ElementPath::root());
    }

    #[test]
    fn rejects_malformed_paths() {
        assert!("2/0".parse::<ElementPath>().is_err());
        assert!("/a".parse::<ElementPath>().is_err());
        assert!("/1//2".parse::<ElementPath>().is_err());
    }

    #[test]
    fn parent_splits_last_step() {
        let (parent, index) = ElementPath::from([1, 3]).parent().unwrap();
        assert_eq!(parent, ElementPath::from([1]));
        assert_eq!(index, 3);
        assert!(ElementPath::root().parent().is_none());
    }
}
