//! Contains names via the [`Name`] type.

use internment::Intern;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

/// An interned identifier, used for domain, problem, type, predicate, action
/// and object names. Cloning and comparing a [`Name`] is cheap, ordering is by
/// the underlying string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name(Intern<String>);

impl Name {
    #[inline(always)]
    pub fn new<S: AsRef<str>>(name: S) -> Self {
        Self(Intern::new(name.as_ref().to_string()))
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::new("")
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self(Intern::new(value))
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for Name {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Hides the internment details.
impl fmt::Debug for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_strings_give_equal_names() {
        assert_eq!(Name::new("paper1"), Name::from("paper1".to_string()));
        assert_ne!(Name::new("paper1"), Name::new("paper2"));
    }

    #[test]
    fn names_order_by_string() {
        let mut names = vec![Name::new("verify"), Name::new("analyze"), Name::new("compose")];
        names.sort();
        assert_eq!(names, vec!["analyze", "compose", "verify"]);
    }
}
