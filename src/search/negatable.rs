/// A value under a polarity. Preconditions and goals are lists of
/// [`Negatable`] atoms and equalities: a positive one must hold, a negative one
/// must not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Negatable<T> {
    Positive(T),
    Negative(T),
}

impl<T> Negatable<T> {
    pub fn new(negated: bool, value: T) -> Self {
        if negated {
            Self::Negative(value)
        } else {
            Self::Positive(value)
        }
    }

    #[inline(always)]
    pub fn is_negated(&self) -> bool {
        matches!(self, Self::Negative(_))
    }

    #[inline(always)]
    pub fn underlying(&self) -> &T {
        match self {
            Self::Positive(value) | Self::Negative(value) => value,
        }
    }

    /// Transforms the wrapped value, keeping the polarity.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Negatable<U> {
        match self {
            Self::Positive(value) => Negatable::Positive(f(value)),
            Self::Negative(value) => Negatable::Negative(f(value)),
        }
    }

    /// Whether the literal holds given whether its underlying value is true.
    #[inline(always)]
    pub fn holds_if(&self, value_is_true: bool) -> bool {
        value_is_true != self.is_negated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_decides_truth() {
        assert!(Negatable::Positive(()).holds_if(true));
        assert!(!Negatable::Positive(()).holds_if(false));
        assert!(Negatable::Negative(()).holds_if(false));
        assert!(!Negatable::Negative(()).holds_if(true));
    }

    #[test]
    fn map_keeps_polarity() {
        let negated = Negatable::new(true, 2).map(|x| x * 10);
        assert_eq!(negated, Negatable::Negative(20));
    }
}
