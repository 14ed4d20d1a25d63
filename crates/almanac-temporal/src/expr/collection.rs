use super::Expression;

/// Ordered children of a union or intersection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Collection {
    expressions: Vec<Expression>,
}

impl Collection {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            expressions: Vec::new(),
        }
    }

    /// Appends a child, returning the extended collection.
    #[must_use]
    pub fn add(mut self, expression: impl Into<Expression>) -> Self {
        self.expressions.push(expression.into());
        self
    }

    #[must_use]
    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expression> {
        self.expressions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}

impl FromIterator<Expression> for Collection {
    fn from_iter<I: IntoIterator<Item = Expression>>(iter: I) -> Self {
        Self {
            expressions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Expression;
    type IntoIter = std::slice::Iter<'a, Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
