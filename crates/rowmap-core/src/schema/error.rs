use crate::Error;

/// Errors collected while resolving one record.
#[derive(Debug, Default)]
pub struct ErrorSet {
    errors: Vec<Error>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self { errors: vec![] }
    }

    pub fn push(&mut self, err: Error) {
        self.errors.push(err);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Err(self)` when any error was collected.
    pub fn check(self) -> Result<(), ErrorSet> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        self.errors.iter()
    }
}

impl From<Error> for ErrorSet {
    fn from(err: Error) -> Self {
        Self { errors: vec![err] }
    }
}

impl Extend<Error> for ErrorSet {
    fn extend<T: IntoIterator<Item = Error>>(&mut self, iter: T) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for ErrorSet {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
