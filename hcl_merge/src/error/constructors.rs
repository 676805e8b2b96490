//! Constructors for `MergeError`.

use camino::Utf8Path;
use figment::Error as FigmentError;

use super::{MergeError, Side};

impl MergeError {
    /// Construct a parse error for the given input.
    ///
    /// # Examples
    ///
    /// ```
    /// use hcl_merge::{MergeError, Side};
    /// let err = MergeError::parse(Side::B, std::io::Error::other("unexpected token"));
    /// assert!(matches!(err, MergeError::Parse { side: Side::B, .. }));
    /// assert_eq!(err.to_string(), "error parsing hcl document b: unexpected token");
    /// ```
    #[must_use]
    pub fn parse(side: Side, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Parse {
            side,
            source: source.into(),
        }
    }

    /// Construct a file error for a workspace path.
    #[must_use]
    pub fn file(path: &Utf8Path, source: std::io::Error) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Construct an options error from a [`figment::Error`].
    #[must_use]
    pub fn options(source: FigmentError) -> Self {
        Self::Options(Box::new(source))
    }

    /// The input an error refers to, when it refers to one.
    #[must_use]
    pub const fn side(&self) -> Option<Side> {
        match self {
            Self::Parse { side, .. } | Self::DuplicateBlock { side, .. } => Some(*side),
            _ => None,
        }
    }
}

impl From<FigmentError> for MergeError {
    fn from(e: FigmentError) -> Self {
        Self::options(e)
    }
}
