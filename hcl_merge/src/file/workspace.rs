//! Workspace-confined file operations.
//!
//! All paths are resolved against a root directory opened through `cap-std`,
//! so a relative path cannot reach outside the root and absolute paths are
//! refused.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use tracing::{debug, warn};

use crate::{DocumentFormat, HclFormat, MergeError, MergeResult, Merger, MissingFiles};

/// A root directory in which input files are read and merged output is
/// written.
///
/// # Examples
///
/// ```rust,no_run
/// use hcl_merge::MergeWorkspace;
///
/// let workspace = MergeWorkspace::open("infra")?;
/// workspace.merge_files_write(
///     "base/variables.tf",
///     "overrides/variables.tf",
///     "out/variables.tf",
/// )?;
/// # Ok::<_, hcl_merge::MergeError>(())
/// ```
pub struct MergeWorkspace<F = HclFormat> {
    root: Dir,
    merger: Merger<F>,
}

impl MergeWorkspace<HclFormat> {
    /// Open `root` with a default HCL [`Merger`].
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::File`] when the directory cannot be opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> MergeResult<Self> {
        let root = root.as_ref();
        let dir = Dir::open_ambient_dir(root, ambient_authority())
            .map_err(|err| MergeError::file(root, err))?;
        Ok(Self::new(dir, Merger::new()))
    }
}

impl<F: DocumentFormat> MergeWorkspace<F> {
    /// Wrap an already opened directory.
    #[must_use]
    pub const fn new(root: Dir, merger: Merger<F>) -> Self {
        Self { root, merger }
    }

    /// Replace the merger used by this workspace.
    #[must_use]
    pub fn with_merger<G: DocumentFormat>(self, merger: Merger<G>) -> MergeWorkspace<G> {
        MergeWorkspace {
            root: self.root,
            merger,
        }
    }

    /// The merger used by this workspace.
    #[must_use]
    pub const fn merger(&self) -> &Merger<F> {
        &self.merger
    }

    /// Read and merge two files.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::File`] when an input cannot be read (or is
    /// missing and [`MissingFiles::Error`] is active), and any error of
    /// [`Merger::merge`].
    pub fn merge_files(
        &self,
        a_path: impl AsRef<Utf8Path>,
        b_path: impl AsRef<Utf8Path>,
    ) -> MergeResult<String> {
        let a = self.read_source(a_path.as_ref())?;
        let b = self.read_source(b_path.as_ref())?;
        self.merger.merge(&a, &b)
    }

    /// Merge two texts and write the result to `out_path`.
    ///
    /// # Errors
    ///
    /// Returns any error of [`Merger::merge`] and [`MergeError::File`] when
    /// the output cannot be written.
    pub fn merge_write(
        &self,
        a: &str,
        b: &str,
        out_path: impl AsRef<Utf8Path>,
    ) -> MergeResult<()> {
        let merged = self.merger.merge(a, b)?;
        self.write_output(out_path.as_ref(), &merged)
    }

    /// Merge two files and write the result to `out_path`.
    ///
    /// # Errors
    ///
    /// Returns any error of [`MergeWorkspace::merge_files`] and
    /// [`MergeError::File`] when the output cannot be written.
    pub fn merge_files_write(
        &self,
        a_path: impl AsRef<Utf8Path>,
        b_path: impl AsRef<Utf8Path>,
        out_path: impl AsRef<Utf8Path>,
    ) -> MergeResult<()> {
        let merged = self.merge_files(a_path, b_path)?;
        self.write_output(out_path.as_ref(), &merged)
    }

    fn read_source(&self, path: &Utf8Path) -> MergeResult<String> {
        match self.root.read_to_string(path) {
            Ok(source) => Ok(source),
            Err(err)
                if err.kind() == std::io::ErrorKind::NotFound
                    && self.merger.options().missing_files == MissingFiles::Empty =>
            {
                warn!(path = %path, "hcl file not found, merging as an empty document");
                Ok(String::new())
            }
            Err(err) => Err(MergeError::file(path, err)),
        }
    }

    fn write_output(&self, path: &Utf8Path, contents: &str) -> MergeResult<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) {
            self.root
                .create_dir_all(parent)
                .map_err(|err| MergeError::file(parent, err))?;
        }
        self.root
            .write(path, contents)
            .map_err(|err| MergeError::file(path, err))?;
        debug!(path = %path, bytes = contents.len(), "wrote merged hcl");
        Ok(())
    }
}
