//! Options controlling merge policy.
//!
//! Options are plain serde structures so callers can embed them in their own
//! configuration. [`MergeOptions::from_env`] layers `HCL_MERGE_*` environment
//! variables over the defaults using Figment.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::{MergeError, MergeResult};

/// Prefix of the environment variables read by [`MergeOptions::from_env`].
pub const ENV_PREFIX: &str = "HCL_MERGE_";

/// How duplicate block keys among siblings of one input are handled.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeys {
    /// The last block with a given key is the one matched against the other
    /// input. Every duplicate is still emitted.
    #[default]
    LastWins,
    /// Fail with [`MergeError::DuplicateBlock`] before merging.
    Reject,
}

/// How a missing input file is handled by workspace operations.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFiles {
    /// Treat the missing file as an empty document and log a warning.
    #[default]
    Empty,
    /// Fail with [`MergeError::File`].
    Error,
}

/// Merge policy.
///
/// # Examples
///
/// ```rust
/// use figment::{Figment, providers::Serialized};
/// use hcl_merge::{DuplicateKeys, MergeOptions, MissingFiles};
///
/// let figment = Figment::from(Serialized::default("duplicate_keys", "reject"));
/// let options = MergeOptions::from_figment(&figment)?;
/// assert_eq!(options.duplicate_keys, DuplicateKeys::Reject);
/// assert_eq!(options.missing_files, MissingFiles::Empty);
/// # Ok::<_, hcl_merge::MergeError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Policy for duplicate sibling keys within one input.
    pub duplicate_keys: DuplicateKeys,
    /// Policy for missing input files.
    pub missing_files: MissingFiles,
}

impl MergeOptions {
    /// Extract options from `figment`, falling back to defaults for absent
    /// keys.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Options`] when a value cannot be deserialised.
    pub fn from_figment(figment: &Figment) -> MergeResult<Self> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(figment.clone())
            .extract()
            .map_err(MergeError::options)
    }

    /// Load options from `HCL_MERGE_*` environment variables.
    ///
    /// `HCL_MERGE_DUPLICATE_KEYS` accepts `last_wins` or `reject`;
    /// `HCL_MERGE_MISSING_FILES` accepts `empty` or `error`.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Options`] when a variable holds an unknown value.
    pub fn from_env() -> MergeResult<Self> {
        Self::from_figment(&Figment::from(Env::prefixed(ENV_PREFIX)))
    }
}
