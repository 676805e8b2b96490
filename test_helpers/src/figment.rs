//! Environment isolation built on `figment::Jail`.
//!
//! A jail serialises access to the process environment, so tests that set
//! `HCL_MERGE_*` variables can run alongside each other without leaking
//! state.

use anyhow::{Result, anyhow};

/// Runs `f` with an environment holding exactly `vars`.
///
/// The environment is cleared inside a [`figment::Jail`] before `vars` are
/// set, and restored once `f` returns.
///
/// # Examples
///
/// ```
/// use hcl_merge_test_helpers::figment::with_env;
///
/// let value = with_env(&[("HCL_MERGE_DUPLICATE_KEYS", "reject")], || {
///     std::env::var("HCL_MERGE_DUPLICATE_KEYS").ok()
/// })?;
/// assert_eq!(value.as_deref(), Some("reject"));
/// # Ok::<_, anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if the jail cannot be initialised.
pub fn with_env<F, T>(vars: &[(&str, &str)], f: F) -> Result<T>
where
    F: FnOnce() -> T,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        jail.clear_env();
        for (key, value) in vars {
            jail.set_env(key, value);
        }
        output = Some(f());
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("environment closure did not run"))
}
