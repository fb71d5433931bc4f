use crate::args::InitArgs;
use crate::commands::Out;
use crate::config::ConfigFile;
use crate::Result;
use anyhow::{ensure, Context};
use std::path::Path;

/// Writes a config file at `path` for the service described by `args`, creating its directory
/// when needed. An existing file is only replaced when `args.force()` is set.
///
/// # Errors
/// - Returns an error if the file exists, the scheme and host do not form a valid URL, or any
///   file operation fails.
pub async fn init(path: &Path, args: &InitArgs) -> Result<Out<()>> {
    ensure!(
        args.force() || !path.exists(),
        "The config file '{}' already exists, use --force to replace it",
        path.display()
    );
    let file = ConfigFile::new(args.scheme(), args.host())
        .with_user_token(args.user_token().map(str::to_string))
        .with_api_key(args.api_key().map(str::to_string));
    let config = file
        .clone()
        .into_config()
        .context("Unable to create a configuration from the given scheme and host")?;
    file.save(path).await?;
    Ok(format!(
        "Wrote '{}' for the budget service at {}",
        path.display(),
        config.base_url()
    )
    .into())
}
