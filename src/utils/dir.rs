use std::{env, io, path::PathBuf};

use anyhow::{Context, Result};

const APPLICATION_NAME: &str = "medusa";
const DATA_FILE_NAME: &str = "medusadata.json";

/// Default location of the tracked entries. Uses $XDG_DATA_HOME or $HOME/.local/share.
pub fn default_data_path() -> Result<PathBuf> {
    let dir = application_dir("XDG_DATA_HOME", ".local/share")?;
    Ok(dir.join(DATA_FILE_NAME))
}

/// Directory for logs and other state. Uses $XDG_STATE_HOME or $HOME/.local/state.
pub fn default_state_dir() -> Result<PathBuf> {
    application_dir("XDG_STATE_HOME", ".local/state")
}

#[allow(unused_variables)]
fn application_dir(xdg_var: &str, home_fallback: &str) -> Result<PathBuf> {
    let path = {
        #[cfg(windows)]
        {
            let mut path = PathBuf::from(
                env::var("APPDATA").context("APPDATA should be present on Windows")?,
            );
            path.push(APPLICATION_NAME);
            path
        }
        #[cfg(not(windows))]
        {
            let mut path = env::var(xdg_var)
                .map(PathBuf::from)
                .or_else(|_| {
                    env::var("HOME").map(|home| {
                        let mut path = PathBuf::from(home);
                        path.push(home_fallback);
                        path
                    })
                })
                .with_context(|| format!("Couldn't find neither {xdg_var} nor HOME"))?;
            path.push(APPLICATION_NAME);
            path
        }
    };

    match std::fs::create_dir_all(&path) {
        Ok(_) => Ok(path),
        Err(v) if v.kind() == io::ErrorKind::AlreadyExists => Ok(path),
        Err(v) => Err(v.into()),
    }
}
