use std::path::{Path, PathBuf};

use crate::error::{GenerateError, Result};
use crate::fetch::Target;

pub fn output_file_name(target: &Target) -> String {
    format!("typedBlockPermutation-{}-{}.js", target.version, target.channel)
}

/// Write the whole module in one call, replacing any previous file.
pub fn write_module(dir: &Path, target: &Target, text: &str) -> Result<PathBuf> {
    let path = dir.join(output_file_name(target));
    std::fs::write(&path, text).map_err(|source| GenerateError::Write { path: path.clone(), source })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::Channel;

    #[test]
    fn file_name_carries_version_and_channel() {
        let target = Target { version: "1.20.0".into(), channel: Channel::Stable };
        assert_eq!(output_file_name(&target), "typedBlockPermutation-1.20.0-stable.js");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = Target { version: "1.21.0".into(), channel: Channel::Preview };
        write_module(dir.path(), &target, "old contents that are longer").unwrap();
        let path = write_module(dir.path(), &target, "new").unwrap();
        assert_eq!(path, dir.path().join("typedBlockPermutation-1.21.0-preview.js"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = Target { version: "1.0".into(), channel: Channel::Stable };
        let err = write_module(&dir.path().join("absent"), &target, "x").unwrap_err();
        assert!(matches!(err, GenerateError::Write { .. }));
    }
}
