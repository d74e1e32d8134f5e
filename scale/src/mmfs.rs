//! Wrappers around the Spectrum Scale ACL binaries.
//!
//! Every operation resolves the target path first, shells out to mmgetacl or
//! mmputacl under the configured `scale.bindir`, and moves text through the
//! codec in [`crate::acl`]. Exit code 22 from the vendor tools means the
//! path lives outside any managed fileset and maps to
//! [`Error::NotManaged`].

use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::{Path, PathBuf};

use utils::app_config::AppConfig;

use crate::acl::{group_perms, AclRecord, DecodeMode, EntryKind, PERMS_UNKNOWN};
use crate::command::run_cmd;
use crate::error::{Error, Result};
use crate::meta::{absolutize, classify};

/// Default install location of the Spectrum Scale command-line tools.
pub const DEFAULT_BINDIR: &str = "/usr/lpp/mmfs/bin";

/// mmgetacl/mmputacl exit status for a path outside any managed fileset.
const NOT_MANAGED_EXIT: i32 = 22;

/// Per-invocation toggles, threaded explicitly instead of global state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print mutating commands and their payload instead of executing them
    pub dryrun: bool,
    /// Report each vendor-tool invocation
    pub verbose: bool,
    /// Log encoded payloads
    pub debug: bool,
}

fn bindir() -> PathBuf {
    AppConfig::get::<String>("scale.bindir")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BINDIR))
}

fn tool(name: &str) -> PathBuf {
    bindir().join(name)
}

/// Attribute a vendor-tool failure to `path`, keeping the "not managed"
/// condition distinct from generic command failures.
fn map_tool_error(err: Error, path: &Path) -> Error {
    match err {
        Error::CommandFailed { code, .. } if code == NOT_MANAGED_EXIT => Error::NotManaged {
            path: path.to_path_buf(),
        },
        other => other,
    }
}

/// Fetch and decode the access ACL of a file or directory.
pub async fn get_acl(path: impl AsRef<Path>) -> Result<AclRecord> {
    let info = classify(path.as_ref()).await?;

    let output = run_cmd(tool("mmgetacl"), [info.path.as_os_str()])
        .await
        .map_err(|e| map_tool_error(e, &info.path))?;

    AclRecord::decode(
        &output.stdout_text(),
        info.path.to_string_lossy(),
        info.kind,
        DecodeMode::Lenient,
    )
}

/// Fetch the default ACL that applies beneath a directory.
///
/// For a file the containing directory is queried; for a directory, the
/// directory itself. Same grammar as the access ACL, different invocation.
pub async fn get_default_acl(path: impl AsRef<Path>) -> Result<AclRecord> {
    let info = classify(path.as_ref()).await?;

    let target = match info.kind {
        EntryKind::Directory => info.path,
        _ => info
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(info.path),
    };

    let output = run_cmd(tool("mmgetacl"), [OsStr::new("-d"), target.as_os_str()])
        .await
        .map_err(|e| map_tool_error(e, &target))?;

    AclRecord::decode(
        &output.stdout_text(),
        target.to_string_lossy(),
        EntryKind::Directory,
        DecodeMode::Lenient,
    )
}

/// Default ACL of the parent of the given path.
pub async fn get_default_parent_acl(path: impl AsRef<Path>) -> Result<AclRecord> {
    let fqpn = absolutize(path.as_ref())?;
    let parent = fqpn
        .parent()
        .map(Path::to_path_buf)
        .ok_or(Error::PathNotFound { path: fqpn })?;

    get_default_acl(parent).await
}

/// Write an access ACL back through mmputacl.
pub async fn put_acl(path: impl AsRef<Path>, acl: &AclRecord, opts: &RunOptions) -> Result<()> {
    apply_acl(path, acl, opts, false).await
}

/// Write a directory's default ACL back through mmputacl.
pub async fn put_default_acl(
    path: impl AsRef<Path>,
    acl: &AclRecord,
    opts: &RunOptions,
) -> Result<()> {
    apply_acl(path, acl, opts, true).await
}

async fn apply_acl(
    path: impl AsRef<Path>,
    acl: &AclRecord,
    opts: &RunOptions,
    default_acl: bool,
) -> Result<()> {
    let info = classify(path.as_ref()).await?;
    let text = acl.encode();
    let flag = if default_acl { "-d " } else { "" };

    if opts.debug {
        log::debug!("Encoded ACL for {}:\n{}", info.path.display(), text);
    }

    if opts.dryrun {
        log::info!("dryrun: skipping mmputacl for {}", info.path.display());
        println!("mmputacl {}-i <aclfile> {}", flag, info.path.display());
        print!("{}", text);
        return Ok(());
    }

    // mmputacl reads the entries from a file passed with -i.
    let mut aclfile = tempfile::NamedTempFile::new()?;
    aclfile.write_all(text.as_bytes())?;
    aclfile.flush()?;

    let mut args: Vec<OsString> = Vec::new();
    if default_acl {
        args.push(OsString::from("-d"));
    }
    args.push(OsString::from("-i"));
    args.push(aclfile.path().as_os_str().to_os_string());
    args.push(info.path.clone().into_os_string());

    if opts.verbose {
        log::info!("Running mmputacl {}-i for {}", flag, info.path.display());
    }

    run_cmd(tool("mmputacl"), args)
        .await
        .map_err(|e| map_tool_error(e, &info.path))?;

    Ok(())
}

/// Permissions a group holds on a path.
///
/// A path that does not exist yields the `????` sentinel; any other failure
/// propagates typed.
pub async fn get_group_acl(path: impl AsRef<Path>, group: &str) -> Result<String> {
    match get_acl(path).await {
        Ok(acl) => Ok(group_perms(Some(&acl), group)),
        Err(Error::PathNotFound { .. }) => Ok(PERMS_UNKNOWN.to_string()),
        Err(e) => Err(e),
    }
}

/// Grant a group the given permissions on a path and write the ACL back.
pub async fn set_group_acl(
    path: impl AsRef<Path>,
    group: &str,
    perms: &str,
    opts: &RunOptions,
) -> Result<AclRecord> {
    let mut acl = get_acl(path.as_ref()).await?;
    acl.set_group(group, perms);
    put_acl(path, &acl, opts).await?;

    Ok(acl)
}

/// Stored mask of a path, `None` when the ACL carries no mask entry.
pub async fn get_mask(path: impl AsRef<Path>) -> Result<Option<String>> {
    Ok(get_acl(path).await?.mask)
}

/// Replace the mask entry on a path and write the ACL back.
pub async fn set_mask(
    path: impl AsRef<Path>,
    mask: &str,
    opts: &RunOptions,
) -> Result<AclRecord> {
    let mut acl = get_acl(path.as_ref()).await?;
    acl.set_mask(mask);
    put_acl(path, &acl, opts).await?;

    Ok(acl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_22_maps_to_not_managed() {
        let err = Error::CommandFailed {
            program: "mmgetacl".to_string(),
            code: 22,
            stderr: String::new(),
        };
        let mapped = map_tool_error(err, Path::new("/gpfs/scratch/file"));
        assert!(matches!(mapped, Error::NotManaged { ref path } if path == Path::new("/gpfs/scratch/file")));
    }

    #[test]
    fn other_exit_codes_stay_command_failures() {
        let err = Error::CommandFailed {
            program: "mmgetacl".to_string(),
            code: 1,
            stderr: "some failure".to_string(),
        };
        let mapped = map_tool_error(err, Path::new("/gpfs/scratch/file"));
        assert!(matches!(mapped, Error::CommandFailed { code: 1, .. }));
    }
}
