//! ACL operations behind the CLI subcommands.

use serde::{Deserialize, Serialize};

use scale::mmfs;
use scale::AclRecord;
pub use scale::RunOptions;
use utils::app_config::AppConfig;
use utils::error::{Error, Result};

/// Parameters for the `get` subcommand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowParams {
    /// File or directory to read
    pub path: String,

    /// Fetch the default ACL instead of the access ACL
    pub default_acl: bool,

    /// Emit the record as JSON
    pub json: bool,
}

/// Parameters for the `set-group` subcommand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetGroupParams {
    pub path: String,
    pub group: String,
    pub perms: String,
}

/// Effective invocation toggles: explicit CLI flags layered over the
/// `runtime.dryrun` configuration default.
pub fn run_options(dryrun: bool, verbose: bool, debug: bool) -> RunOptions {
    let config_dryrun = AppConfig::get::<bool>("runtime.dryrun").unwrap_or(false);

    RunOptions {
        dryrun: dryrun || config_dryrun,
        verbose,
        debug,
    }
}

/// Fetch and print an ACL record.
pub async fn show(params: ShowParams) -> Result<()> {
    log::debug!("Fetching ACL with params: {:?}", params);

    let fetched = if params.default_acl {
        mmfs::get_default_acl(&params.path).await
    } else {
        mmfs::get_acl(&params.path).await
    };
    let acl = fetched.map_err(|e| Error::with_source("Failed to read ACL", Box::new(e)))?;

    if params.json {
        let rendered = serde_json::to_string_pretty(&acl)
            .map_err(|e| Error::with_source("Failed to render ACL as JSON", Box::new(e)))?;
        println!("{}", rendered);
    } else {
        print_record(&acl);
    }

    Ok(())
}

/// Print the permissions a group holds on a path: the stored string, `----`
/// when the group has no entry, `????` when the path does not exist.
pub async fn check_group(path: &str, group: &str) -> Result<()> {
    let perms = mmfs::get_group_acl(path, group)
        .await
        .map_err(|e| Error::with_source("Failed to check group ACL", Box::new(e)))?;

    println!("{}", perms);

    Ok(())
}

/// Grant a group the given permissions and write the ACL back.
pub async fn set_group(params: SetGroupParams, opts: RunOptions) -> Result<()> {
    log::info!("Setting group ACL: {:?}", params);

    let acl = mmfs::set_group_acl(&params.path, &params.group, &params.perms, &opts)
        .await
        .map_err(|e| Error::with_source("Failed to set group ACL", Box::new(e)))?;

    if !opts.dryrun {
        println!("{}: group {} set to {}", acl.path, params.group, params.perms);
    }

    Ok(())
}

/// Replace the mask entry and write the ACL back.
pub async fn set_mask(path: &str, mask: &str, opts: RunOptions) -> Result<()> {
    log::info!("Setting mask on {} to {}", path, mask);

    let acl = mmfs::set_mask(path, mask, &opts)
        .await
        .map_err(|e| Error::with_source("Failed to set mask", Box::new(e)))?;

    if !opts.dryrun {
        println!("{}: mask set to {}", acl.path, mask);
    }

    Ok(())
}

/// mmgetacl-style rendering, effective permissions included. The mask line
/// appears only when the record actually carries one.
fn print_record(acl: &AclRecord) {
    println!("#owner:{}", acl.owner);
    println!("#group:{}", acl.group);
    println!("user::{}", acl.user_perms);
    println!("group::{}", acl.group_perms);
    println!("other::{}", acl.other_perms);
    if let Some(mask) = &acl.mask {
        println!("mask::{}", mask);
    }
    for (name, entry) in &acl.users {
        println!("user:{}:{}:+{}", name, entry.perms, entry.effective);
    }
    for (name, entry) in &acl.groups {
        println!("group:{}:{}:+{}", name, entry.perms, entry.effective);
    }
}
