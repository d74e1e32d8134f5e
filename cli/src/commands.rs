use app::acl::{self, SetGroupParams, ShowParams};

pub async fn get_cmd(path: String, default_acl: bool, json: bool) -> utils::error::Result<()> {
    acl::show(ShowParams {
        path,
        default_acl,
        json,
    })
    .await
}

pub async fn check_group_cmd(path: String, group: String) -> utils::error::Result<()> {
    acl::check_group(&path, &group).await
}

pub async fn set_group_cmd(
    path: String, group: String, perms: String, dry_run: bool, verbose: bool, debug: bool,
) -> utils::error::Result<()> {
    let opts = acl::run_options(dry_run, verbose, debug);

    acl::set_group(SetGroupParams { path, group, perms }, opts).await
}

pub async fn set_mask_cmd(
    path: String, mask: String, dry_run: bool, verbose: bool, debug: bool,
) -> utils::error::Result<()> {
    let opts = acl::run_options(dry_run, verbose, debug);

    acl::set_mask(&path, &mask, opts).await
}
