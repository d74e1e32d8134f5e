use scale::{get_acl, get_group_acl, put_acl, AclRecord, EntryKind, Error, RunOptions};
use tempfile::TempDir;

#[tokio::test]
async fn get_acl_missing_path_is_path_not_found() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");

    let result = get_acl(&missing).await;

    assert!(matches!(result, Err(Error::PathNotFound { .. })));
}

#[tokio::test]
async fn get_group_acl_missing_path_yields_unknown_sentinel() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");

    let perms = get_group_acl(&missing, "staff").await.unwrap();

    assert_eq!(perms, "????");
}

#[tokio::test]
async fn put_acl_dryrun_skips_the_vendor_tool() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("file");
    std::fs::write(&target, b"x").unwrap();

    let mut acl = AclRecord::new(target.to_string_lossy(), EntryKind::File);
    acl.user_perms = "rwxc".to_string();
    acl.group_perms = "r-xc".to_string();
    acl.other_perms = "---c".to_string();
    acl.set_group("staff", "rw--");

    let opts = RunOptions {
        dryrun: true,
        ..RunOptions::default()
    };

    // Succeeds without any mmputacl binary present.
    put_acl(&target, &acl, &opts).await.unwrap();
}

#[tokio::test]
async fn put_acl_dryrun_missing_target_still_classifies() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");

    let acl = AclRecord::new(missing.to_string_lossy(), EntryKind::File);
    let opts = RunOptions {
        dryrun: true,
        ..RunOptions::default()
    };

    let result = put_acl(&missing, &acl, &opts).await;

    assert!(matches!(result, Err(Error::PathNotFound { .. })));
}
