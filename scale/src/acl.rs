//! Translation between the mmgetacl/mmputacl text format and `AclRecord`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Returned when no ACL record could be obtained for a path.
pub const PERMS_UNKNOWN: &str = "????";
/// Returned when a record carries no entry for the requested group.
pub const PERMS_NONE: &str = "----";
/// Mask written on encode when a record carries none. Full permissions, so
/// named entries keep their effective permissions under mask intersection.
pub const DEFAULT_MASK: &str = "rwxc";

/// Filesystem object type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
    Unknown,
}

impl EntryKind {
    pub fn as_char(&self) -> char {
        match self {
            EntryKind::File => 'f',
            EntryKind::Directory => 'd',
            EntryKind::Unknown => 'u',
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Decode policy for unrecognized lines. `Lenient` matches the observed
/// mmgetacl handling and silently skips them; `Strict` fails on the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    #[default]
    Lenient,
    Strict,
}

/// One named `user:` or `group:` line: the requested permissions and the
/// effective permissions after mask intersection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntry {
    pub perms: String,
    pub effective: String,
}

impl NamedEntry {
    /// The permission field is the first 4 characters; the effective field
    /// drops one leading delimiter character (mmgetacl prints `+rwxc`) and
    /// takes the next 4. Fixed-width vendor format, reproduced exactly.
    fn from_fields(perms: &str, effective: &str) -> Self {
        NamedEntry {
            perms: perms.chars().take(4).collect(),
            effective: effective.chars().skip(1).take(4).collect(),
        }
    }
}

/// One file or directory's access control state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclRecord {
    /// Absolute path the record was read from
    pub path: String,
    /// Filesystem object type
    pub kind: EntryKind,
    /// Owning user name
    pub owner: String,
    /// Owning group name
    pub group: String,
    /// Unnamed `user::` entry
    pub user_perms: String,
    /// Unnamed `group::` entry
    pub group_perms: String,
    /// `other::` entry
    pub other_perms: String,
    /// `Some` only when the source text carried a `mask::` line
    pub mask: Option<String>,
    /// Named `user:NAME:` entries, in source order
    pub users: IndexMap<String, NamedEntry>,
    /// Named `group:NAME:` entries, in source order
    pub groups: IndexMap<String, NamedEntry>,
}

impl AclRecord {
    pub fn new(path: impl Into<String>, kind: EntryKind) -> Self {
        AclRecord {
            path: path.into(),
            kind,
            owner: String::new(),
            group: String::new(),
            user_perms: String::new(),
            group_perms: String::new(),
            other_perms: String::new(),
            mask: None,
            users: IndexMap::new(),
            groups: IndexMap::new(),
        }
    }

    /// Parse mmgetacl output into a record. Line order does not matter; each
    /// recognized line populates its own field, and a duplicate named line
    /// overwrites the earlier entry (last write wins).
    pub fn decode(
        text: &str,
        path: impl Into<String>,
        kind: EntryKind,
        mode: DecodeMode,
    ) -> Result<Self> {
        let mut acl = AclRecord::new(path, kind);

        for raw in text.lines() {
            let line = raw.trim_end();
            if line.is_empty() {
                continue;
            }
            acl.apply_line(line, mode)?;
        }

        Ok(acl)
    }

    fn apply_line(&mut self, line: &str, mode: DecodeMode) -> Result<()> {
        let fields: Vec<&str> = line.split(':').collect();

        match fields[0] {
            "#owner" if fields.len() >= 2 => self.owner = fields[1].to_string(),
            "#group" if fields.len() >= 2 => self.group = fields[1].to_string(),
            "user" if fields.len() >= 3 => {
                if fields[1].is_empty() {
                    self.user_perms = fields[2].to_string();
                } else {
                    let entry =
                        NamedEntry::from_fields(fields[2], fields.get(3).copied().unwrap_or(""));
                    self.users.insert(fields[1].to_string(), entry);
                }
            }
            "group" if fields.len() >= 3 => {
                if fields[1].is_empty() {
                    self.group_perms = fields[2].to_string();
                } else {
                    let entry =
                        NamedEntry::from_fields(fields[2], fields.get(3).copied().unwrap_or(""));
                    self.groups.insert(fields[1].to_string(), entry);
                }
            }
            "other" if fields.len() >= 3 && fields[1].is_empty() => {
                self.other_perms = fields[2].to_string();
            }
            "mask" if fields.len() >= 3 && fields[1].is_empty() => {
                self.mask = Some(fields[2].to_string());
            }
            _ => {
                if mode == DecodeMode::Strict {
                    return Err(Error::MalformedAcl {
                        line: line.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Render the record in the form mmputacl expects: the unnamed entries
    /// in user/group/other order, the mask, then the named entries in map
    /// insertion order. Effective permissions are never written back; the
    /// vendor tool derives them from the mask. A record without a stored
    /// mask gets [`DEFAULT_MASK`].
    ///
    /// Round trips are not guaranteed byte-identical unless the caller
    /// preserves the named-entry insertion order of the decoded source.
    pub fn encode_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(4 + self.users.len() + self.groups.len());

        lines.push(format!("user::{}", self.user_perms));
        lines.push(format!("group::{}", self.group_perms));
        lines.push(format!("other::{}", self.other_perms));
        lines.push(format!(
            "mask::{}",
            self.mask.as_deref().unwrap_or(DEFAULT_MASK)
        ));

        for (name, entry) in &self.users {
            lines.push(format!("user:{}:{}", name, entry.perms));
        }
        for (name, entry) in &self.groups {
            lines.push(format!("group:{}:{}", name, entry.perms));
        }

        lines
    }

    pub fn encode(&self) -> String {
        let mut text = self.encode_lines().join("\n");
        text.push('\n');
        text
    }

    /// Upsert a named group entry. The effective field is left empty; it is
    /// never written back and the vendor tool recomputes it.
    pub fn set_group(&mut self, name: impl Into<String>, perms: impl Into<String>) {
        self.groups.insert(
            name.into(),
            NamedEntry {
                perms: perms.into(),
                effective: String::new(),
            },
        );
    }

    /// Upsert a named user entry.
    pub fn set_user(&mut self, name: impl Into<String>, perms: impl Into<String>) {
        self.users.insert(
            name.into(),
            NamedEntry {
                perms: perms.into(),
                effective: String::new(),
            },
        );
    }

    pub fn set_mask(&mut self, mask: impl Into<String>) {
        self.mask = Some(mask.into());
    }
}

/// Permissions a group holds according to a decoded record.
///
/// Three distinct results: `????` when no record could be obtained (the path
/// does not exist), `----` when the record has no entry for the group, and
/// the stored 4-character permission string otherwise.
pub fn group_perms(acl: Option<&AclRecord>, group: &str) -> String {
    match acl {
        None => PERMS_UNKNOWN.to_string(),
        Some(record) => record
            .groups
            .get(group)
            .map(|entry| entry.perms.clone())
            .unwrap_or_else(|| PERMS_NONE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_entry_slicing_drops_effective_delimiter() {
        let entry = NamedEntry::from_fields("rwxc", "+rw-c");
        assert_eq!(entry.perms, "rwxc");
        assert_eq!(entry.effective, "rw-c");
    }

    #[test]
    fn named_entry_slicing_truncates_long_fields() {
        let entry = NamedEntry::from_fields("rwxcextra", "+rw-cextra");
        assert_eq!(entry.perms, "rwxc");
        assert_eq!(entry.effective, "rw-c");
    }

    #[test]
    fn named_entry_slicing_tolerates_short_fields() {
        let entry = NamedEntry::from_fields("rw", "");
        assert_eq!(entry.perms, "rw");
        assert_eq!(entry.effective, "");
    }

    #[test]
    fn entry_kind_chars() {
        assert_eq!(EntryKind::File.to_string(), "f");
        assert_eq!(EntryKind::Directory.to_string(), "d");
        assert_eq!(EntryKind::Unknown.to_string(), "u");
    }
}
