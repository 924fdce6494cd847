// src/config/validate.rs

use tracing::warn;

use crate::config::model::{ConfigFile, DirRule, RawConfigFile, RawDirRule};
use crate::engine::policy::PERM_BITS;

/// Filter a raw configuration down to its well-formed rules.
///
/// One bad entry is logged and dropped without affecting the rest; the
/// engine only ever sees validated rules.
pub fn validate_config(raw: RawConfigFile) -> ConfigFile {
    let mut dirs = Vec::with_capacity(raw.dirs.len());
    for rule in raw.dirs {
        match validate_rule(rule) {
            Ok(rule) => dirs.push(rule),
            Err(reason) => warn!("skipping malformed [[dir]] entry: {reason}"),
        }
    }
    ConfigFile { dirs }
}

fn validate_rule(rule: RawDirRule) -> std::result::Result<DirRule, String> {
    if rule.path.as_os_str().is_empty() {
        return Err("path must not be empty".to_string());
    }
    if rule.min > PERM_BITS {
        return Err(format!(
            "min mask {:#o} exceeds 0o777 for {:?}",
            rule.min, rule.path
        ));
    }
    if rule.max > PERM_BITS {
        return Err(format!(
            "max mask {:#o} exceeds 0o777 for {:?}",
            rule.max, rule.path
        ));
    }
    Ok(DirRule {
        path: rule.path,
        min_mask: rule.min,
        max_mask: rule.max,
    })
}
