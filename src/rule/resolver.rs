use log::trace;

use crate::errors::{Result, unsupported_rule_type_error};
use crate::item::FileItem;
use crate::path::PathParts;

use super::RenameRule;

/// Computes the new relative path of an item
///
/// Function rules run on a working copy of `parts`: replacement parts they
/// return win over whatever they edited, otherwise the edited copy is used.
///
/// # Errors
/// Returns the unsupported rule type error for an empty literal path
pub fn resolve_rule(rule: &RenameRule, parts: &PathParts, item: &FileItem) -> Result<String> {
    match rule {
        RenameRule::Literal(path) if !path.is_empty() => Ok(path.clone()),
        RenameRule::Literal(_) => Err(unsupported_rule_type_error()),
        RenameRule::Function(func) => {
            let mut working = parts.clone();
            let resolved = match func(&mut working, item) {
                Some(replacement) => {
                    trace!("Rule function returned replacement parts {replacement:?}");
                    replacement
                }
                None => working,
            };
            Ok(resolved.to_relative())
        }
        RenameRule::Descriptor(descriptor) => Ok(descriptor.merge(parts).to_relative()),
    }
}
