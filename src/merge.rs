//! Deep merge engine
//!
//! Combines two JSON documents into a fresh value:
//! - Objects: union of keys; keys present in both recurse when they hold
//!   containers, and the base scalar wins otherwise
//! - Arrays: base elements followed by overlay elements (duplicates kept)
//! - Scalars: cannot be merged directly
//!
//! Any kind mismatch below the top level aborts the whole merge; no partial
//! result is ever returned. Inputs are borrowed and never modified.

use crate::error::MergeError;
use crate::kind::JsonKind;
use serde_json::{Map, Value};

const ROOT: &str = "/";

/// Merge `overlay` into a copy of `base`.
pub fn merge(base: &Value, overlay: &Value) -> Result<Value, MergeError> {
    merge_at(ROOT, base, overlay)
}

/// Fold a sequence of documents, the first acting as the initial base.
///
/// Returns `Ok(None)` for an empty sequence and stops at the first error.
pub fn merge_all<'a, I>(docs: I) -> Result<Option<Value>, MergeError>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut acc: Option<Value> = None;
    for doc in docs {
        acc = Some(match acc {
            None => doc.clone(),
            Some(base) => merge(&base, doc)?,
        });
    }
    Ok(acc)
}

fn merge_at(path: &str, base: &Value, overlay: &Value) -> Result<Value, MergeError> {
    let base_kind = JsonKind::of(base);
    let overlay_kind = JsonKind::of(overlay);
    if base_kind != overlay_kind {
        return Err(MergeError::TypeMismatch {
            path: path.to_string(),
            base: base_kind,
            overlay: overlay_kind,
        });
    }

    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            merge_objects(path, base_map, overlay_map).map(Value::Object)
        }
        (Value::Array(base_items), Value::Array(overlay_items)) => {
            let mut items = Vec::with_capacity(base_items.len() + overlay_items.len());
            items.extend(base_items.iter().cloned());
            items.extend(overlay_items.iter().cloned());
            Ok(Value::Array(items))
        }
        _ => Err(MergeError::UnsupportedType {
            path: path.to_string(),
            kind: base_kind,
        }),
    }
}

fn merge_objects(
    path: &str,
    base: &Map<String, Value>,
    overlay: &Map<String, Value>,
) -> Result<Map<String, Value>, MergeError> {
    let mut result = base.clone();

    for (key, overlay_value) in overlay {
        let Some(base_value) = base.get(key) else {
            result.insert(key.clone(), overlay_value.clone());
            continue;
        };

        let base_kind = JsonKind::of(base_value);
        let overlay_kind = JsonKind::of(overlay_value);
        let child = child_path(path, key);
        if base_kind != overlay_kind {
            return Err(MergeError::TypeMismatch {
                path: child,
                base: base_kind,
                overlay: overlay_kind,
            });
        }

        if base_kind.is_container() {
            let merged = merge_at(&child, base_value, overlay_value)?;
            result.insert(key.clone(), merged);
        }
        // Same-kind scalars: base keeps its value.
    }

    Ok(result)
}

/// JSON Pointer style location of `key` under `parent`.
fn child_path(parent: &str, key: &str) -> String {
    let escaped = key.replace('~', "~0").replace('/', "~1");
    if parent == ROOT {
        format!("/{}", escaped)
    } else {
        format!("{}/{}", parent, escaped)
    }
}
