//! Layering of config files.
//!
//! Mappings merge key by key, so `config.local.yml` can override a single
//! nested parameter. Anything else, sequences included, is replaced by the
//! later layer. A `null` in a later layer removes the key.
//!
//! Design-level parameter merging is shallow and lives in
//! [`crate::registry::merge`]; this module only handles config files.

use serde_yaml::{Mapping, Value};

/// Merge `overlay` into `base` in place.
pub fn merge_into(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(target), Value::Mapping(layer)) => merge_mapping(target, layer),
        (slot, replacement) => *slot = replacement,
    }
}

fn merge_mapping(target: &mut Mapping, layer: Mapping) {
    for (key, value) in layer {
        if value.is_null() {
            target.remove(&key);
            continue;
        }
        match target.get_mut(&key) {
            Some(existing) => merge_into(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}

/// Merge two values without consuming them.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let mut merged = base.clone();
    merge_into(&mut merged, overlay.clone());
    merged
}

/// Merge config layers in order; later layers win.
///
/// No layers yield an empty mapping.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Mapping::new()), |mut merged, layer| {
            merge_into(&mut merged, layer.clone());
            merged
        })
}
