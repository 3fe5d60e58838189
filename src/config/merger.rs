//! Deep merge algorithm for YAML configuration values.
//!
//! Configuration is layered: the user-global file first, then the project
//! file, then local overrides.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely
//! - Null values in overlay delete the corresponding key from base
//! - Scalars in overlay replace scalars in base

use serde_yaml::Value;

/// Deep merge two YAML values.
///
/// `overlay` takes precedence at every point of conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge multiple configs in order (later overrides earlier).
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn overlay_command_keeps_base_env() {
        let base = yaml(
            r#"
checkers:
  framework:
    command: ./deps.sh
    env:
      LEVEL: "1"
"#,
        );
        let overlay = yaml(
            r#"
checkers:
  framework:
    command: ./deps.sh --strict
"#,
        );

        let result = deep_merge(&base, &overlay);

        assert_eq!(
            result["checkers"]["framework"]["command"],
            "./deps.sh --strict"
        );
        assert_eq!(result["checkers"]["framework"]["env"]["LEVEL"], "1");
    }

    #[test]
    fn sequences_are_replaced_not_merged() {
        let base = yaml("nodes:\n  - a\n  - b\n");
        let overlay = yaml("nodes:\n  - c\n");

        let result = deep_merge(&base, &overlay);
        let nodes = result["nodes"].as_sequence().unwrap();

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0], "c");
    }

    #[test]
    fn null_removes_inherited_value() {
        let base = yaml(
            r#"
settings:
  working_dir: tests
  default_output: quiet
"#,
        );
        let overlay = yaml("settings:\n  working_dir: null\n");

        let result = deep_merge(&base, &overlay);

        assert!(result["settings"].get("working_dir").is_none());
        assert_eq!(result["settings"]["default_output"], "quiet");
    }

    #[test]
    fn scalar_overlay_replaces_mapping_base() {
        let base = yaml("settings:\n  working_dir: tests\n");
        let overlay = yaml("settings: plain\n");

        let result = deep_merge(&base, &overlay);

        assert_eq!(result["settings"], "plain");
    }

    #[test]
    fn merge_configs_merges_multiple_in_order() {
        let configs = vec![
            yaml("settings:\n  default_output: verbose\n"),
            yaml("settings:\n  default_output: quiet\n"),
            yaml("settings:\n  working_dir: tests\n"),
        ];

        let result = merge_configs(&configs);

        assert_eq!(result["settings"]["default_output"], "quiet");
        assert_eq!(result["settings"]["working_dir"], "tests");
    }

    #[test]
    fn merge_empty_configs_returns_empty() {
        let result = merge_configs(&[]);
        assert!(result.as_mapping().unwrap().is_empty());
    }
}
