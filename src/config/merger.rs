//! Merge rules for layered configuration.
//!
//! linux-wave layers a system file and a user file over the built-in
//! defaults. Two kinds of merge happen:
//!
//! # Field merge ([`merge_configs`])
//!
//! - Strings, integers and floats: the overlay wins unless it holds the
//!   zero value (`""`, `0`, `0.0`), which means "not set"
//! - Booleans: the overlay wins whenever it differs from the base. A
//!   boolean has no unset sentinel, so an overlay that repeats the base
//!   value cannot be told apart from one that omits the key
//!
//! # Document overlay ([`overlay_value`])
//!
//! Used when decoding a file over an existing configuration:
//!
//! - Mappings are merged recursively
//! - Null values in the overlay leave the base untouched
//! - Anything else in the overlay replaces the base

use crate::config::schema::{AudioSection, Config, LoggingSection, SecuritySection, ServiceSection};
use serde_yaml::Value;

/// Merge `overlay` over `base`, field by field.
///
/// Neither input is modified; a new configuration is returned.
pub fn merge_configs(base: &Config, overlay: &Config) -> Config {
    Config {
        service: merge_service(&base.service, &overlay.service),
        logging: merge_logging(&base.logging, &overlay.logging),
        audio: merge_audio(&base.audio, &overlay.audio),
        security: merge_security(&base.security, &overlay.security),
    }
}

/// Merge a sequence of overlays over `base` in order (later overrides earlier).
pub fn merge_all<'a, I>(base: &Config, overlays: I) -> Config
where
    I: IntoIterator<Item = &'a Config>,
{
    overlays
        .into_iter()
        .fold(base.clone(), |acc, overlay| merge_configs(&acc, overlay))
}

fn merge_service(base: &ServiceSection, overlay: &ServiceSection) -> ServiceSection {
    ServiceSection {
        timeout: pick(&base.timeout, &overlay.timeout),
        retry_attempts: pick(&base.retry_attempts, &overlay.retry_attempts),
        socket_path: pick(&base.socket_path, &overlay.socket_path),
    }
}

fn merge_logging(base: &LoggingSection, overlay: &LoggingSection) -> LoggingSection {
    LoggingSection {
        level: pick(&base.level, &overlay.level),
        format: pick(&base.format, &overlay.format),
    }
}

fn merge_audio(base: &AudioSection, overlay: &AudioSection) -> AudioSection {
    AudioSection {
        enabled: pick_flag(base.enabled, overlay.enabled),
        volume: pick(&base.volume, &overlay.volume),
        custom_sound_success: pick(&base.custom_sound_success, &overlay.custom_sound_success),
        custom_sound_failure: pick(&base.custom_sound_failure, &overlay.custom_sound_failure),
    }
}

fn merge_security(base: &SecuritySection, overlay: &SecuritySection) -> SecuritySection {
    SecuritySection {
        liveness_required: pick_flag(base.liveness_required, overlay.liveness_required),
        match_threshold: pick(&base.match_threshold, &overlay.match_threshold),
        max_auth_attempts: pick(&base.max_auth_attempts, &overlay.max_auth_attempts),
        lockout_duration: pick(&base.lockout_duration, &overlay.lockout_duration),
    }
}

/// Overlay wins unless it is the type's zero value.
fn pick<T>(base: &T, overlay: &T) -> T
where
    T: Clone + Default + PartialEq,
{
    if *overlay == T::default() {
        base.clone()
    } else {
        overlay.clone()
    }
}

/// Overlay wins whenever it differs from base.
fn pick_flag(base: bool, overlay: bool) -> bool {
    if overlay != base {
        overlay
    } else {
        base
    }
}

/// Lay a YAML document over a base document.
///
/// Mappings merge recursively; null overlay values keep the base value;
/// any other overlay value replaces the base.
pub fn overlay_value(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (_, Value::Null) => base.clone(),

        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value_at) in overlay_map {
                if overlay_value_at.is_null() {
                    continue;
                }
                let merged = match base_map.get(key) {
                    Some(base_value) => overlay_value(base_value, overlay_value_at),
                    None => overlay_value_at.clone(),
                };
                result.insert(key.clone(), merged);
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::default_config;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    fn zero() -> Config {
        Config::default()
    }

    #[test]
    fn zero_overlay_keeps_every_scalar() {
        let base = default_config();
        let mut overlay = zero();
        // Booleans follow their own rule; align them so only scalars are tested
        overlay.audio.enabled = base.audio.enabled;
        overlay.security.liveness_required = base.security.liveness_required;

        assert_eq!(merge_configs(&base, &overlay), base);
    }

    #[test]
    fn set_scalars_replace_base() {
        let base = default_config();
        let mut overlay = zero();
        overlay.service.timeout = 30;
        overlay.service.socket_path = "/run/wave.sock".to_string();
        overlay.logging.format = "json".to_string();
        overlay.audio.volume = 80;
        overlay.audio.custom_sound_failure = "/usr/share/sounds/fail.wav".to_string();
        overlay.security.match_threshold = 0.95;
        overlay.security.lockout_duration = 600;

        let merged = merge_configs(&base, &overlay);

        assert_eq!(merged.service.timeout, 30);
        assert_eq!(merged.service.socket_path, "/run/wave.sock");
        assert_eq!(merged.logging.format, "json");
        assert_eq!(merged.audio.volume, 80);
        assert_eq!(
            merged.audio.custom_sound_failure,
            "/usr/share/sounds/fail.wav"
        );
        assert_eq!(merged.security.match_threshold, 0.95);
        assert_eq!(merged.security.lockout_duration, 600);

        // untouched fields inherit
        assert_eq!(merged.service.retry_attempts, 3);
        assert_eq!(merged.logging.level, "INFO");
        assert!(merged.audio.custom_sound_success.is_empty());
        assert_eq!(merged.security.max_auth_attempts, 3);
    }

    #[test]
    fn zero_cannot_override_scalar() {
        let base = default_config();
        let mut overlay = zero();
        overlay.security.lockout_duration = 0;
        overlay.audio.volume = 0;

        let merged = merge_configs(&base, &overlay);

        assert_eq!(merged.security.lockout_duration, 300);
        assert_eq!(merged.audio.volume, 50);
    }

    #[test]
    fn zero_threshold_means_not_set() {
        let base = default_config();
        let mut overlay = zero();
        overlay.security.match_threshold = 0.0;

        assert_eq!(merge_configs(&base, &overlay).security.match_threshold, 0.85);
    }

    #[test]
    fn boolean_overlay_applies_when_different_from_base() {
        let base = default_config();
        let mut overlay = zero();
        overlay.audio.enabled = false;
        overlay.security.liveness_required = false;

        let merged = merge_configs(&base, &overlay);

        assert!(!merged.audio.enabled);
        assert!(!merged.security.liveness_required);
    }

    #[test]
    fn boolean_omitted_from_overlay_resets_true_base() {
        // An overlay decoded from a file that never mentions audio.enabled
        // carries false, which differs from the default true.
        let base = default_config();
        let merged = merge_configs(&base, &zero());

        assert!(!merged.audio.enabled);
        assert!(!merged.security.liveness_required);
    }

    #[test]
    fn boolean_true_overlay_enables_false_base() {
        let mut base = default_config();
        base.audio.enabled = false;
        let mut overlay = zero();
        overlay.audio.enabled = true;

        assert!(merge_configs(&base, &overlay).audio.enabled);
    }

    #[test]
    fn boolean_equal_to_base_is_indistinguishable_from_unset() {
        let mut base = default_config();
        base.security.liveness_required = false;

        let mut explicit = zero();
        explicit.security.liveness_required = false;
        let omitted = zero();

        assert_eq!(
            merge_configs(&base, &explicit).security.liveness_required,
            merge_configs(&base, &omitted).security.liveness_required
        );
    }

    #[test]
    fn merge_leaves_inputs_untouched() {
        let base = default_config();
        let mut overlay = zero();
        overlay.service.timeout = 59;

        let _ = merge_configs(&base, &overlay);

        assert_eq!(base, default_config());
        assert_eq!(overlay.service.timeout, 59);
    }

    #[test]
    fn merge_all_applies_in_order() {
        let base = default_config();
        let mut system = zero();
        system.service.timeout = 20;
        system.audio.volume = 70;
        system.audio.enabled = true;
        system.security.liveness_required = true;
        let mut user = zero();
        user.service.timeout = 25;
        user.audio.enabled = true;
        user.security.liveness_required = true;

        let merged = merge_all(&base, [&system, &user]);

        assert_eq!(merged.service.timeout, 25);
        assert_eq!(merged.audio.volume, 70);
    }

    #[test]
    fn merge_all_with_no_overlays_is_base() {
        let base = default_config();
        assert_eq!(merge_all(&base, []), base);
    }

    #[test]
    fn overlay_value_merges_nested_mappings() {
        let base = yaml("service:\n  timeout: 10\n  retry_attempts: 3");
        let overlay = yaml("service:\n  timeout: 20");

        let result = overlay_value(&base, &overlay);

        assert_eq!(result["service"]["timeout"], 20);
        assert_eq!(result["service"]["retry_attempts"], 3);
    }

    #[test]
    fn overlay_value_null_keeps_base() {
        let base = yaml("audio:\n  volume: 50");
        let overlay = yaml("audio:\n  volume: null");

        let result = overlay_value(&base, &overlay);
        assert_eq!(result["audio"]["volume"], 50);

        let result = overlay_value(&base, &yaml("audio:"));
        assert_eq!(result["audio"]["volume"], 50);
    }

    #[test]
    fn overlay_value_scalar_replaces_mapping() {
        let base = yaml("audio:\n  volume: 50");
        let overlay = yaml("audio: loud");

        let result = overlay_value(&base, &overlay);
        assert_eq!(result["audio"], "loud");
    }

    #[test]
    fn overlay_value_adds_new_keys() {
        let base = yaml("service:\n  timeout: 10");
        let overlay = yaml("logging:\n  level: DEBUG");

        let result = overlay_value(&base, &overlay);
        assert_eq!(result["service"]["timeout"], 10);
        assert_eq!(result["logging"]["level"], "DEBUG");
    }
}
