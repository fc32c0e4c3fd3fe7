use std::env;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use drobe_cli::commands::{config, generate, insights, seed, suggest, wear};
use drobe_core::Season;
use serde_json::Value;

// Config loading is environment-sensitive, so every test runs inside an env
// island guarded by a process-wide lock.
fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn with_env<T>(pairs: &[(&str, &str)], body: impl FnOnce() -> T) -> T {
    let _guard = env_lock().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    for (key, value) in pairs {
        env::set_var(key, value);
    }
    let result = body();
    for (key, _) in pairs {
        env::remove_var(key);
    }
    result
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn seeded_wardrobe(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("wardrobe.json");
    let result = seed::run(&path);
    assert_eq!(result.exit_code, 0, "seed should succeed: {}", result.output);
    path
}

#[test]
fn seed_writes_a_loadable_snapshot() {
    with_env(&[], || {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("wardrobe.json");

        let result = seed::run(&path);
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "seed");
        assert_eq!(payload["status"], "ok");
        let message = payload["message"].as_str().unwrap_or("");
        assert!(message.contains("  - weekend-uniform: 6 recent wear logs (frequently worn)"));
        assert!(message.contains("  - office-staple: last worn 45 days ago (rarely worn)"));

        let raw = std::fs::read_to_string(&path).expect("snapshot file");
        let snapshot: Value = serde_json::from_str(&raw).expect("snapshot JSON");
        assert!(snapshot["items"].as_array().is_some_and(|items| !items.is_empty()));
        assert_eq!(snapshot["outfits"].as_array().map(Vec::len), Some(3));
    });
}

#[test]
fn generate_produces_a_full_batch_from_the_demo_wardrobe() {
    with_env(&[], || {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = seeded_wardrobe(&dir);

        let result =
            generate::run(&path, Some(Season::Summer), Some(25.0), Some("sunny"), None, Some(42));
        assert_eq!(result.exit_code, 0, "generate should succeed: {}", result.output);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "generate");
        assert_eq!(payload["status"], "ok");

        let outfits = payload["data"].as_array().expect("generated outfit array");
        assert_eq!(outfits.len(), 3);
        for outfit in outfits {
            let members = outfit["items"].as_array().expect("outfit items");
            assert!(members.len() >= 3);
            assert_eq!(outfit["seasons"], serde_json::json!(["summer"]));
        }
    });
}

#[test]
fn generate_is_reproducible_with_a_fixed_rng_seed() {
    with_env(&[], || {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = seeded_wardrobe(&dir);

        let first =
            generate::run(&path, Some(Season::Winter), Some(3.0), Some("snow"), None, Some(7));
        let second =
            generate::run(&path, Some(Season::Winter), Some(3.0), Some("snow"), None, Some(7));

        // `date_added` tracks the wall clock, so compare the member picks.
        let member_ids = |output: &str| -> Vec<Value> {
            parse_payload(output)["data"]
                .as_array()
                .expect("generated outfit array")
                .iter()
                .map(|outfit| outfit["items"].clone())
                .collect()
        };
        assert_eq!(member_ids(&first.output), member_ids(&second.output));
    });
}

#[test]
fn generate_fails_cleanly_on_a_missing_snapshot() {
    with_env(&[], || {
        let result = generate::run(
            std::path::Path::new("/nonexistent/wardrobe.json"),
            None,
            None,
            None,
            None,
            None,
        );
        assert_eq!(result.exit_code, 3);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "snapshot");
    });
}

#[test]
fn generate_rejects_invalid_config_from_env() {
    with_env(&[("DROBE_GENERATOR_ACCESSORY_PROBABILITY", "2.0")], || {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = seeded_wardrobe(&dir);

        let result = generate::run(&path, None, None, None, None, None);
        assert_eq!(result.exit_code, 2);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "config_validation");
    });
}

#[test]
fn insights_reports_metrics_for_the_demo_wardrobe() {
    with_env(&[], || {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = seeded_wardrobe(&dir);

        let result = insights::run(&path);
        assert_eq!(result.exit_code, 0, "insights should succeed: {}", result.output);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "ok");
        let data = &payload["data"];
        assert!(data["unworn_percentage"].is_u64());
        assert!(data["most_worn_item"]["id"].is_string());
        assert!(data["low_usage_items"].is_u64());
    });
}

#[test]
fn insights_on_an_empty_wardrobe_is_an_explicit_error() {
    with_env(&[], || {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "{}").expect("write empty snapshot");

        let result = insights::run(&path);
        assert_eq!(result.exit_code, 4);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "empty_wardrobe");
    });
}

#[test]
fn wear_classification_flags_the_demo_staples() {
    with_env(&[], || {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = seeded_wardrobe(&dir);

        let result = wear::run(&path);
        assert_eq!(result.exit_code, 0, "wear should succeed: {}", result.output);

        let payload = parse_payload(&result.output);
        let rarely: Vec<&str> = payload["data"]["rarely_worn"]
            .as_array()
            .expect("rarely worn array")
            .iter()
            .filter_map(|outfit| outfit["id"].as_str())
            .collect();
        assert!(rarely.contains(&"office-staple"));
        assert!(rarely.contains(&"summer-stroll"));
        assert!(!rarely.contains(&"weekend-uniform"));

        let frequent = payload["data"]["frequently_worn"].as_array().expect("frequently worn");
        assert_eq!(frequent.len(), 1);
        assert_eq!(frequent[0]["id"], "weekend-uniform");
        assert_eq!(frequent[0]["times_worn"], 6);
    });
}

#[test]
fn suggest_never_resurfaces_recently_worn_outfits() {
    with_env(&[], || {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = seeded_wardrobe(&dir);

        let result = suggest::run(&path, None);
        assert_eq!(result.exit_code, 0, "suggest should succeed: {}", result.output);

        let payload = parse_payload(&result.output);
        let suggestions = payload["data"].as_array().expect("suggestion array");
        assert!(suggestions.len() <= 5);
        // The recently-and-often-worn staple never comes back as a
        // suggestion, whatever today's season is.
        assert!(suggestions.iter().all(|outfit| outfit["id"] != "weekend-uniform"));
    });
}

#[test]
fn config_reports_effective_values_with_env_overrides() {
    with_env(&[("DROBE_GENERATOR_BATCH_SIZE", "4")], || {
        let result = config::run();
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["data"]["generator"]["batch_size"], 4);
        assert_eq!(payload["data"]["analytics"]["frequently_worn_threshold"], 5);
    });
}

#[test]
fn config_defaults_match_shipped_behavior() {
    with_env(&[], || {
        let result = config::run();
        let payload = parse_payload(&result.output);
        assert_eq!(payload["data"]["generator"]["batch_size"], 3);
        assert_eq!(payload["data"]["generator"]["accessory_probability"], 0.3);
        assert_eq!(payload["data"]["analytics"]["rarely_worn_after_days"], 30);
    });
}
