//! End-to-end resolution tests.
//!
//! Every test resolves through [`ConfigBuilder`] with an explicit argument
//! list, an environment snapshot and a sandboxed platform, so they run in
//! parallel without touching the process environment.

mod common;

use common::{create_temp_dir, resolve, resolve_with, Sandbox};
use headlamp_config::config::Setting;
use headlamp_config::Error;

// ============================================================================
// Precedence
// ============================================================================

#[test]
fn test_flag_false_beats_env_true() {
    let (config, _root) = resolve(&["--dev=false"], &[("HEADLAMP_CONFIG_DEV", "true")]);
    assert!(!config.unwrap().dev_mode);
}

#[test]
fn test_flag_true_beats_env_false_for_every_bool() {
    let bools = [
        "in-cluster",
        "dev",
        "insecure-ssl",
        "enable-helm",
        "enable-dynamic-clusters",
        "oidc-use-access-token",
        "metrics-enabled",
    ];
    for name in bools {
        let env_var = format!("HEADLAMP_CONFIG_{}", name.to_uppercase().replace('-', "_"));
        let flag = format!("--{name}");
        let (config, _root) = resolve(&[flag.as_str()], &[(env_var.as_str(), "false")]);
        let config = config.unwrap();
        let value = match name {
            "in-cluster" => config.in_cluster,
            "dev" => config.dev_mode,
            "insecure-ssl" => config.insecure_ssl,
            "enable-helm" => config.enable_helm,
            "enable-dynamic-clusters" => config.enable_dynamic_clusters,
            "oidc-use-access-token" => config.oidc.use_access_token,
            "metrics-enabled" => config.telemetry.metrics_enabled == Some(true),
            _ => unreachable!(),
        };
        assert!(value, "--{name} lost to the environment");
    }
}

#[test]
fn test_env_beats_default() {
    let (config, _root) = resolve(&[], &[("HEADLAMP_CONFIG_PORT", "9000")]);
    assert_eq!(config.unwrap().port, 9000);
}

#[test]
fn test_unrelated_flag_does_not_hide_env() {
    let (config, _root) = resolve(
        &["--dev"],
        &[
            ("HEADLAMP_CONFIG_PORT", "9000"),
            ("HEADLAMP_CONFIG_OIDC_SCOPES", "openid"),
        ],
    );
    let config = config.unwrap();
    assert_eq!(config.port, 9000);
    assert_eq!(config.oidc.scopes, vec!["openid"]);
}

#[test]
fn test_unknown_env_keys_ignored() {
    let (config, _root) = resolve(&[], &[("HEADLAMP_CONFIG_NOT_A_REAL_OPTION", "x")]);
    assert!(config.is_ok());
}

#[test]
fn test_idempotent() {
    let root = create_temp_dir();
    let sandbox = Sandbox::new(&root);
    let args = ["--port=1234", "--proxy-urls=https://a.example,https://b.example"];
    let env = [("HEADLAMP_CONFIG_BASE_URL", "/hl"), ("KUBECONFIG", "/tmp/kc")];

    let first = resolve_with(&sandbox, &args, &env).unwrap();
    let second = resolve_with(&sandbox, &args, &env).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Cluster-mode plugin watch
// ============================================================================

#[test]
fn test_watch_defaults_on_outside_cluster() {
    let (config, _root) = resolve(&[], &[]);
    let config = config.unwrap();
    assert!(config.should_watch_plugins());
    assert!(!config.watch_plugins_changes.is_explicit());
}

#[test]
fn test_in_cluster_watch_defaults_off() {
    let (config, _root) = resolve(&["--in-cluster=true"], &[]);
    assert_eq!(
        config.unwrap().watch_plugins_changes,
        Setting::Default(false)
    );
}

#[test]
fn test_in_cluster_explicit_watch_kept() {
    let (config, _root) = resolve(&["--in-cluster=true", "--watch-plugins-changes=true"], &[]);
    assert_eq!(config.unwrap().watch_plugins_changes, Setting::Explicit(true));
}

#[test]
fn test_in_cluster_from_env_still_overrides_watch() {
    let (config, _root) = resolve(
        &[],
        &[
            ("HEADLAMP_CONFIG_IN_CLUSTER", "true"),
            ("HEADLAMP_CONFIG_WATCH_PLUGINS_CHANGES", "true"),
        ],
    );
    assert!(!config.unwrap().should_watch_plugins());
}

// ============================================================================
// Validation
// ============================================================================

fn validation_field(args: &[&str]) -> String {
    let (result, _root) = resolve(args, &[]);
    match result {
        Err(Error::Validation { field, .. }) => field,
        other => panic!("expected validation error for {args:?}, got {other:?}"),
    }
}

#[test]
fn test_oidc_requires_cluster_mode() {
    assert_eq!(
        validation_field(&["--in-cluster=false", "--oidc-client-id=x"]),
        "oidc"
    );
    let (config, _root) = resolve(&["--in-cluster=true", "--oidc-client-id=x"], &[]);
    assert_eq!(config.unwrap().oidc.client_id, "x");
}

#[test]
fn test_base_url_rules() {
    assert_eq!(validation_field(&["--base-url=headlamp"]), "base-url");

    let (config, _root) = resolve(&["--base-url=/headlamp"], &[]);
    assert_eq!(config.unwrap().base_url, "/headlamp");

    let (config, _root) = resolve(&["--base-url="], &[]);
    assert_eq!(config.unwrap().base_url, "");
}

#[test]
fn test_tracing_requires_service_name() {
    assert_eq!(
        validation_field(&["--tracing-enabled=true", "--service-name="]),
        "service-name"
    );
}

#[test]
fn test_tracing_otlp_http_requires_endpoint() {
    assert_eq!(
        validation_field(&[
            "--tracing-enabled=true",
            "--service-name=foo",
            "--use-otlp-http=true",
            "--otlp-endpoint=",
            "--stdout-trace-enabled",
        ]),
        "otlp-endpoint"
    );

    let (result, _root) = resolve(
        &[
            "--tracing-enabled=true",
            "--service-name=foo",
            "--use-otlp-http=true",
            "--otlp-endpoint=",
        ],
        &[],
    );
    assert!(matches!(result, Err(Error::Validation { .. })));

    let (config, _root) = resolve(
        &[
            "--tracing-enabled=true",
            "--service-name=foo",
            "--use-otlp-http=true",
            "--otlp-endpoint=collector:4318",
        ],
        &[],
    );
    let config = config.unwrap();
    assert_eq!(
        config.telemetry.otlp_endpoint.as_deref(),
        Some("collector:4318")
    );
}

#[test]
fn test_tracing_requires_an_exporter() {
    assert_eq!(
        validation_field(&["--tracing-enabled", "--otlp-endpoint="]),
        "tracing-exporter"
    );

    let (config, _root) = resolve(
        &[
            "--tracing-enabled",
            "--otlp-endpoint=",
            "--jaeger-endpoint=http://jaeger:14268",
        ],
        &[],
    );
    assert!(config.is_ok());
}

// ============================================================================
// Parse and decode failures
// ============================================================================

#[test]
fn test_single_dash_flags() {
    let (config, _root) = resolve(&["-in-cluster", "-port", "9000"], &[]);
    let config = config.unwrap();
    assert!(config.in_cluster);
    assert_eq!(config.port, 9000);
    assert!(!config.should_watch_plugins());
}

#[test]
fn test_single_dash_flag_beats_env() {
    let (config, _root) = resolve(&["-dev=false"], &[("HEADLAMP_CONFIG_DEV", "true")]);
    assert!(!config.unwrap().dev_mode);
}

#[test]
fn test_unknown_flag() {
    let (result, _root) = resolve(&["--no-such-flag"], &[]);
    match result {
        Err(Error::Parse { token, .. }) => assert!(token.contains("--no-such-flag")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_bad_env_port() {
    let (result, _root) = resolve(&[], &[("HEADLAMP_CONFIG_PORT", "abc")]);
    match result {
        Err(Error::Decode { key, value, .. }) => {
            assert_eq!(key, "port");
            assert_eq!(value, "abc");
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn test_help_is_not_a_config() {
    let (result, _root) = resolve(&["--help"], &[]);
    assert!(matches!(result, Err(Error::HelpRequested { .. })));
}

// ============================================================================
// Kubeconfig derivation
// ============================================================================

#[test]
fn test_kubeconfig_from_env() {
    let (config, _root) = resolve(&["--in-cluster=false"], &[("KUBECONFIG", "/tmp/kc")]);
    assert_eq!(
        config.unwrap().kubeconfig,
        Setting::Default("/tmp/kc".to_string())
    );
}

#[test]
fn test_kubeconfig_home_default() {
    let root = create_temp_dir();
    let config = resolve_with(&Sandbox::new(&root), &[], &[]).unwrap();
    assert_eq!(
        config.kubeconfig_path(),
        Some(root.path().join("home").join(".kube").join("config").as_path())
    );
}

#[test]
fn test_kubeconfig_flag_beats_env() {
    let (config, _root) = resolve(&["--kubeconfig=/etc/kc"], &[("KUBECONFIG", "/tmp/kc")]);
    assert_eq!(
        config.unwrap().kubeconfig,
        Setting::Explicit("/etc/kc".to_string())
    );
}

#[test]
fn test_kubeconfig_missing_home() {
    let root = create_temp_dir();
    let sandbox = Sandbox::new(&root).without_home_dir();
    let result = resolve_with(&sandbox, &[], &[]);
    assert!(matches!(result, Err(Error::PathResolution { .. })));

    // cluster mode never needs it
    let config = resolve_with(&sandbox, &["--in-cluster"], &[]).unwrap();
    assert_eq!(config.kubeconfig_path(), None);
}

// ============================================================================
// Plugins directory
// ============================================================================

#[test]
fn test_plugins_dir_default_created() {
    let root = create_temp_dir();
    let config = resolve_with(&Sandbox::new(&root), &[], &[]).unwrap();

    let expected = root.path().join("config").join("Headlamp").join("plugins");
    assert_eq!(config.require_plugins_dir().unwrap(), expected.as_path());
    assert!(expected.is_dir());
}

#[test]
fn test_plugins_dir_windows_layout() {
    let root = create_temp_dir();
    let config = resolve_with(&Sandbox::new(&root).windows(), &[], &[]).unwrap();

    let expected = root
        .path()
        .join("config")
        .join("Headlamp")
        .join("Config")
        .join("plugins");
    assert_eq!(config.require_plugins_dir().unwrap(), expected.as_path());
}

#[test]
fn test_plugins_dir_unavailable_is_empty() {
    let root = create_temp_dir();
    let config = resolve_with(&Sandbox::new(&root).without_config_dir(), &[], &[]).unwrap();
    assert_eq!(config.plugins_dir, "");
    assert!(matches!(
        config.require_plugins_dir(),
        Err(Error::PathResolution { .. })
    ));
}

#[test]
fn test_plugins_dir_flag_wins() {
    let (config, _root) = resolve(&["--plugins-dir=/srv/plugins"], &[]);
    assert_eq!(config.unwrap().plugins_dir, "/srv/plugins");
}
