//! Property-based tests for configuration resolution.

use std::path::PathBuf;

use proptest::prelude::*;

use super::builder::ConfigBuilder;
use super::decode::parse_bool;
use super::environment::Environment;
use super::loader::ConfigLoader;
use super::merger::Origin;
use super::schema::Setting;
use crate::platform::MockPlatform;

fn platform() -> MockPlatform {
    let mut platform = MockPlatform::new();
    platform.expect_config_dir().return_const(None::<PathBuf>);
    platform
        .expect_home_dir()
        .return_const(Some(PathBuf::from("/home/prop")));
    platform
}

// Values safe to pass both as flags and through the environment.
fn text_value() -> impl Strategy<Value = String> {
    "/[a-z]{1,12}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // A supplied flag always wins over the environment.
    #[test]
    fn flag_beats_environment(flag in text_value(), env_value in text_value()) {
        let env = Environment::from_pairs([("HEADLAMP_CONFIG_BASE_URL", env_value)]);
        let arg = format!("--base-url={flag}");
        let values = ConfigLoader::load(&["headlamp", arg.as_str()], &env, &platform()).unwrap();

        prop_assert_eq!(values.value("base-url"), Some(flag.as_str()));
        prop_assert_eq!(values.origin("base-url"), Some(Origin::Flag));
    }

    // The environment wins over defaults when no flag is given.
    #[test]
    fn environment_beats_default(port in 1u16..) {
        let env = Environment::from_pairs([("HEADLAMP_CONFIG_PORT", port.to_string())]);
        let config = ConfigBuilder::new()
            .with_args(["headlamp"])
            .with_environment(env)
            .with_platform(platform())
            .build()
            .unwrap();

        prop_assert_eq!(config.port, port);
    }

    // Overrides never replace a flag-supplied value.
    #[test]
    fn explicit_watch_survives(in_cluster in any::<bool>(), watch in any::<bool>()) {
        let args = [
            "headlamp".to_string(),
            format!("--in-cluster={in_cluster}"),
            format!("--watch-plugins-changes={watch}"),
        ];
        let config = ConfigBuilder::new()
            .with_args(args)
            .with_platform(platform())
            .build()
            .unwrap();

        prop_assert_eq!(config.watch_plugins_changes, Setting::Explicit(watch));
    }

    // Identical inputs resolve identically.
    #[test]
    fn resolution_is_idempotent(
        dev in any::<bool>(),
        port in 1u16..,
        scopes in prop::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        let builder = ConfigBuilder::new()
            .with_args([
                "headlamp".to_string(),
                format!("--dev={dev}"),
                format!("--oidc-scopes={}", scopes.join(",")),
            ])
            .with_environment(Environment::from_pairs([("HEADLAMP_CONFIG_PORT", port.to_string())]))
            .with_platform(platform());

        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.oidc.scopes, scopes);
    }

    // Every casing of an accepted literal decodes the same way.
    #[test]
    fn bool_literals_ignore_case(
        literal in prop::sample::select(vec!["true", "yes", "on", "t", "1", "false", "no", "off", "f", "0"]),
        upper in prop::collection::vec(any::<bool>(), 5),
    ) {
        let mixed: String = literal
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
            .collect();

        prop_assert_eq!(parse_bool("x", &mixed).unwrap(), parse_bool("x", literal).unwrap());
    }

    // Anything outside the accepted set is rejected.
    #[test]
    fn other_bool_literals_rejected(s in "[a-z]{2,8}") {
        let accepted = ["true", "yes", "on", "false", "no", "off"];
        prop_assume!(!accepted.contains(&s.as_str()));
        prop_assert!(parse_bool("x", &s).is_err());
    }
}
