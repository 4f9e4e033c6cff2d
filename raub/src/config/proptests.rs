//! Property-based tests for the configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, ListFormat};
use super::validator::ConfigValidator;
use proptest::prelude::*;
use std::path::PathBuf;

fn format_strategy() -> impl Strategy<Value = ListFormat> {
    prop_oneof![
        Just(ListFormat::Table),
        Just(ListFormat::Json),
        Just(ListFormat::Csv),
    ]
}

// Strategy for generating partially filled configs
fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[a-z]{1,12}\\.txt"),
        prop::option::of("[A-Z]{1,8}( [A-Z]{1,8})?"),
        prop::option::of("[A-Z]{2}[0-9]{1,4}"),
        prop::option::of("[A-Z]{2,3}"),
        prop::option::of(format_strategy()),
    )
        .prop_map(|(data_file, origin, flight_number, currency, output_format)| Config {
            data_file: data_file.map(PathBuf::from),
            origin,
            flight_number,
            currency,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Higher precedence wins field by field when set
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.data_file, high.data_file.or(low.data_file));
        prop_assert_eq!(result.origin, high.origin.or(low.origin));
        prop_assert_eq!(result.flight_number, high.flight_number.or(low.flight_number));
        prop_assert_eq!(result.currency, high.currency.or(low.currency));
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
    }

    // Empty config is identity element for merge
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Merging is associative
    #[test]
    fn config_merge_associative(
        a in config_strategy(),
        b in config_strategy(),
        c in config_strategy()
    ) {
        let mut left = a.clone();
        ConfigMerger::merge_into(&mut left, &b);
        ConfigMerger::merge_into(&mut left, &c);

        let mut b_merge_c = b;
        ConfigMerger::merge_into(&mut b_merge_c, &c);
        let mut right = a;
        ConfigMerger::merge_into(&mut right, &b_merge_c);

        prop_assert_eq!(left, right);
    }

    // Generated configs pass validation and survive a YAML round trip
    #[test]
    fn config_yaml_round_trip(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(back, config);
    }
}
