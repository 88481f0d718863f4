// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Terraform State Extraction

use proptest::prelude::*;

use crate::fixtures::{output_variables, StubReader};
use gcp_infrastructure::domain::{Cidr, InfrastructureConfig, NetworkConfig, Vpc};
use gcp_infrastructure::terraform::{extract_terraform_state, OutputKey};

fn config() -> impl Strategy<Value = InfrastructureConfig> {
    (
        proptest::option::of("[a-z][a-z0-9-]{0,20}"),
        proptest::option::of("[0-9./]{0,18}"),
    )
        .prop_map(|(vpc, internal)| InfrastructureConfig {
            networks: NetworkConfig {
                vpc: vpc.map(Vpc::new),
                internal: internal.map(Cidr::from),
                worker: Cidr::from("10.250.0.0/16"),
            },
        })
}

proptest! {
    /// Property: 3 names without an internal network, 4 with one, all known
    #[test]
    fn prop_requested_names_follow_internal_network(config in config()) {
        let reader = StubReader::new(output_variables("vpc", "nodes", "sa@cloud", Some("internal")));

        let state = tokio_test::block_on(extract_terraform_state(&reader, &config)).unwrap();

        let calls = reader.calls();
        prop_assert_eq!(calls.len(), 1);
        let expected = if config.networks.internal.is_some() { 4 } else { 3 };
        prop_assert_eq!(calls[0].len(), expected);
        prop_assert!(calls[0].iter().all(|name| OutputKey::from_name(name).is_some()));
        prop_assert_eq!(
            calls[0].contains(&"subnet_internal".to_string()),
            config.networks.internal.is_some()
        );
        prop_assert_eq!(state.subnet_internal.is_some(), config.networks.internal.is_some());
    }

    /// Property: returned values land in the matching state fields
    #[test]
    fn prop_values_map_to_fields(
        vpc in "[a-z0-9-]{0,16}",
        nodes in "[a-z0-9-]{0,16}",
        email in "[a-z0-9@.]{0,16}",
        internal in "[a-z0-9-]{0,16}",
    ) {
        let reader = StubReader::new(output_variables(&vpc, &nodes, &email, Some(&internal)));
        let config = InfrastructureConfig {
            networks: NetworkConfig {
                vpc: None,
                internal: Some(Cidr::from("192.168.0.0/16")),
                worker: Cidr::from("10.250.0.0/16"),
            },
        };

        let state = tokio_test::block_on(extract_terraform_state(&reader, &config)).unwrap();

        prop_assert_eq!(state.vpc_name, vpc);
        prop_assert_eq!(state.subnet_nodes, nodes);
        prop_assert_eq!(state.service_account_email, email);
        prop_assert_eq!(state.subnet_internal, Some(internal));
    }
}
