// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Status Derivation

use proptest::prelude::*;

use gcp_infrastructure::domain::{SubnetPurpose, TypeMeta};
use gcp_infrastructure::terraform::{status_from_terraform_state, TerraformState};

/// Arbitrary state, empty strings included
fn terraform_state() -> impl Strategy<Value = TerraformState> {
    (
        ".{0,24}",
        ".{0,24}",
        ".{0,24}",
        proptest::option::of(".{0,24}"),
    )
        .prop_map(
            |(vpc_name, service_account_email, subnet_nodes, subnet_internal)| TerraformState {
                vpc_name,
                service_account_email,
                subnet_nodes,
                subnet_internal,
            },
        )
}

proptest! {
    /// Property: deriving twice from the same state gives equal records
    #[test]
    fn prop_status_derivation_is_idempotent(state in terraform_state()) {
        let first = status_from_terraform_state(&state);
        let second = status_from_terraform_state(&state);
        prop_assert_eq!(first, second);
    }

    /// Property: [nodes] without an internal subnet, [nodes, internal] with one
    #[test]
    fn prop_subnet_entries_follow_internal_subnet(state in terraform_state()) {
        let status = status_from_terraform_state(&state);
        let subnets = &status.networks.subnets;

        prop_assert_eq!(subnets[0].purpose, SubnetPurpose::Nodes);
        prop_assert_eq!(&subnets[0].name, &state.subnet_nodes);

        match &state.subnet_internal {
            Some(internal) => {
                prop_assert_eq!(subnets.len(), 2);
                prop_assert_eq!(subnets[1].purpose, SubnetPurpose::Internal);
                prop_assert_eq!(&subnets[1].name, internal);
            }
            None => {
                prop_assert_eq!(subnets.len(), 1);
            }
        }
    }

    /// Property: values pass through and the type tag never changes
    #[test]
    fn prop_status_passes_values_through(state in terraform_state()) {
        let status = status_from_terraform_state(&state);

        prop_assert_eq!(status.type_meta, TypeMeta::infrastructure_status());
        prop_assert_eq!(status.networks.vpc.name, state.vpc_name);
        prop_assert_eq!(status.service_account_email, state.service_account_email);
    }
}
