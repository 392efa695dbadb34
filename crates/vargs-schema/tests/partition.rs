//! Property tests for signature classification: the model/plain partition
//! is total, disjoint, order-preserving, and idempotent for any set of
//! unique parameter names.

use std::collections::BTreeSet;

use proptest::prelude::*;
use serde::{Deserialize, Serialize};

use vargs_core::ValidationModel;
use vargs_schema::{FieldType, ParamSpec, Signature};

#[derive(Debug, Serialize, Deserialize)]
struct Anything {
    #[serde(default)]
    note: Option<String>,
}

impl ValidationModel for Anything {
    const NAME: &'static str = "Anything";
}

/// Strategy for an ordered set of unique parameter names, each flagged
/// model-typed or plain.
fn classified_names() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::btree_set("[a-z][a-z0-9_]{0,12}", 0..12).prop_flat_map(|names| {
        let names: Vec<String> = names.into_iter().collect();
        let len = names.len();
        prop::collection::vec(any::<bool>(), len)
            .prop_map(move |flags| names.clone().into_iter().zip(flags).collect())
    })
}

fn build(classified: &[(String, bool)]) -> Signature {
    let mut builder = Signature::builder("under_test");
    for (name, is_model) in classified {
        builder = if *is_model {
            builder.model::<Anything>(name.clone())
        } else {
            builder.plain(name.clone(), FieldType::Any)
        };
    }
    builder.build().expect("unique names must build")
}

proptest! {
    /// Every parameter lands in exactly one side of the partition, and
    /// the two sides together cover the whole signature.
    #[test]
    fn partition_total_and_disjoint(classified in classified_names()) {
        let sig = build(&classified);

        let model: BTreeSet<String> =
            sig.model_params().map(|p| p.name().to_string()).collect();
        let plain: BTreeSet<String> =
            sig.plain_params().map(|p| p.name().to_string()).collect();
        let all: BTreeSet<String> =
            sig.param_names().map(String::from).collect();

        prop_assert!(model.is_disjoint(&plain));
        let union: BTreeSet<String> = model.union(&plain).cloned().collect();
        prop_assert_eq!(union, all);
        prop_assert_eq!(
            model.len() + plain.len(),
            sig.params().len()
        );
    }

    /// Classification follows the registered kind exactly.
    #[test]
    fn classification_matches_registration(classified in classified_names()) {
        let sig = build(&classified);
        for (spec, (name, is_model)) in sig.params().iter().zip(&classified) {
            prop_assert_eq!(spec.name(), name.as_str());
            prop_assert_eq!(spec.is_model(), *is_model);
        }
    }

    /// Re-reading the partition never changes it.
    #[test]
    fn classification_idempotent(classified in classified_names()) {
        let sig = build(&classified);
        let first: Vec<String> =
            sig.model_params().map(|p| p.name().to_string()).collect();
        let second: Vec<String> =
            sig.model_params().map(|p| p.name().to_string()).collect();
        prop_assert_eq!(first, second);

        let names_a: Vec<&str> = sig.params().iter().map(ParamSpec::name).collect();
        let names_b: Vec<&str> = sig.params().iter().map(ParamSpec::name).collect();
        prop_assert_eq!(names_a, names_b);
    }
}
