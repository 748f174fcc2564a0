//! # Closed-Enumeration Law Tests
//!
//! Every wire enumeration in this crate must satisfy the same contract:
//! the catalog is non-empty, wire strings are non-empty and pairwise
//! distinct, parse and render are mutual inverses over the catalog,
//! matching is exact (no case folding, no trimming), and the empty
//! string is rejected as invalid rather than unknown. These tests apply
//! that contract to every enumeration in one place, so adding a new one
//! to the list below is the whole cost of covering it.

use std::fmt::Debug;

use kiln_core::{EnumValueError, WireEnum};

fn assert_closed_enum_laws<E>()
where
    E: WireEnum + Debug + PartialEq,
{
    let catalog = E::values();
    assert!(!catalog.is_empty(), "{} has an empty catalog", E::TYPE_NAME);

    for variant in catalog {
        let wire = variant.as_wire();
        assert!(
            !wire.is_empty(),
            "{} renders an empty wire string",
            E::TYPE_NAME
        );
        assert_eq!(
            E::from_wire(wire).as_ref(),
            Ok(variant),
            "{} does not round-trip {wire:?}",
            E::TYPE_NAME
        );

        // Exact matching: perturbed spellings are unknown, not folded.
        let lowered = wire.to_lowercase();
        if lowered != wire {
            assert_eq!(
                E::from_wire(&lowered),
                Err(EnumValueError::UnknownEnumValue {
                    type_name: E::TYPE_NAME,
                    value: lowered.clone(),
                }),
                "{} folds case",
                E::TYPE_NAME
            );
        }
        let padded = format!(" {wire} ");
        assert!(
            E::from_wire(&padded).is_err(),
            "{} trims whitespace",
            E::TYPE_NAME
        );
    }

    // Injectivity across the whole catalog.
    for (i, a) in catalog.iter().enumerate() {
        for b in &catalog[i + 1..] {
            assert_ne!(
                a.as_wire(),
                b.as_wire(),
                "{} maps two variants to one wire string",
                E::TYPE_NAME
            );
        }
    }

    assert_eq!(
        E::from_wire(""),
        Err(EnumValueError::InvalidEnumValue {
            type_name: E::TYPE_NAME,
        }),
        "{} does not reject the empty string as invalid",
        E::TYPE_NAME
    );
}

#[test]
fn test_common_enums_obey_closed_enum_laws() {
    assert_closed_enum_laws::<kiln_model::common::CompressionType>();
}

#[test]
fn test_notebook_enums_obey_closed_enum_laws() {
    use kiln_model::notebook::*;
    assert_closed_enum_laws::<NotebookInstanceStatus>();
    assert_closed_enum_laws::<NotebookInstanceType>();
    assert_closed_enum_laws::<NotebookAcceleratorType>();
    assert_closed_enum_laws::<RootAccess>();
    assert_closed_enum_laws::<DirectInternetAccess>();
}

#[test]
fn test_training_enums_obey_closed_enum_laws() {
    use kiln_model::training::*;
    assert_closed_enum_laws::<TrainingJobStatus>();
    assert_closed_enum_laws::<SecondaryStatus>();
    assert_closed_enum_laws::<TrainingInputMode>();
    assert_closed_enum_laws::<TrainingInstanceType>();
    assert_closed_enum_laws::<RecordWrapper>();
    assert_closed_enum_laws::<S3DataType>();
    assert_closed_enum_laws::<S3DataDistribution>();
}

#[test]
fn test_transform_enums_obey_closed_enum_laws() {
    use kiln_model::transform::*;
    assert_closed_enum_laws::<BatchStrategy>();
    assert_closed_enum_laws::<SplitType>();
    assert_closed_enum_laws::<AssemblyType>();
    assert_closed_enum_laws::<JoinSource>();
    assert_closed_enum_laws::<TransformInstanceType>();
}

#[test]
fn test_tuning_enums_obey_closed_enum_laws() {
    use kiln_model::tuning::*;
    assert_closed_enum_laws::<TuningObjectiveType>();
    assert_closed_enum_laws::<ScalingType>();
}

mod properties {
    use kiln_core::{EnumValueError, WireEnum};
    use kiln_model::notebook::NotebookInstanceStatus;
    use kiln_model::training::TrainingInstanceType;
    use proptest::prelude::*;

    proptest! {
        /// Strings outside a status catalog are unknown, with the input
        /// echoed verbatim in the error.
        #[test]
        fn arbitrary_status_strings_are_rejected(s in "\\PC+") {
            let declared = NotebookInstanceStatus::values()
                .iter()
                .any(|v| v.as_wire() == s);
            prop_assume!(!declared);
            prop_assert_eq!(
                NotebookInstanceStatus::from_wire(&s),
                Err(EnumValueError::UnknownEnumValue {
                    type_name: NotebookInstanceStatus::TYPE_NAME,
                    value: s,
                })
            );
        }

        /// Instance-type parsing never panics, whatever arrives on the
        /// wire.
        #[test]
        fn instance_type_parse_is_total(s in ".*") {
            let _ = TrainingInstanceType::from_wire(&s);
        }
    }
}
