#![cfg(test)]
#![allow(
    clippy::missing_panics_doc,
    reason = "Assertions in tests are expected"
)]

use css_transforms::{MIRROR_MATRIX, MirrorSeed, Partition, RewriteError, classify_transform};

fn partition(ltr: &[&str], rtl: &[&str]) -> Partition {
    Partition {
        ltr: ltr.iter().map(|item| (*item).to_owned()).collect(),
        rtl: rtl.iter().map(|item| (*item).to_owned()).collect(),
    }
}

#[test]
fn values_without_marker_are_untouched() {
    env_logger::builder().is_test(true).try_init().unwrap_or_default();
    for value in ["rotate(90deg)", "none", "translate(1px) logical", "var(--spin)"] {
        assert_eq!(classify_transform(value, MirrorSeed::Always), Ok(None), "{value}");
    }
}

#[test]
fn zero_rotation_leaves_only_the_mirror() {
    env_logger::builder().is_test(true).try_init().unwrap_or_default();
    assert_eq!(
        classify_transform("logical rotate(0deg)", MirrorSeed::Always),
        Ok(Some(partition(&[], &[MIRROR_MATRIX])))
    );
    assert_eq!(
        classify_transform("LOGICAL Rotate(0)", MirrorSeed::Always),
        Ok(Some(partition(&[], &[MIRROR_MATRIX])))
    );
    assert_eq!(
        classify_transform("logical rotate3d(0, 0, 1, 0turn)", MirrorSeed::Always),
        Ok(Some(partition(&[], &[MIRROR_MATRIX])))
    );
}

#[test]
fn rotation_is_kept_unchanged_in_both_directions() {
    env_logger::builder().is_test(true).try_init().unwrap_or_default();
    assert_eq!(
        classify_transform("logical rotate(90deg)", MirrorSeed::Always),
        Ok(Some(partition(
            &["rotate(90deg)"],
            &[MIRROR_MATRIX, "rotate(90deg)"]
        )))
    );
    assert_eq!(
        classify_transform("logical rotate(-45deg)", MirrorSeed::Always),
        Ok(Some(partition(
            &["rotate(-45deg)"],
            &[MIRROR_MATRIX, "rotate(-45deg)"]
        )))
    );
    assert_eq!(
        classify_transform("logical rotate3d(0, 0, 1, 30deg)", MirrorSeed::Always),
        Ok(Some(partition(
            &["rotate3d(0, 0, 1, 30deg)"],
            &[MIRROR_MATRIX, "rotate3d(0, 0, 1, 30deg)"]
        )))
    );
}

#[test]
fn opaque_functions_keep_their_order() {
    env_logger::builder().is_test(true).try_init().unwrap_or_default();
    assert_eq!(
        classify_transform(
            "logical translate(10px) rotate(45deg) scale(1.5, 2)",
            MirrorSeed::Always
        ),
        Ok(Some(partition(
            &["translate(10px)", "rotate(45deg)", "scale(1.5, 2)"],
            &[
                MIRROR_MATRIX,
                "translate(10px)",
                "rotate(45deg)",
                "scale(1.5, 2)"
            ]
        )))
    );
    assert_eq!(
        classify_transform(
            "logical  translateX(1px) /* spin */ rotateZ(0deg)   skewY(3deg)",
            MirrorSeed::Always
        ),
        Ok(Some(partition(
            &["translateX(1px)", "skewY(3deg)"],
            &[MIRROR_MATRIX, "translateX(1px)", "skewY(3deg)"]
        )))
    );
}

#[test]
fn literal_tokens_are_copied_to_both_lists() {
    env_logger::builder().is_test(true).try_init().unwrap_or_default();
    assert_eq!(
        classify_transform("logical none", MirrorSeed::Always),
        Ok(Some(partition(&["none"], &[MIRROR_MATRIX, "none"])))
    );
    assert_eq!(
        classify_transform("logical 0 rotate(1deg)", MirrorSeed::Always),
        Ok(Some(partition(
            &["0", "rotate(1deg)"],
            &[MIRROR_MATRIX, "0", "rotate(1deg)"]
        )))
    );
}

#[test]
fn commas_between_functions_are_dropped() {
    env_logger::builder().is_test(true).try_init().unwrap_or_default();
    assert_eq!(
        classify_transform("logical translate(1px), rotate(2deg)", MirrorSeed::Always),
        Ok(Some(partition(
            &["translate(1px)", "rotate(2deg)"],
            &[MIRROR_MATRIX, "translate(1px)", "rotate(2deg)"]
        )))
    );
}

#[test]
fn mirror_only_with_content_when_configured() {
    env_logger::builder().is_test(true).try_init().unwrap_or_default();
    assert_eq!(
        classify_transform("logical rotate(0deg)", MirrorSeed::WhenContent),
        Ok(Some(Partition::default()))
    );
    assert_eq!(
        classify_transform("logical rotate(10deg)", MirrorSeed::WhenContent),
        Ok(Some(partition(
            &["rotate(10deg)"],
            &[MIRROR_MATRIX, "rotate(10deg)"]
        )))
    );
}

#[test]
fn matrix_is_rejected() {
    env_logger::builder().is_test(true).try_init().unwrap_or_default();
    assert_eq!(
        classify_transform("logical matrix(1,0,0,1,0,0)", MirrorSeed::Always),
        Err(RewriteError::DisallowedFunction {
            function: "matrix".to_owned()
        })
    );
    assert_eq!(
        classify_transform(
            "logical rotate(90deg) MATRIX3D(1,0,0,0,0,1,0,0,0,0,1,0,0,0,0,1)",
            MirrorSeed::Always
        ),
        Err(RewriteError::DisallowedFunction {
            function: "matrix3d".to_owned()
        })
    );
}

#[test]
fn unparsable_rotations_are_rejected() {
    env_logger::builder().is_test(true).try_init().unwrap_or_default();
    for value in [
        "rotate(var(--spin))",
        "rotate(45)",
        "rotate(calc(10deg * 2))",
        "rotate(10px)",
        "rotate()",
        "rotate(10deg 20deg)",
        "rotate3d(0, 0, 30deg)",
    ] {
        let logical = format!("logical {value}");
        assert_eq!(
            classify_transform(&logical, MirrorSeed::Always),
            Err(RewriteError::InvalidRotation {
                function: value.to_owned()
            }),
            "{value}"
        );
    }
}

#[test]
fn empty_values_are_unparsable() {
    env_logger::builder().is_test(true).try_init().unwrap_or_default();
    for value in ["", "   ", "/* nothing */"] {
        assert_eq!(
            classify_transform(value, MirrorSeed::Always),
            Err(RewriteError::Unparsable {
                value: value.to_owned()
            })
        );
    }
}
