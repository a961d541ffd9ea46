#![cfg(test)]
#![allow(
    clippy::missing_panics_doc,
    reason = "Assertions in tests are expected"
)]
#![allow(
    clippy::missing_errors_doc,
    reason = "Test helpers return Result for clear propagation"
)]

use core::error::Error;
use css_syntax::parse_stylesheet;
use css_transforms::{
    Diagnostics, LtrOutput, MirrorSeed, RewriteOptions, RewriteStats, process_css,
    rewrite_stylesheet,
};
use css_writing_modes::QualifierStyle;

fn init_logging() {
    env_logger::builder().is_test(true).try_init().unwrap_or_default();
}

#[test]
fn zero_rotation_replaces_rule_with_rtl_mirror() {
    init_logging();
    let output = process_css(
        ".indicator { transform: logical rotate(0deg); }",
        &RewriteOptions::default(),
    );
    assert_eq!(
        output.css,
        "[dir=\"rtl\"] .indicator {\n  transform: matrix(-1, 0, 0, 1, 0, 0);\n}\n"
    );
    assert!(output.diagnostics.is_empty());
}

#[test]
fn synthesized_rules_follow_their_source() {
    init_logging();
    let css_text = ".a { color: red; transform: logical rotate(90deg) } .b { color: blue }";
    let output = process_css(css_text, &RewriteOptions::default());
    assert_eq!(
        output.css,
        concat!(
            ".a {\n  color: red;\n}\n\n",
            "[dir=\"ltr\"] .a {\n  transform: rotate(90deg);\n}\n\n",
            "[dir=\"rtl\"] .a {\n  transform: matrix(-1, 0, 0, 1, 0, 0) rotate(90deg);\n}\n\n",
            ".b {\n  color: blue;\n}\n",
        )
    );
    assert_eq!(
        output.stats,
        RewriteStats {
            visited: 2,
            rewritten: 1,
            failed: 0,
            warned: 0,
            removed: 0,
        }
    );
}

#[test]
fn rules_inside_group_rules_are_rewritten() {
    init_logging();
    let css_text = "@media (min-width: 10px) { .a { transform: logical rotate(90deg) } }";
    let output = process_css(css_text, &RewriteOptions::default());
    assert_eq!(
        output.css,
        concat!(
            "@media (min-width: 10px) {\n",
            "  [dir=\"ltr\"] .a {\n    transform: rotate(90deg);\n  }\n\n",
            "  [dir=\"rtl\"] .a {\n    transform: matrix(-1, 0, 0, 1, 0, 0) rotate(90deg);\n  }\n",
            "}\n",
        )
    );
    assert_eq!(output.stats.removed, 1);
}

#[test]
fn plain_transforms_are_unchanged() {
    init_logging();
    let css_text = ".a { transform: rotate(90deg) translate(1px) }";
    let mut sheet = parse_stylesheet(css_text);
    let before = sheet.clone();
    let mut diagnostics = Diagnostics::new();
    let stats = rewrite_stylesheet(&mut sheet, &RewriteOptions::default(), &mut diagnostics);
    assert_eq!(sheet, before);
    assert_eq!(stats.rewritten, 0);
    assert!(diagnostics.is_empty());
}

#[test]
fn matrix_is_reported_and_left_in_place() -> Result<(), Box<dyn Error>> {
    init_logging();
    let css_text = ".a { transform: logical matrix(1,0,0,1,0,0) } .b { transform: logical rotate(0deg) }";
    let output = process_css(css_text, &RewriteOptions::default());
    assert!(output.diagnostics.has_errors());
    assert_eq!(output.stats.failed, 1);
    assert_eq!(output.stats.rewritten, 1);
    assert!(
        output
            .css
            .starts_with(".a {\n  transform: logical matrix(1,0,0,1,0,0);\n}\n")
    );
    assert!(!output.css.contains("[dir=\"ltr\"] .a"));
    assert!(!output.css.contains("[dir=\"rtl\"] .a"));

    let failure = output.into_result().err().ok_or("expected an error")?;
    assert!(failure.to_string().contains("matrix()"));
    Ok(())
}

#[test]
fn second_pass_is_a_no_op() {
    init_logging();
    let css_text = ".a, .b::before { transform: logical translate(4px) rotate(45deg) } .c { transform: logical rotate(0) }";
    for options in [
        RewriteOptions::default(),
        RewriteOptions {
            qualifier_style: QualifierStyle::Both,
            mirror_seed: MirrorSeed::WhenContent,
            ltr_output: LtrOutput::Fallback,
        },
        RewriteOptions {
            qualifier_style: QualifierStyle::PseudoClass,
            ..RewriteOptions::default()
        },
    ] {
        let first = process_css(css_text, &options);
        let second = process_css(&first.css, &options);
        assert_eq!(second.css, first.css, "{options:?}");
        assert_eq!(second.stats.rewritten, 0, "{options:?}");
    }
}

#[test]
fn pseudo_class_and_fallback_options() -> Result<(), Box<dyn Error>> {
    init_logging();
    let options = RewriteOptions::from_json(
        r#"{ "qualifierStyle": "both", "ltrOutput": "fallback" }"#,
    )?;
    assert_eq!(options.mirror_seed, MirrorSeed::Always);
    let output = process_css(
        ".a::after { transform: logical rotate(90deg) }",
        &options,
    );
    assert_eq!(
        output.css,
        concat!(
            ".a::after {\n  transform: rotate(90deg);\n}\n\n",
            "[dir=\"rtl\"] .a::after, .a:dir(rtl)::after {\n",
            "  transform: matrix(-1, 0, 0, 1, 0, 0) rotate(90deg);\n}\n",
        )
    );
    Ok(())
}

#[test]
fn mirror_seed_when_content_drops_empty_rtl() {
    init_logging();
    let options = RewriteOptions {
        mirror_seed: MirrorSeed::WhenContent,
        ..RewriteOptions::default()
    };
    let output = process_css(".a { transform: logical rotate(0deg); color: red }", &options);
    assert_eq!(output.css, ".a {\n  color: red;\n}\n");
}

#[test]
fn important_flag_is_carried_over() -> Result<(), Box<dyn Error>> {
    init_logging();
    let output = process_css(
        ".a { transform: logical rotate(5deg) !important }",
        &RewriteOptions::default(),
    );
    let css = output.into_result()?;
    assert!(css.contains("transform: rotate(5deg) !important;"));
    assert!(css.contains("transform: matrix(-1, 0, 0, 1, 0, 0) rotate(5deg) !important;"));
    Ok(())
}

#[test]
fn important_flag_is_normalized_whatever_its_spelling() -> Result<(), Box<dyn Error>> {
    init_logging();
    for css_text in [
        ".a { transform: logical rotate(5deg) !IMPORTANT }",
        ".a { transform: logical rotate(5deg) ! important }",
    ] {
        let css = process_css(css_text, &RewriteOptions::default()).into_result()?;
        assert_eq!(
            css,
            concat!(
                "[dir=\"ltr\"] .a {\n  transform: rotate(5deg) !important;\n}\n\n",
                "[dir=\"rtl\"] .a {\n  transform: matrix(-1, 0, 0, 1, 0, 0) rotate(5deg) !important;\n}\n",
            ),
            "{css_text}"
        );
        assert!(!css.contains("IMPORTANT"));
    }
    Ok(())
}

#[test]
fn empty_transform_counts_as_warned_not_failed() -> Result<(), Box<dyn Error>> {
    init_logging();
    let output = process_css(
        ".a { transform: ; color: red } .b { transform: logical matrix(1,0,0,1,0,0) }",
        &RewriteOptions::default(),
    );
    assert_eq!(output.stats.warned, 1);
    assert_eq!(output.stats.failed, 1);
    assert_eq!(output.stats.rewritten, 0);
    assert_eq!(output.diagnostics.warnings().count(), 1);

    let warned_only = process_css(".a { transform: }", &RewriteOptions::default());
    assert_eq!(warned_only.stats.warned, 1);
    assert_eq!(warned_only.stats.failed, 0);
    assert!(!warned_only.diagnostics.has_errors());
    let css = warned_only.into_result()?;
    assert!(css.starts_with(".a {"));
    Ok(())
}

#[test]
fn invalid_options_are_reported() {
    assert!(RewriteOptions::from_json(r#"{ "qualifierStyle": "class" }"#).is_err());
    assert_eq!(
        RewriteOptions::from_json("{}").ok(),
        Some(RewriteOptions::default())
    );
}
