//! End-to-end merge coverage over text inputs.

use std::collections::BTreeSet;

use anyhow::{Result, anyhow};
use hcl_merge::{
    Block, Document, DocumentFormat, HclFormat, MergeError, MergeWorkspace, Merger, Side,
    block_key, copy_attributes, merge,
};
use rstest::rstest;
use test_helpers::fixtures::{self, Fixture};
use test_helpers::text::{dedent, visible};

#[rstest]
#[case(fixtures::DISJOINT)]
#[case(fixtures::OVERRIDE)]
#[case(fixtures::NESTED)]
#[case(fixtures::EMPTY_BASE)]
#[case(fixtures::MODULE_DEFAULTS)]
fn fixtures_merge_to_expected_text(#[case] fixture: Fixture) -> Result<()> {
    let merged = merge(fixture.a, fixture.b)?;
    assert_eq!(
        merged,
        fixture.merged,
        "fixture {} rendered as:\n{}",
        fixture.name,
        visible(&merged)
    );
    Ok(())
}

#[rstest]
fn indented_inputs_are_reformatted() -> Result<()> {
    let a = r#"
    variable "name" {
      description = "Name to be used on all the resources as identifier"
      type        = string
      default     = ""
    }"#;
    let b = r#"
    variable "name" {
      type        = string
      default     = "my-name"
    }"#;
    let expected = dedent(
        r#"
        variable "name" {
          default     = "my-name"
          description = "Name to be used on all the resources as identifier"
          type        = string
        }
        "#,
    );
    assert_eq!(merge(a, b)?, expected.trim_end().to_owned() + "\n");
    Ok(())
}

#[rstest]
fn both_empty_inputs_merge_to_nothing() -> Result<()> {
    assert_eq!(merge("", "")?, "");
    Ok(())
}

#[rstest]
#[case(fixtures::DISJOINT)]
#[case(fixtures::NESTED)]
#[case(fixtures::MODULE_DEFAULTS)]
fn merging_is_deterministic(#[case] fixture: Fixture) -> Result<()> {
    let first = merge(fixture.a, fixture.b)?;
    for _ in 0..8 {
        assert_eq!(merge(fixture.a, fixture.b)?, first);
    }
    Ok(())
}

#[rstest]
#[case(fixtures::DISJOINT)]
#[case(fixtures::OVERRIDE)]
#[case(fixtures::NESTED)]
#[case(fixtures::MODULE_DEFAULTS)]
fn output_keys_are_the_union_of_input_keys(#[case] fixture: Fixture) -> Result<()> {
    let a = HclFormat.parse(fixture.a)?;
    let b = HclFormat.parse(fixture.b)?;
    let merged = HclFormat.parse(&merge(fixture.a, fixture.b)?)?;

    let expected: BTreeSet<String> = a.blocks().iter().chain(b.blocks()).map(block_key).collect();
    let actual: Vec<String> = merged.blocks().iter().map(block_key).collect();
    let unique: BTreeSet<String> = actual.iter().cloned().collect();

    assert_eq!(unique, expected);
    assert_eq!(actual.len(), unique.len(), "no block is duplicated");
    Ok(())
}

/// Rebuild `block` with attributes in ascending name order at every depth.
fn sorted(block: &Block) -> Block {
    let mut out = Block::new(block.ident(), block.labels().iter().map(String::as_str));
    copy_attributes(block, &mut out);
    for nested in block.blocks() {
        out.push_block(sorted(nested));
    }
    out
}

#[rstest]
#[case(fixtures::DISJOINT.a)]
#[case(fixtures::NESTED.a)]
#[case(fixtures::MODULE_DEFAULTS.a)]
fn self_merge_only_sorts_attributes(#[case] source: &str) -> Result<()> {
    let original = HclFormat.parse(source)?;
    let merged = HclFormat.parse(&merge(source, source)?)?;
    let expected: Document = original.blocks().iter().map(sorted).collect();
    assert_eq!(merged, expected);
    Ok(())
}

#[rstest]
fn unique_nested_blocks_keep_their_subtree() -> Result<()> {
    let a = dedent(
        r#"
        service "api" {
          port = 80

          health {
            path = "/healthz"

            timeouts {
              read = "5s"
            }
          }
        }"#,
    );
    let b = dedent(
        r#"
        service "api" {
          port = 8080

          scaling {
            min = 2
          }
        }"#,
    );
    let expected = dedent(
        r#"
        service "api" {
          port = 8080

          health {
            path = "/healthz"

            timeouts {
              read = "5s"
            }
          }

          scaling {
            min = 2
          }
        }
        "#,
    );
    assert_eq!(merge(&a, &b)?, expected.trim_end().to_owned() + "\n");
    Ok(())
}

#[rstest]
#[case("variable \"a\" {", fixtures::DISJOINT.b, Side::A)]
#[case(fixtures::DISJOINT.a, "variable \"b\" {\n  default = \n}", Side::B)]
fn malformed_input_fails_without_output(#[case] a: &str, #[case] b: &str, #[case] side: Side) {
    match merge(a, b) {
        Err(MergeError::Parse { side: reported, .. }) => assert_eq!(reported, side),
        other => panic!("expected parse error for {side}, got {other:?}"),
    }
}

#[rstest]
#[case("a$${b}", "a${b}")]
#[case("a%%{b}", "a%{b}")]
#[case("say \\\"hi\\\"", "say \"hi\"")]
fn escaped_labels_survive_a_second_parse(
    #[case] source_label: &str,
    #[case] label: &str,
) -> Result<()> {
    let source = format!("thing \"{source_label}\" {{\n  k = 1\n}}\n");
    let merged = merge(&source, "")?;
    let reparsed = HclFormat.parse(&merged)?;
    let block = reparsed
        .blocks()
        .first()
        .ok_or_else(|| anyhow!("no block in {merged:?}"))?;
    assert_eq!(block.labels(), [label]);
    assert_eq!(merge(&merged, "")?, merged);
    Ok(())
}

#[rstest]
fn public_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Merger>();
    assert_send_sync::<MergeWorkspace>();
    assert_send_sync::<Document>();
    assert_send_sync::<MergeError>();
}

#[rstest]
fn independent_merges_run_concurrently() -> Result<()> {
    let outputs = std::thread::scope(|scope| {
        let handles: Vec<_> = fixtures::ALL
            .into_iter()
            .map(|fixture| scope.spawn(move || merge(fixture.a, fixture.b)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().map_err(|_| anyhow!("merge thread panicked")))
            .collect::<Result<Vec<_>>>()
    })?;
    for (fixture, output) in fixtures::ALL.into_iter().zip(outputs) {
        assert_eq!(output?, fixture.merged, "fixture {}", fixture.name);
    }
    Ok(())
}
