//! Behavioural coverage for text merges using `rstest-bdd`.

use anyhow::{Result, anyhow, ensure};
use hcl_merge::{DocumentFormat, HclFormat, MergeError, Side, block_key, merge};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenarios, then, when};
use test_helpers::fixtures::{self, Fixture};

/// Scenario state shared between steps.
#[derive(Debug, Default, ScenarioState)]
struct MergeState {
    fixture: Slot<Fixture>,
    b_override: Slot<String>,
    outcome: Slot<Result<String, MergeError>>,
}

#[fixture]
fn merge_state() -> MergeState {
    MergeState::default()
}

#[given("the merge inputs from fixture {name}")]
fn load_fixture(merge_state: &MergeState, name: String) -> Result<()> {
    let fixture = fixtures::by_name(&name).ok_or_else(|| anyhow!("unknown fixture {name}"))?;
    merge_state.fixture.set(fixture);
    Ok(())
}

#[given("the second input is replaced with malformed text")]
fn break_second_input(merge_state: &MergeState) {
    merge_state
        .b_override
        .set(String::from("variable \"b\" {\n  default =\n"));
}

#[when("the inputs are merged")]
fn merge_inputs(merge_state: &MergeState) -> Result<()> {
    let fixture = merge_state
        .fixture
        .get()
        .ok_or_else(|| anyhow!("a fixture must be loaded first"))?;
    let b = merge_state
        .b_override
        .get()
        .unwrap_or_else(|| fixture.b.to_owned());
    merge_state.outcome.set(merge(fixture.a, &b));
    Ok(())
}

#[then("the output matches the fixture")]
fn output_matches(merge_state: &MergeState) -> Result<()> {
    let fixture = merge_state
        .fixture
        .get()
        .ok_or_else(|| anyhow!("a fixture must be loaded first"))?;
    let merged = merge_state
        .outcome
        .with_ref(|outcome| outcome.as_ref().map(Clone::clone).map_err(ToString::to_string))
        .ok_or_else(|| anyhow!("the inputs must be merged first"))?
        .map_err(|err| anyhow!(err))?;
    ensure!(
        merged == fixture.merged,
        "fixture {} merged to {merged:?}",
        fixture.name
    );
    Ok(())
}

#[then("attribute {attribute} of {key} is {value}")]
fn attribute_has_value(
    merge_state: &MergeState,
    attribute: String,
    key: String,
    value: String,
) -> Result<()> {
    let merged = merge_state
        .outcome
        .with_ref(|outcome| outcome.as_ref().map(Clone::clone).map_err(ToString::to_string))
        .ok_or_else(|| anyhow!("the inputs must be merged first"))?
        .map_err(|err| anyhow!(err))?;
    let document = HclFormat.parse(&merged)?;
    let block = document
        .blocks()
        .iter()
        .find(|block| block_key(block) == key)
        .ok_or_else(|| anyhow!("no block {key} in output"))?;
    ensure!(
        block.attribute(&attribute) == Some(value.as_str()),
        "{key}.{attribute} is {:?}",
        block.attribute(&attribute)
    );
    Ok(())
}

#[then("the merge fails to parse input b")]
fn merge_fails_on_b(merge_state: &MergeState) -> Result<()> {
    let side = merge_state
        .outcome
        .with_ref(|outcome| match outcome {
            Err(MergeError::Parse { side, .. }) => Some(*side),
            _ => None,
        })
        .flatten();
    ensure!(side == Some(Side::B), "expected a parse error for input b");
    Ok(())
}

scenarios!(
    "tests/features/merge.feature",
    fixtures = [merge_state: MergeState]
);
