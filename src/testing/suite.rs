//! The scenario groups
//!
//! Groups run in a fixed order and hand identifiers forward through the
//! [`RunContext`]. A group whose identifier is missing prints a skip notice
//! and sends nothing.

use colored::Colorize;

use crate::api::{Request, Transport};

use super::context::RunContext;
use super::fixtures::{self, ACTION_APPROVE, ACTION_COMPLETE, ACTION_UNREGISTERED, NONEXISTENT_ID};
use super::recorder::Expectation;

fn section(title: &str) {
    println!("\n{}", title.cyan().bold());
}

/// Create the linear definition, then read it back and list all definitions
pub async fn definitions(transport: &dyn Transport, ctx: &mut RunContext) {
    section("Testing Definitions...");

    let outcome = transport
        .execute(Request::create_definition(fixtures::linear_definition()))
        .await;
    if ctx
        .recorder
        .expect("Create definition", &outcome, Expectation::Accepted)
    {
        ctx.definition_id = outcome.created_id();
        match &ctx.definition_id {
            Some(id) => tracing::info!(definition_id = %id, "captured definition id"),
            None => tracing::warn!("definition created but response carried no data.id"),
        }
    }

    match ctx.definition_id.as_deref() {
        Some(id) => {
            let outcome = transport.execute(Request::get_definition(id)).await;
            ctx.recorder
                .expect("Get definition", &outcome, Expectation::Accepted);
        }
        None => ctx
            .recorder
            .skip("Skipping get definition - no definition ID"),
    }

    let outcome = transport.execute(Request::list_definitions()).await;
    ctx.recorder
        .expect("Get all definitions", &outcome, Expectation::Accepted);
}

/// Start an instance of the captured definition, read it back, list all
pub async fn instances(transport: &dyn Transport, ctx: &mut RunContext) {
    section("Testing Instances...");

    let Some(definition_id) = ctx.definition_id.clone() else {
        ctx.recorder
            .skip("Skipping instance tests - no definition ID");
        return;
    };

    let outcome = transport
        .execute(Request::start_instance(&definition_id))
        .await;
    if ctx
        .recorder
        .expect("Start instance", &outcome, Expectation::Accepted)
    {
        ctx.instance_id = outcome.created_id();
        match &ctx.instance_id {
            Some(id) => tracing::info!(instance_id = %id, "captured instance id"),
            None => tracing::warn!("instance started but response carried no data.id"),
        }
    }

    match ctx.instance_id.as_deref() {
        Some(id) => {
            let outcome = transport.execute(Request::get_instance(id)).await;
            ctx.recorder
                .expect("Get instance", &outcome, Expectation::Accepted);
        }
        None => ctx.recorder.skip("Skipping get instance - no instance ID"),
    }

    let outcome = transport.execute(Request::list_instances()).await;
    ctx.recorder
        .expect("Get all instances", &outcome, Expectation::Accepted);
}

/// Drive the instance to its terminal state, then try an unknown action
pub async fn actions(transport: &dyn Transport, ctx: &mut RunContext) {
    section("Testing Actions...");

    let Some(instance_id) = ctx.instance_id.clone() else {
        ctx.recorder.skip("Skipping action tests - no instance ID");
        return;
    };

    let outcome = transport
        .execute(Request::execute_action(&instance_id, ACTION_APPROVE))
        .await;
    ctx.recorder
        .expect("Execute approve action", &outcome, Expectation::Accepted);

    let outcome = transport
        .execute(Request::execute_action(&instance_id, ACTION_COMPLETE))
        .await;
    ctx.recorder
        .expect("Execute complete action", &outcome, Expectation::Accepted);

    let outcome = transport
        .execute(Request::execute_action(&instance_id, ACTION_UNREGISTERED))
        .await;
    ctx.recorder
        .expect("Reject invalid action", &outcome, Expectation::Rejected);
}

/// Negative paths that need no captured identifiers
pub async fn validation(transport: &dyn Transport, ctx: &mut RunContext) {
    section("Testing Validation...");

    let outcome = transport
        .execute(Request::create_definition(
            fixtures::definition_without_initial_state(),
        ))
        .await;
    ctx.recorder
        .expect("Reject invalid definition", &outcome, Expectation::Rejected);

    let outcome = transport
        .execute(Request::get_definition(NONEXISTENT_ID))
        .await;
    ctx.recorder.expect(
        "Handle non-existent definition",
        &outcome,
        Expectation::Rejected,
    );

    let outcome = transport
        .execute(Request::get_instance(NONEXISTENT_ID))
        .await;
    ctx.recorder.expect(
        "Handle non-existent instance",
        &outcome,
        Expectation::Rejected,
    );
}
