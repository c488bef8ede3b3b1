//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy the users and posts tables.
    Deploy(DeployCommand),
}

/// Deploy or destroy the users and posts tables.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy the users and posts tables.

By default, this command creates whichever of the two tables is missing.
The users table is keyed by `user_id` and the posts table by `post_id`,
both on-demand (PAY_PER_REQUEST).

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the tables instead of creating them.
    #[arg(long)]
    pub destroy: bool,

    /// Users table name.
    #[arg(long, default_value = "users", env = "USERS_TABLE")]
    pub users_table: String,

    /// Posts table name.
    #[arg(long, default_value = "posts", env = "POSTS_TABLE")]
    pub posts_table: String,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await;

    if cmd.destroy {
        run_destroy(&dynamo_client, &cmd, global).await
    } else {
        run_create(&dynamo_client, &cmd, global).await
    }
}

async fn run_destroy(
    dynamo_client: &aws_sdk_dynamodb::Client,
    cmd: &DeployCommand,
    global: &crate::Global,
) -> Result<()> {
    let mut plans = Vec::new();
    for table_name in [&cmd.users_table, &cmd.posts_table] {
        let current_state = client::get_table_state(dynamo_client, table_name).await?;
        plans.push(planning::calculate_destroy_plan(
            current_state.as_ref(),
            table_name,
        ));
    }

    if !global.is_silent() {
        aprintln!("{}", p_y("Destroy Plan:"));
        for line in plans.iter().flat_map(planning::format_destroy_plan) {
            aprintln!("  {}", p_plan_line(&line));
        }
        aprintln!();
    }

    if !plans.iter().any(planning::DestroyPlan::has_changes) {
        if !global.is_silent() {
            aprintln!("{}", p_g("Nothing to destroy."));
        }
        return Ok(());
    }

    if !cmd.force {
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to delete these tables? ALL DATA WILL BE LOST")
            .default(false)
            .interact()?;

        if !confirmed {
            return Err(DynamodbError::UserCancelled);
        }
    }

    if !global.is_silent() {
        aprintln!("{}", p_b("Deleting tables..."));
    }

    for plan in &plans {
        deploy::execute_destroy_plan(dynamo_client, plan).await?;
    }

    if !global.is_silent() {
        aprintln!("{}", p_g("Tables destroyed successfully."));
    }

    Ok(())
}

async fn run_create(
    dynamo_client: &aws_sdk_dynamodb::Client,
    cmd: &DeployCommand,
    global: &crate::Global,
) -> Result<()> {
    let desired = [
        config::users_table_config(&cmd.users_table),
        config::posts_table_config(&cmd.posts_table),
    ];

    let mut plans = Vec::new();
    for table_config in &desired {
        let current_state = client::get_table_state(dynamo_client, &table_config.table_name).await?;
        plans.push(planning::calculate_deploy_plan(
            current_state.as_ref(),
            table_config,
        ));
    }

    if !global.is_silent() {
        aprintln!("{}", p_c("Deploy Plan:"));
        for line in plans.iter().flat_map(planning::format_deploy_plan) {
            aprintln!("  {}", p_plan_line(&line));
        }
        aprintln!();
    }

    if !plans.iter().any(planning::DeployPlan::has_changes) {
        if !global.is_silent() {
            aprintln!("{}", p_g("Infrastructure is up to date."));
        }
        return Ok(());
    }

    if !cmd.force {
        let confirmed = Confirm::new()
            .with_prompt("Apply these changes?")
            .default(true)
            .interact()?;

        if !confirmed {
            return Err(DynamodbError::UserCancelled);
        }
    }

    if !global.is_silent() {
        aprintln!("{}", p_b("Applying changes..."));
    }

    for plan in &plans {
        deploy::execute_deploy_plan(dynamo_client, plan).await?;
    }

    if !global.is_silent() {
        aprintln!("{}", p_g("Infrastructure deployed successfully."));
    }

    Ok(())
}
