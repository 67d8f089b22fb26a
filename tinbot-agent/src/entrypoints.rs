//! Built-in entry points
//!
//! The demo workload shipped with the agent: small arithmetic units taking
//! `{x, y}` input arguments. Real deployments register their own units here.

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tokio::time;

use crate::registry::{EntryPoint, EntryPointRegistry};

/// How long `delayed_sum` waits before producing its result
const DELAYED_SUM_PAUSE: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct InputArgs {
    x: f64,
    y: f64,
}

impl InputArgs {
    fn parse(args: Value) -> anyhow::Result<Self> {
        serde_json::from_value(args).context("entry point expects input arguments {x, y}")
    }
}

/// Largest magnitude at which every integer is exactly representable as an
/// f64 (2^53); beyond it the cast to i64 would be lossy or saturate.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Collapses integral results to JSON integers, so `2 + 3` reports `5`
/// rather than `5.0`.
fn number(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT {
        json!(value as i64)
    } else {
        json!(value)
    }
}

struct Sum;

#[async_trait]
impl EntryPoint for Sum {
    async fn invoke(&self, args: Value) -> anyhow::Result<Value> {
        let args = InputArgs::parse(args)?;
        Ok(number(args.x + args.y))
    }
}

struct Prod;

#[async_trait]
impl EntryPoint for Prod {
    async fn invoke(&self, args: Value) -> anyhow::Result<Value> {
        let args = InputArgs::parse(args)?;
        Ok(number(args.x * args.y))
    }
}

/// Like [`Sum`], after a fixed pause. Useful for exercising slow jobs
/// against the tick guard.
struct DelayedSum;

#[async_trait]
impl EntryPoint for DelayedSum {
    async fn invoke(&self, args: Value) -> anyhow::Result<Value> {
        let args = InputArgs::parse(args)?;
        time::sleep(DELAYED_SUM_PAUSE).await;
        Ok(number(args.x + args.y))
    }
}

/// Registers the built-in entry points.
pub fn register_builtin(registry: &mut EntryPointRegistry) {
    registry.register("sum", Arc::new(Sum));
    registry.register("prod", Arc::new(Prod));
    registry.register("delayed_sum", Arc::new(DelayedSum));
}
