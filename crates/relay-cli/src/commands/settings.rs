use anyhow::anyhow;
use serde_json::Value;

use crate::client::{AppContext, CliError, CliResult};

pub(crate) fn handle_settings(ctx: &AppContext) -> CliResult<Value> {
    serde_json::to_value(ctx.ops.settings())
        .map_err(|err| CliError::failure(anyhow!("failed to serialise settings: {err}")))
}
