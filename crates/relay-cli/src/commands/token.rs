use relay_delivery::promisify;
use relay_ops::{random_token, random_token_callback};
use serde_json::Value;

use crate::cli::DeliveryMode;
use crate::client::{AppContext, CliError, CliResult};

pub(crate) async fn handle_token(ctx: &AppContext) -> CliResult<Value> {
    let token = ctx
        .bounded("token", async {
            match ctx.delivery {
                DeliveryMode::Result => random_token().await.map_err(CliError::from),
                DeliveryMode::Callback => {
                    promisify(|notifier| random_token_callback(notifier.into_callback()))
                        .await
                        .map_err(CliError::from)
                }
            }
        })
        .await?;
    Ok(Value::String(token))
}
