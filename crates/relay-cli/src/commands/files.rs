use relay_delivery::promisify;
use relay_ops::{first_line, first_line_callback, funny_file, funny_file_bridged};
use serde_json::Value;

use crate::cli::{DeliveryMode, PathArgs};
use crate::client::{AppContext, CliError, CliResult};

pub(crate) async fn handle_first_line(ctx: &AppContext, args: PathArgs) -> CliResult<Value> {
    let path = require_path(args)?;
    let line = ctx
        .bounded("first-line", async {
            match ctx.delivery {
                DeliveryMode::Result => first_line(&path).await.map_err(CliError::from),
                DeliveryMode::Callback => promisify(|notifier| {
                    first_line_callback(path.clone(), notifier.into_callback())
                })
                .await
                .map_err(CliError::from),
            }
        })
        .await?;
    Ok(Value::String(line))
}

pub(crate) async fn handle_funny(ctx: &AppContext, args: PathArgs) -> CliResult<Value> {
    let path = require_path(args)?;
    let text = ctx
        .bounded("funny", async {
            match ctx.delivery {
                DeliveryMode::Result => funny_file(&path).await.map_err(CliError::from),
                DeliveryMode::Callback => funny_file_bridged(path.clone())
                    .await
                    .map_err(CliError::from),
            }
        })
        .await?;
    Ok(Value::String(text))
}

fn require_path(args: PathArgs) -> CliResult<std::path::PathBuf> {
    if args.path.as_os_str().is_empty() {
        return Err(CliError::validation("file path cannot be empty"));
    }
    Ok(args.path)
}
