use relay_delivery::promisify;
use serde_json::Value;

use crate::cli::{DeliveryMode, GithubArgs, UrlArgs};
use crate::client::{AppContext, CliError, CliResult};

pub(crate) async fn handle_status(ctx: &AppContext, args: UrlArgs) -> CliResult<Value> {
    let url = args.url.trim().to_string();
    if url.is_empty() {
        return Err(CliError::validation("URL cannot be empty"));
    }

    let status = ctx
        .bounded("status", async {
            match ctx.delivery {
                DeliveryMode::Result => ctx.ops.status(&url).await.map_err(CliError::from),
                DeliveryMode::Callback => promisify(|notifier| {
                    ctx.ops.status_callback(url.clone(), notifier.into_callback())
                })
                .await
                .map_err(CliError::from),
            }
        })
        .await?;
    Ok(Value::from(status))
}

pub(crate) async fn handle_github(ctx: &AppContext, args: GithubArgs) -> CliResult<Value> {
    let username = args.username.trim().to_string();
    if username.is_empty() || username.contains('/') {
        return Err(CliError::validation(
            "username must be non-empty and cannot contain '/'",
        ));
    }

    ctx.bounded("github", async {
        match ctx.delivery {
            DeliveryMode::Result => ctx
                .ops
                .github_profile(&username)
                .await
                .map_err(CliError::from),
            DeliveryMode::Callback => promisify(|notifier| {
                ctx.ops
                    .github_profile_callback(username.clone(), notifier.into_callback())
            })
            .await
            .map_err(CliError::from),
        }
    })
    .await
}
