pub mod error;

pub use error::*;

use std::time::Duration;

use serde_json::Value;
use wc::{ClientConfig, CookieJar, GroupStageClient, Origin, WcError};

use crate::args::{Cli, Command};

/// Resolves the client configuration: `WC_*` environment variables over the
/// library defaults, then command-line flags over both.
pub fn build_config(cli: &Cli) -> Result<ClientConfig, WcError> {
    apply_flags(ClientConfig::from_env()?, cli)
}

fn apply_flags(mut config: ClientConfig, cli: &Cli) -> Result<ClientConfig, WcError> {
    if let Some(origin) = &cli.origin {
        config = config.with_origin(Origin::parse(origin)?);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if let Some(cookie) = &cli.cookie {
        config = config.with_cookie(cookie.clone());
    }

    config.validate()?;
    Ok(config)
}

pub async fn execute(command: &Command, config: &ClientConfig) -> CommandResult {
    match command {
        Command::Cookie { name, untrimmed } => lookup_cookie(&config.cookie, name, *untrimmed),
        Command::Group { group } => {
            let client = GroupStageClient::new(config)?;
            Ok(pretty(&client.load_group_stage(group).await?))
        }
        Command::Groups { groups } => {
            let client = GroupStageClient::new(config)?;
            let results = client.load_group_stages(groups.iter().cloned()).await;
            summarize_groups(results)
        }
        Command::CountryGroup { group } => {
            let client = GroupStageClient::new(config)?;
            Ok(pretty(&client.load_country_group(group).await?))
        }
        Command::Version => {
            let client = GroupStageClient::new(config)?;
            Ok(pretty(&client.fetch_version().await?))
        }
    }
}

fn lookup_cookie(cookies: &str, name: &str, untrimmed: bool) -> CommandResult {
    let jar = CookieJar::new(cookies);
    let value = if untrimmed {
        jar.get_untrimmed(name)
    } else {
        jar.get(name)
    };

    value
        .map(str::to_string)
        .ok_or_else(|| CommandError::CookieNotFound(name.to_string()))
}

fn summarize_groups(results: Vec<(String, wc::Result<Value>)>) -> CommandResult {
    let total = results.len();
    let mut failed = 0;
    let mut lines = Vec::with_capacity(total);

    for (group, result) in results {
        match result {
            Ok(value) => lines.push(format!("{}: {}", group, value)),
            Err(err) => {
                failed += 1;
                log::error!("group {} failed: {:?}", group, err);
                lines.push(format!("{}: {}", group, CommandError::from(err)));
            }
        }
    }

    let report = lines.join("\n");
    if failed > 0 {
        return Err(CommandError::GroupsFailed { failed, total, report });
    }
    Ok(report)
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
