use anyhow::Context;
use clap::Parser;
use users_core::{ClientConfig, User, UsersClient};

#[derive(Parser)]
#[clap(about = "Query a reqres-style users API")]
struct Args {
    /// API origin, e.g. http://127.0.0.1:3000. Defaults to $USERS_API_BASE_URL
    /// or https://reqres.in.
    #[clap(long)]
    base_url: Option<String>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Fetch a single user by id.
    Get { id: u64 },
    /// Fetch a page of users.
    List(ListArgs),
    /// Create a user from a JSON document.
    Create {
        #[clap(long)]
        json: String,
    },
    /// Update a user from a JSON document.
    Update {
        #[clap(long)]
        json: String,
    },
}

#[derive(Parser)]
struct ListArgs {
    #[clap(long)]
    page: Option<u32>,
    #[clap(long)]
    per_page: Option<u32>,
    /// Extra query parameter, passed through as given.
    #[clap(long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,
    /// Decode into a typed page instead of printing the raw body.
    #[clap(long)]
    typed: bool,
}

impl ListArgs {
    fn query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }
        query.extend(self.params.iter().cloned());
        query
    }
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got {s:?}"))
}

fn parse_user(json: &str) -> anyhow::Result<User> {
    serde_json::from_str(json).context("invalid user JSON")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = args
        .base_url
        .map_or_else(ClientConfig::from_env, ClientConfig::new);
    let client = UsersClient::from_config(&config)?;
    tracing::debug!(host = %client.host(), "configured client");

    let output = match args.command {
        Command::Get { id } => serde_json::to_string_pretty(&client.get_user(id)?)?,
        Command::List(list) if list.typed => {
            serde_json::to_string_pretty(&client.get_paginated_users_typed(list.query())?)?
        }
        Command::List(list) => client.get_paginated_users(list.query())?,
        Command::Create { json } => {
            serde_json::to_string_pretty(&client.create_user(&parse_user(&json)?)?)?
        }
        Command::Update { json } => {
            serde_json::to_string_pretty(&client.update_user(&parse_user(&json)?)?)?
        }
    };
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_param_splits_on_first_equals() {
        assert_eq!(
            parse_param("q=a=b").unwrap(),
            ("q".to_string(), "a=b".to_string())
        );
        assert!(parse_param("novalue").is_err());
    }

    #[test]
    fn list_query_orders_known_parameters_first() {
        let args = Args::parse_from([
            "users-cli", "list", "--param", "delay=0", "--per-page", "3", "--page", "2",
        ]);
        let Command::List(list) = args.command else {
            panic!("expected list command");
        };
        assert_eq!(
            list.query(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("per_page".to_string(), "3".to_string()),
                ("delay".to_string(), "0".to_string()),
            ]
        );
        assert!(!list.typed);
    }

    #[test]
    fn parse_user_rejects_incomplete_json() {
        assert!(parse_user(r#"{"id":1}"#).is_err());
    }
}
