//! Login / logout / whoami commands.

use std::path::Path;

use anyhow::Result;
use medadmin_client::{AuthUser, Credentials, UserType};

use super::{describe, open_client, print_json, Output};

/// Log in to the current context's server as `user_type`.
pub async fn login(
    user_type: UserType,
    email: &str,
    password: &str,
    timeout: Option<u64>,
    client_config_path: &Path,
) -> Result<()> {
    let (ctx, client) = open_client(client_config_path, timeout)?;

    let credentials = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };
    let login = client
        .auth()
        .login(user_type, &credentials)
        .await
        .map_err(|e| anyhow::anyhow!("Login failed: {}", describe(e)))?;

    println!("Logged in as {} ({}).", display_name(&login.user, email), user_type);
    println!("Session saved to context \"{}\".", ctx.name);
    Ok(())
}

/// Log out one account. Without `--as`, the account requests would use.
pub async fn logout(
    user_type: Option<UserType>,
    timeout: Option<u64>,
    client_config_path: &Path,
) -> Result<()> {
    let (ctx, client) = open_client(client_config_path, timeout)?;
    let session = client.session();
    let user_type = session.resolve(user_type)?;

    if !session.is_authenticated(user_type)? {
        println!("Not logged in as {} on context \"{}\".", user_type, ctx.name);
        return Ok(());
    }

    client.auth().logout(user_type).await.map_err(describe)?;
    println!("Logged out {} from context \"{}\".", user_type, ctx.name);
    Ok(())
}

/// Show the signed-in accounts, refreshed from `/{ut}/me` where possible.
pub async fn whoami(output: Output, timeout: Option<u64>, client_config_path: &Path) -> Result<()> {
    let (ctx, client) = open_client(client_config_path, timeout)?;
    let session = client.session();

    let mut accounts = Vec::new();
    for user_type in [UserType::Admin, UserType::Staff] {
        if !session.is_authenticated(user_type)? {
            continue;
        }
        let user = match client.auth().me(user_type).await {
            Ok(user) => user,
            Err(e) if e.is_network() => {
                tracing::warn!("using cached {} user: {}", user_type, e);
                client.auth().cached_user(user_type)?.unwrap_or_default()
            }
            Err(e) => return Err(describe(e)),
        };
        accounts.push((user_type, user));
    }

    if output == Output::Json {
        let map: serde_json::Map<String, serde_json::Value> = accounts
            .iter()
            .map(|(ut, user)| Ok::<_, anyhow::Error>((ut.to_string(), serde_json::to_value(user)?)))
            .collect::<Result<_>>()?;
        return print_json(&map);
    }

    if accounts.is_empty() {
        println!("Not logged in on context \"{}\".", ctx.name);
        println!("Run: medadmin login --as admin|staff");
        return Ok(());
    }
    let active = session.current_user_type()?;
    for (user_type, user) in &accounts {
        let marker = if *user_type == active { "*" } else { " " };
        println!(
            "{} {:6} {:24} {}",
            marker,
            user_type.as_str(),
            display_name(user, "-"),
            user.role.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

fn display_name<'u>(user: &'u AuthUser, fallback: &'u str) -> &'u str {
    user.name
        .as_deref()
        .or(user.email.as_deref())
        .unwrap_or(fallback)
}
