//! Context management commands.

use std::path::Path;

use anyhow::Result;

use crate::config::{self, ClientConfig, Context};

/// Register a backend under `name`. The first context becomes current.
pub fn create(
    name: &str,
    server: &str,
    timeout_secs: Option<u64>,
    client_config_path: &Path,
) -> Result<()> {
    let ctx = Context::new(name, server, timeout_secs)?;
    let mut config = ClientConfig::load(client_config_path)?;
    config.add_context(ctx)?;
    config.save(client_config_path)?;

    println!("Context \"{}\" created.", name);
    println!("  Server:  {}", config.context(name).map_or("-", |c| c.server.as_str()));
    println!(
        "  Session: {}",
        config::session_path(client_config_path, name).display()
    );
    Ok(())
}

/// List all contexts.
pub fn list(client_config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(client_config_path)?;

    if config.contexts.is_empty() {
        println!("No contexts configured.");
        println!("Run: medadmin context create <name> --server <url>");
        return Ok(());
    }

    println!("{:2} {:20} {:40} {:8}", "", "NAME", "SERVER", "TIMEOUT");
    for ctx in &config.contexts {
        let marker = if ctx.name == config.current_context {
            "*"
        } else {
            " "
        };
        let server = if ctx.server.is_empty() { "-" } else { &ctx.server };
        let timeout = ctx
            .timeout_secs
            .map(|s| format!("{}s", s))
            .unwrap_or_else(|| "-".to_string());
        println!("{:2} {:20} {:40} {:8}", marker, ctx.name, server, timeout);
    }

    Ok(())
}

/// Switch current context.
pub fn use_context(name: &str, client_config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;

    if config.context(name).is_none() {
        anyhow::bail!(
            "Context \"{}\" not found. Run `medadmin context list` to see available contexts.",
            name
        );
    }

    config.current_context = name.to_string();
    config.save(client_config_path)?;
    println!("Switched to context \"{}\".", name);
    Ok(())
}

/// Set properties on a context.
pub fn set(
    name: &str,
    server: Option<&str>,
    timeout_secs: Option<u64>,
    client_config_path: &Path,
) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;

    let ctx = config
        .context_mut(name)
        .ok_or_else(|| anyhow::anyhow!("Context \"{}\" not found.", name))?;

    if let Some(s) = server {
        ctx.set_server(s)?;
    }
    if let Some(t) = timeout_secs {
        ctx.timeout_secs = Some(t);
    }

    config.save(client_config_path)?;
    println!("Context \"{}\" updated.", name);
    Ok(())
}

/// Delete a context and its stored session.
pub fn delete(name: &str, client_config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;

    if config.remove_context(name).is_none() {
        anyhow::bail!("Context \"{}\" not found.", name);
    }
    config.save(client_config_path)?;

    let session = config::session_path(client_config_path, name);
    if session.exists() {
        std::fs::remove_file(&session)?;
    }

    println!("Context \"{}\" deleted.", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_use_delete() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        create("riyadh", "http://riyadh.local/api/", None, &path).unwrap();
        create("jeddah", "http://jeddah.local/api", Some(20), &path).unwrap();
        assert!(create("riyadh", "http://other", None, &path).is_err());
        assert!(create("../etc", "http://other", None, &path).is_err());

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.current_context, "riyadh");
        assert_eq!(config.current().unwrap().server, "http://riyadh.local/api");

        use_context("jeddah", &path).unwrap();
        assert!(use_context("dammam", &path).is_err());
        set("jeddah", Some("http://new/api"), None, &path).unwrap();
        let config = ClientConfig::load(&path).unwrap();
        let current = config.current().unwrap();
        assert_eq!(current.server, "http://new/api");
        assert_eq!(current.timeout_secs, Some(20));

        let session = config::session_path(&path, "jeddah");
        std::fs::create_dir_all(session.parent().unwrap()).unwrap();
        std::fs::write(&session, "staff_token = \"t\"\n").unwrap();
        delete("jeddah", &path).unwrap();
        assert!(!session.exists());
        assert!(ClientConfig::load(&path).unwrap().current().is_none());
        assert!(delete("jeddah", &path).is_err());
    }
}
