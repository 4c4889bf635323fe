//! Client-side context management.
//!
//! Reads/writes `~/.medadmin/config.toml`. Each context's session lives
//! next to it in `sessions/<name>.toml`, so a context name must be usable
//! as a file name.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _};
use serde::{Deserialize, Serialize};

/// A single context: one backend the CLI can talk to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Context name (e.g. "riyadh-prod").
    pub name: String,

    /// API base URL without a trailing slash (e.g. "https://assets.example.sa/api").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server: String,

    /// Request timeout in seconds; unset means the HTTP client default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Context {
    pub fn new(name: &str, server: &str, timeout_secs: Option<u64>) -> anyhow::Result<Self> {
        check_name(name)?;
        Ok(Self {
            name: name.to_string(),
            server: normalize_server(server)?,
            timeout_secs,
        })
    }

    pub fn set_server(&mut self, server: &str) -> anyhow::Result<()> {
        self.server = normalize_server(server)?;
        Ok(())
    }
}

/// Letters, digits, `-`, `_` and `.`, not starting with a dot.
fn check_name(name: &str) -> anyhow::Result<()> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if !valid {
        bail!(
            "Invalid context name \"{}\": use letters, digits, '-', '_' or '.'.",
            name
        );
    }
    Ok(())
}

/// Empty stays empty (set later); anything else must be an http(s) URL.
fn normalize_server(server: &str) -> anyhow::Result<String> {
    let server = server.trim().trim_end_matches('/');
    if !server.is_empty() && !server.starts_with("http://") && !server.starts_with("https://") {
        bail!("Invalid server \"{}\": expected an http:// or https:// URL.", server);
    }
    Ok(server.to_string())
}

/// Client configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Name of the currently active context.
    #[serde(rename = "current-context", default)]
    pub current_context: String,

    #[serde(default)]
    pub contexts: Vec<Context>,
}

impl ClientConfig {
    /// ~/.medadmin/config.toml
    pub fn default_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// A missing file is an empty config.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
        };
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))
    }

    pub fn current(&self) -> Option<&Context> {
        self.context(&self.current_context)
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    pub fn context_mut(&mut self, name: &str) -> Option<&mut Context> {
        self.contexts.iter_mut().find(|c| c.name == name)
    }

    /// Register a new context. The first one registered becomes current.
    pub fn add_context(&mut self, ctx: Context) -> anyhow::Result<()> {
        if self.context(&ctx.name).is_some() {
            bail!(
                "Context \"{}\" already exists. Use `medadmin context set {}` to change it.",
                ctx.name,
                ctx.name
            );
        }
        if self.current_context.is_empty() {
            self.current_context = ctx.name.clone();
        }
        self.contexts.push(ctx);
        Ok(())
    }

    /// Drop a context, unselecting it if it was current.
    pub fn remove_context(&mut self, name: &str) -> Option<Context> {
        let index = self.contexts.iter().position(|c| c.name == name)?;
        if self.current_context == name {
            self.current_context.clear();
        }
        Some(self.contexts.remove(index))
    }
}

/// Session file of context `name`, beside the config file.
pub fn session_path(config_path: &Path, name: &str) -> PathBuf {
    let dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    dir.join("sessions").join(format!("{}.toml", name))
}

fn config_dir() -> PathBuf {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join(".medadmin")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(name: &str, server: &str) -> Context {
        Context::new(name, server, None).unwrap()
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load(&dir.path().join("none.toml")).unwrap();
        assert!(config.current_context.is_empty());
        assert!(config.contexts.is_empty());
        assert!(config.current().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = ClientConfig::default();
        config
            .add_context(Context::new("clinic", "http://localhost:8000/api/", Some(30)).unwrap())
            .unwrap();
        config.save(&path).unwrap();

        let back = ClientConfig::load(&path).unwrap();
        assert_eq!(back.current_context, "clinic");
        assert_eq!(back.contexts.len(), 1);
        assert_eq!(back.current().unwrap().server, "http://localhost:8000/api");
        assert_eq!(back.current().unwrap().timeout_secs, Some(30));
    }

    #[test]
    fn test_bad_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "contexts = 3").unwrap();

        let err = ClientConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("config.toml"));
    }

    #[test]
    fn test_add_and_remove() {
        let mut config = ClientConfig::default();
        config.add_context(ctx("a", "http://one")).unwrap();
        config.add_context(ctx("b", "http://two")).unwrap();
        assert!(config.add_context(ctx("a", "http://three")).is_err());
        assert_eq!(config.current_context, "a");
        assert_eq!(config.context("a").unwrap().server, "http://one");

        let removed = config.remove_context("a").unwrap();
        assert_eq!(removed.name, "a");
        assert!(config.current_context.is_empty());
        assert!(config.remove_context("a").is_none());
        assert_eq!(config.contexts.len(), 1);
    }

    #[test]
    fn test_context_names_are_file_safe() {
        for name in ["riyadh", "jeddah-2", "dev.local", "east_zone"] {
            assert!(Context::new(name, "", None).is_ok(), "{}", name);
        }
        for name in ["", "..", ".hidden", "a/b", "a\\b", "مكة"] {
            assert!(Context::new(name, "", None).is_err(), "{}", name);
        }
    }

    #[test]
    fn test_server_must_be_http() {
        assert_eq!(ctx("a", " https://x.sa/api// ").server, "https://x.sa/api");
        assert_eq!(ctx("a", "").server, "");
        assert!(Context::new("a", "ftp://x.sa", None).is_err());

        let mut c = ctx("a", "http://old");
        c.set_server("http://new/").unwrap();
        assert_eq!(c.server, "http://new");
        assert!(c.set_server("new").is_err());
        assert_eq!(c.server, "http://new");
    }

    #[test]
    fn test_session_path_beside_config() {
        let path = session_path(Path::new("/home/u/.medadmin/config.toml"), "clinic");
        assert_eq!(path, PathBuf::from("/home/u/.medadmin/sessions/clinic.toml"));
    }
}
