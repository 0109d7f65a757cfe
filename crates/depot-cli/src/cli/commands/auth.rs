//! Session command handlers.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use depot_core::auth::AuthSession;
use depot_core::config::Config;
use depot_core::validate;
use depot_types::Credentials;

pub async fn login(config: &Config, username: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => read_password()?,
    };
    if validate::is_blank(username) || validate::is_blank(&password) {
        anyhow::bail!("username and password are required");
    }

    let client = super::client(config);
    let session = client
        .login(&Credentials {
            username: username.to_string(),
            password,
        })
        .await?;
    println!(
        "Logged in as {} (user id {})",
        session.user.username, session.user.id
    );
    Ok(())
}

pub async fn register(config: &Config, username: &str, password: &str) -> Result<()> {
    if validate::is_blank(username) || validate::is_blank(password) {
        anyhow::bail!("username and password are required");
    }
    if !validate::min_length(password, 6) {
        anyhow::bail!("password must be at least 6 characters");
    }

    let client = super::client(config);
    let ack = client
        .register(&Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
        .await?;
    println!(
        "{}",
        ack.message.unwrap_or_else(|| "Account created.".to_string())
    );
    Ok(())
}

pub fn logout() -> Result<()> {
    AuthSession::open_default().logout();
    println!("Logged out.");
    Ok(())
}

pub fn whoami() -> Result<()> {
    match AuthSession::open_default().session() {
        Some(session) => {
            println!("{} (user id {})", session.user.username, session.user.id);
            Ok(())
        }
        None => anyhow::bail!("not logged in; run `depot login <username>`"),
    }
}

fn read_password() -> Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
        std::io::stderr().flush()?;
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
