//! Command line interface.
//!
//! Every flag can also be supplied through its `FRONTPAGE_*` environment variable.

use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tokio::net::TcpListener;

use crate::html::{self, User};
use crate::session::{Anonymous, Identity, Preview};
use crate::{AppState, Error, Result};

#[derive(Parser, Debug)]
#[command(name = "frontpage", version, about = "Serve and render the frontpage index view")]
pub struct Cli {
    /// Log at debug level regardless of FRONTPAGE_LOG
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Render the index page for a JSON context and print it
    Render(RenderArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "FRONTPAGE_BIND", default_value = "0.0.0.0:3000")]
    pub bind: String,

    /// Directory holding `styles/` and `scripts/`
    #[arg(long, env = "FRONTPAGE_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Render every request as this user (JSON), to preview the signed-in page
    #[arg(long, env = "FRONTPAGE_PREVIEW_USER")]
    pub preview_user: Option<String>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Rendering context as JSON, e.g. '{"user": {"id": 1}}'. Read from stdin if omitted.
    #[arg(long)]
    pub context: Option<String>,
}

pub async fn serve(args: ServeArgs) -> Result<()> {
    let identity: Arc<dyn Identity> = match args.preview_user {
        Some(user) => {
            let user: User = serde_json::from_str(&user).map_err(Error::PreviewUser)?;
            tracing::warn!(?user, "previewing every request as a signed-in user");
            Arc::new(Preview(user))
        }
        None => Arc::new(Anonymous),
    };
    let state = AppState::new(identity, args.static_dir);

    let listener = TcpListener::bind(&args.bind)
        .await
        .map_err(|source| Error::Bind {
            addr: args.bind.clone(),
            source,
        })?;
    tracing::info!(addr = %args.bind, "listening");

    axum::serve(listener, crate::app(state))
        .await
        .map_err(Error::Serve)
}

pub fn render(args: RenderArgs) -> Result<String> {
    let raw = match args.context {
        Some(context) => context,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(Error::ReadContext)?;
            buf
        }
    };
    render_context(&raw)
}

/// Render the index page for a JSON context. Blank input is an empty context.
pub fn render_context(raw: &str) -> Result<String> {
    let ctx: html::Context = if raw.trim().is_empty() {
        html::Context::default()
    } else {
        serde_json::from_str(raw).map_err(Error::Context)?
    };
    Ok(html::pages::index(&ctx).into_string())
}
