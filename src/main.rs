#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use leptos::prelude::*;
    use trivia_web::server::{ServerConfig, init_logging, resolve_site_addr, router};

    let _ = dotenvy::dotenv();
    let config = ServerConfig::parse();
    init_logging(config.log_format)?;

    let conf = get_configuration(None).context("failed to read leptos configuration")?;
    let mut leptos_options = conf.leptos_options;
    resolve_site_addr(&config, &mut leptos_options)?;
    let addr = leptos_options.site_addr;

    let app = router(leptos_options);

    tracing::info!(addr = %addr, "listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server exited with error")?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
