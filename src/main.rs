#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use clap::Parser;
    use folio::app::*;
    use folio::config::{ServerConfig, init_tracing};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::CompressionLayer;

    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();
    init_tracing(config.verbose);

    let conf = get_configuration(None).context("reading leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = match config.bind {
        Some(bind) => bind,
        None => leptos_options.site_addr.to_string(),
    };
    let shell_options = leptos_options.clone();
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, move || {
            let val = shell_options.clone();
            move || shell(val.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("serving http")?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
