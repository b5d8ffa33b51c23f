use std::{process, sync::Arc, time::Duration};

use blog_home::{
    application::{
        chrome::ChromeService,
        error::AppError,
        home::{HomeOptions, HomeService},
    },
    config::{self, Settings},
    infra::{
        content::StaticContentRepo,
        error::InfraError,
        http::{self, HttpState},
        telemetry,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::Check(_) => run_check(settings).await,
    }
}

async fn run_serve(settings: Settings) -> Result<(), AppError> {
    let posts = StaticContentRepo::load(&settings.content.path).await?;
    let state = HttpState {
        home: Arc::new(HomeService::new(
            Arc::new(posts),
            HomeOptions::from_settings(&settings),
        )),
        chrome: Arc::new(ChromeService::new(&settings.site)),
    };

    let router = http::build_router(state);
    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(InfraError::from)?;
    info!(addr = %settings.server.addr, "listening");

    let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
    let server = axum::serve(listener, router.into_make_service()).with_graceful_shutdown(
        async move {
            let _ = shutdown_rx.changed().await;
        },
    );
    let mut server = Box::pin(server.into_future());

    tokio::select! {
        result = &mut server => return result.map_err(|err| AppError::from(InfraError::from(err))),
        _ = shutdown_signal() => {}
    }

    info!("shutdown requested, draining connections");
    let _ = shutdown_tx.send(true);
    drain(server, settings.server.graceful_shutdown).await
}

async fn drain<F>(server: F, deadline: Duration) -> Result<(), AppError>
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    match tokio::time::timeout(deadline, server).await {
        Ok(result) => result.map_err(|err| AppError::from(InfraError::from(err))),
        Err(_) => {
            warn!(
                timeout_secs = deadline.as_secs(),
                "graceful shutdown deadline elapsed, dropping open connections"
            );
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

async fn run_check(settings: Settings) -> Result<(), AppError> {
    let posts = StaticContentRepo::load(&settings.content.path).await?;
    if posts.is_empty() {
        warn!(path = %settings.content.path.display(), "content file has no posts");
    }
    info!(
        posts = posts.len(),
        page_size = settings.content.page_size.get(),
        pages = posts.page_count(settings.content.page_size),
        addr = %settings.server.addr,
        "configuration and content are valid"
    );
    Ok(())
}
