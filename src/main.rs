mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    {
        use dioxus_logger::tracing;
        use std::sync::{Arc, Mutex};

        use crate::server::{config::Config, logging};

        dotenvy::dotenv().ok();

        // Logging isn't up yet, so configuration problems can only go to stderr.
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Invalid configuration: {}", err);
                std::process::exit(1);
            }
        };

        let dispatcher = match logging::init(&config.log) {
            Ok(dispatcher) => dispatcher,
            Err(err) => {
                eprintln!("Failed to initialize logging: {}", err);
                std::process::exit(1);
            }
        };
        let dispatcher = Arc::new(Mutex::new(dispatcher));

        tracing::info!("Starting the application");

        dioxus::serve(move || {
            let config = config.clone();
            let dispatcher = dispatcher.clone();

            async move {
                use tower_http::trace::TraceLayer;

                use crate::server::{
                    data::BrainstormSessionRepository, router, startup, state::AppState,
                };

                let db = match startup::connect_to_database(&config).await {
                    Ok(db) => db,
                    Err(err) => {
                        tracing::error!(error = %err, "The application failed to start");
                        return Err(err.into());
                    }
                };

                let alert_dispatcher = dispatcher.lock().ok().and_then(|mut slot| slot.take());
                if let Some(alert_dispatcher) = alert_dispatcher {
                    let http_client = startup::setup_reqwest_client()?;
                    tokio::spawn(alert_dispatcher.run(http_client));
                }

                let state = AppState::new(Arc::new(BrainstormSessionRepository::new(db)));

                let server_routes = router::router()
                    .with_state(state)
                    .merge(router::docs())
                    .layer(TraceLayer::new_for_http());

                let router = dioxus::server::router(App).merge(server_routes);

                Ok(router)
            }
        })
    }
}
