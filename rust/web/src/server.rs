use crate::errors::handle_rejection;
use crate::handlers;
use crate::middleware::with_request_logging;
use botnaught_ai::config::Config;
use botnaught_ai::{create_strategy, DecisionError, GameTracker, Strategy};
use std::convert::Infallible;
use std::fmt;
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;
use warp::filters::BoxedFilter;
use warp::reply::{Reply, Response};
use warp::Filter;

/// Largest `/action` body accepted, in bytes.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.host.clone(), config.port)
    }

    /// Loopback on an ephemeral port.
    pub fn for_tests() -> Self {
        Self::new("127.0.0.1", 0)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppContext {
    config: ServerConfig,
    strategy: Arc<dyn Strategy>,
    tracker: Arc<GameTracker>,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("strategy", &self.strategy.name())
            .field("tracker", &self.tracker)
            .finish()
    }
}

impl AppContext {
    pub fn new(config: ServerConfig, strategy: Arc<dyn Strategy>) -> Self {
        Self {
            config,
            strategy,
            tracker: Arc::new(GameTracker::new()),
        }
    }

    /// Build the context described by a loaded [`Config`].
    pub fn from_config(config: &Config) -> Result<Self, ServerError> {
        let strategy = create_strategy(&config.strategy, config.thresholds.clone())?;
        Ok(Self::new(ServerConfig::from_config(config), Arc::from(strategy)))
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn strategy(&self) -> Arc<dyn Strategy> {
        Arc::clone(&self.strategy)
    }

    pub fn tracker(&self) -> Arc<GameTracker> {
        Arc::clone(&self.tracker)
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Strategy error: {0}")]
    Strategy(#[from] DecisionError),
}

#[derive(Debug, Clone)]
pub struct WebServer {
    context: AppContext,
}

impl WebServer {
    pub fn new(config: &Config) -> Result<Self, ServerError> {
        Ok(Self::from_context(AppContext::from_config(config)?))
    }

    pub fn from_context(context: AppContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub async fn start(self) -> Result<ServerHandle, ServerError> {
        let WebServer { context } = self;
        let bind_addr = Self::bind_addr(context.config())?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let routes = Self::routes(&context);
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
        };

        let (addr, server_future) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(bind_addr, shutdown_signal)
            .map_err(Self::map_warp_error)?;

        info!(
            %addr,
            strategy = context.strategy().name(),
            "botnaught listening"
        );

        let task = tokio::spawn(async move {
            server_future.await;
            Ok(())
        });

        Ok(ServerHandle::new(addr, shutdown_tx, task, context))
    }

    fn bind_addr(config: &ServerConfig) -> Result<SocketAddr, ServerError> {
        let host = config.host();

        if let Ok(addr) = host.parse::<SocketAddr>() {
            return Ok(addr);
        }

        if let Ok(ip) = host.parse::<std::net::IpAddr>() {
            return Ok(SocketAddr::new(ip, config.port()));
        }

        let candidate = format!("{}:{}", host, config.port());
        let mut addrs = candidate.to_socket_addrs().map_err(|err| {
            ServerError::ConfigError(format!("failed to resolve address `{candidate}`: {err}"))
        })?;

        addrs.next().ok_or_else(|| {
            ServerError::ConfigError(format!("failed to resolve address `{candidate}`"))
        })
    }

    fn map_warp_error(err: warp::Error) -> ServerError {
        use std::error::Error as StdError;

        // warp -> hyper -> io::Error
        let io_err = std::iter::successors(err.source(), |&source| source.source())
            .find_map(|source| source.downcast_ref::<std::io::Error>());
        if let Some(io_err) = io_err {
            return ServerError::BindError(std::io::Error::new(io_err.kind(), io_err.to_string()));
        }

        ServerError::ConfigError(err.to_string())
    }

    /// Every route the server answers, with request logging and JSON error
    /// bodies for anything that does not match.
    pub fn routes(context: &AppContext) -> BoxedFilter<(Response,)> {
        let api = Self::health_route()
            .or(Self::action_route(context))
            .unify();

        with_request_logging(api)
            .recover(handle_rejection)
            .unify()
            .boxed()
    }

    fn health_route() -> BoxedFilter<(Response,)> {
        warp::path("health")
            .and(warp::get())
            .and(warp::path::end())
            .map(|| handlers::health().into_response())
            .boxed()
    }

    fn action_route(context: &AppContext) -> BoxedFilter<(Response,)> {
        warp::path("action")
            .and(warp::post())
            .and(warp::path::end())
            .and(Self::with_context(context.clone()))
            .and(warp::body::content_length_limit(MAX_BODY_BYTES))
            .and(warp::body::json())
            .and_then(
                |context: AppContext, request: handlers::ActionRequest| async move {
                    Ok::<_, Infallible>(handlers::decide(&context, request))
                },
            )
            .boxed()
    }

    fn with_context(
        context: AppContext,
    ) -> impl Filter<Extract = (AppContext,), Error = Infallible> + Clone {
        warp::any().map(move || context.clone())
    }
}

#[derive(Debug)]
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<Result<(), ServerError>>>,
    context: AppContext,
}

impl ServerHandle {
    fn new(
        addr: SocketAddr,
        shutdown: oneshot::Sender<()>,
        task: JoinHandle<Result<(), ServerError>>,
        context: AppContext,
    ) -> Self {
        Self {
            addr,
            shutdown: Some(shutdown),
            task: Some(task),
            context,
        }
    }

    pub fn address(&self) -> SocketAddr {
        self.addr
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Stop accepting connections and wait for in-flight requests to finish.
    pub async fn shutdown(mut self) -> Result<(), ServerError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }

        if let Some(task) = self.task.take() {
            match task.await {
                Ok(result) => result?,
                Err(err) => {
                    return Err(ServerError::ConfigError(format!(
                        "server task join error: {err}"
                    )))
                }
            }
        }

        info!(addr = %self.addr, "botnaught stopped");
        Ok(())
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }

        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
