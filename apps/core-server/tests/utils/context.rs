use core_server::router::start_server;
use core_server::{ServerConfig, ServerError};
use courses_core::config::core_config::AppConfig;
use sql_data_provider::DbConn;
use sql_data_provider::test_utilities::insert_fixture_to_database;
use tokio::task::JoinHandle;

use super::api_clients::Client;

pub struct TestContext {
    pub db: DbConn,
    pub api: Client,
    _handle: JoinHandle<Result<(), ServerError>>,
}

impl TestContext {
    /// Starts a server on an ephemeral port backed by an empty in-memory database.
    /// `additional_config` is merged over the default test configuration.
    pub async fn new(additional_config: Option<String>) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let config = create_config(additional_config);
        let db = sql_data_provider::db_conn(&config.app.database_url)
            .await
            .unwrap();

        let _handle = tokio::spawn({
            let db = db.clone();
            async move { start_server(listener, config, db).await }
        });

        Self {
            db,
            api: Client::new(base_url),
            _handle,
        }
    }

    /// Same as [`TestContext::new`] with Dabs and Gunna, T-514-VEFT in 20153 and 20163,
    /// and Dabs as main teacher of 20153.
    pub async fn new_with_fixture() -> Self {
        let context = Self::new(None).await;
        insert_fixture_to_database(&context.db).await.unwrap();
        context
    }
}

fn create_config(additional_config: Option<String>) -> AppConfig<ServerConfig> {
    let config = indoc::indoc! {"
        courses:
            defaultSemester: '20153'
            pageSize: 10
            englishLanguageMarker: 'en'
        app:
            databaseUrl: 'sqlite::memory:'
            traceLevel: 'debug'
            hideErrorResponseCause: false
            enableServerInfo: true
            enableOpenApi: true
    "}
    .to_owned();

    let configs = [Some(config), additional_config].into_iter().flatten();

    AppConfig::from_yaml(configs).unwrap()
}
