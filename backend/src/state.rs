use crate::{config::Config, jwt::Jwt};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::sync::Arc;
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone + Send + Sync;

    fn db(&self) -> &Self::Db;
    fn jwt(&self) -> &Jwt;
    fn config(&self) -> &Config;
}

pub struct State {
    database: DbConn,
    jwt: Jwt,
    config: Config,
}

impl State {
    pub async fn new(config: Config) -> anyhow::Result<Arc<Self>> {
        let database = Self::connect_database(&config).await?;
        Ok(Self::with_database(config, database))
    }

    pub fn with_database(config: Config, database: DbConn) -> Arc<Self> {
        Arc::new(Self {
            database,
            jwt: Jwt::new(config.jwt_secret.as_bytes()),
            config,
        })
    }

    async fn connect_database(config: &Config) -> anyhow::Result<DbConn> {
        info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(config.database_url.clone());
        opts.sqlx_logging_level(LevelFilter::Debug)
            .connect_timeout(config.connect_timeout)
            .acquire_timeout(config.connect_timeout);

        let db = Database::connect(opts).await?;

        info!("Connected to database");

        Ok(db)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn jwt(&self) -> &Jwt {
        &self.jwt
    }

    fn config(&self) -> &Config {
        &self.config
    }
}
