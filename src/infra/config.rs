use nestify::nest;
use serde::Deserialize;

use crate::constant::{DEFAULT_PORT, DEFAULT_VIEWER_HEADER};
use crate::utils::Pipe;

nest! {
    #[derive(Clone, Debug, Deserialize)]*
    pub struct Config {
        pub database_url: String,
        pub app: pub struct App {
            pub port: u16,
        },
        pub identity: pub struct Identity {
            /// Header the upstream identity provider puts the viewer id in
            pub viewer_header: String,
        },
    }
}

impl Config {
    /// `config.toml`, then `config.dev.toml` in debug builds, then
    /// environment variables such as `DATABASE_URL` or `APP__PORT`.
    pub fn init() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("app.port", i64::from(DEFAULT_PORT))?
            .set_default("identity.viewer_header", DEFAULT_VIEWER_HEADER)?
            .add_source(config::File::with_name("config").required(false))
            .pipe(|cfg| {
                #[cfg(debug_assertions)]
                let cfg = cfg.add_source(
                    config::File::with_name("config.dev").required(false),
                );

                cfg
            })
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}
