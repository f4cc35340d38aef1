#[macro_use]
mod macros;

mod config;
mod health;
mod inquiry;
mod metadata;
mod post;
mod routes;

use actix::prelude::*;

pub use config::*;
pub use health::*;
pub use inquiry::*;
pub use metadata::*;
pub use post::*;
pub use routes::*;

#[derive(Clone)]
pub struct GlobalState {
    pub config: SiteConfig,
    pub store: Addr<crate::store::Store>,
}

impl GlobalState {
    pub fn new(config: SiteConfig) -> Result<Self, crate::api::APIError> {
        Ok(Self {
            store: crate::store::Store::new(&config)?.start(),
            config,
        })
    }
}
