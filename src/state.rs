use std::sync::Arc;

use crate::catalog::Catalog;
use crate::expand::Expander;

pub struct AppState {
    pub catalog: Catalog,
    pub expander: Arc<Expander>,
}

pub type Context<'a> = poise::Context<'a, AppState, anyhow::Error>;
