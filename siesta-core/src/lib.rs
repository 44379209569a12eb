pub mod config;
pub mod policy;
pub mod state;

use crate::config::Config;
use crate::state::ReplyState;

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub config: Config,
    pub state: ReplyState,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
