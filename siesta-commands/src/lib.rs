pub mod dnd;

use siesta_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub usage: &'static str,
}

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![dnd::dnd()]
}
