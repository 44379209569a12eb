pub mod autoreply;
