//! One module per `oxo` subcommand

pub mod evaluate;
pub mod play;
pub mod suggest;
