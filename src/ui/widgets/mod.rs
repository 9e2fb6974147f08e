pub mod helper;
pub mod inert;
pub mod player;
