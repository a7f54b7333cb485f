pub mod port;
pub mod scaffold;
