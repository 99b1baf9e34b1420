mod about;
mod contact;
mod hero;
mod projects;

pub use about::*;
pub use contact::*;
pub use hero::*;
pub use projects::*;
