mod install;
mod list;

pub use install::install;
pub use list::list;
