mod generate;
mod outline;
mod toc;

pub use generate::handle_generate_command;
pub use outline::handle_outline_command;
pub use toc::handle_toc_command;
