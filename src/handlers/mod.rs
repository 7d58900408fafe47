pub mod new;
pub mod not_found;
pub mod root;

pub use new::new_handler;
pub use not_found::not_found_handler;
pub use root::root_handler;
