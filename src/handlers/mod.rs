pub mod health;
pub mod hello;
pub mod hello_id;
pub mod home;

pub use health::health_handler;
pub use hello::hello_handler;
pub use hello_id::hello_id_handler;
pub use home::home_handler;
