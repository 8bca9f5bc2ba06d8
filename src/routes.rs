// Route path constants - single source of truth for all API paths

pub const HOME: &str = "/";
pub const HELLO: &str = "/hello";
pub const HELLO_ITEM: &str = "/hello/{id}";
pub const HEALTH: &str = "/health";
