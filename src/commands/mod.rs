pub mod announce;
pub mod fetch;
pub mod new;
