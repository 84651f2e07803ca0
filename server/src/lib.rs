pub mod chat_proxy;
pub mod config;
pub mod error;
pub mod http_server;

#[cfg(test)]
pub(crate) mod test_support;
