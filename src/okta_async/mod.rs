mod client;

pub use client::{OktaAsyncClient, OktaAsyncClientBuilder};
