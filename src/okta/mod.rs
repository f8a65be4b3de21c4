mod client;
pub(crate) mod common;
mod options;

pub use client::{OktaClient, OktaClientBuilder};
pub use common::ImageUpload;
pub use options::{
    EmailTemplateListOptions, FactorEnrollOptions, FactorVerifyOptions, PolicyCreateOptions,
    PolicyGetOptions, PolicyListOptions,
};
