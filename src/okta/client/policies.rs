use super::OktaClient;
use crate::error::Error;
use crate::models::AnyPolicy;
use crate::okta::common;
use crate::okta::{PolicyCreateOptions, PolicyGetOptions, PolicyListOptions};

impl OktaClient {
    /// Lists policies of one type, decoding each by its `type` field.
    pub fn list_policies(&self, options: &PolicyListOptions) -> Result<Vec<AnyPolicy>, Error> {
        let url = self.build_url(&["policies"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn create_policy(
        &self,
        policy: &AnyPolicy,
        options: &PolicyCreateOptions,
    ) -> Result<AnyPolicy, Error> {
        let url = self.build_url(&["policies"])?;
        let mut req = self.json_body(self.http.post(url), policy)?;
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn get_policy(
        &self,
        policy_id: &str,
        options: &PolicyGetOptions,
    ) -> Result<AnyPolicy, Error> {
        let url = self.build_url(&["policies", policy_id])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn update_policy(&self, policy_id: &str, policy: &AnyPolicy) -> Result<AnyPolicy, Error> {
        let url = self.build_url(&["policies", policy_id])?;
        let req = self.json_body(self.http.put(url), policy)?;
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn delete_policy(&self, policy_id: &str) -> Result<(), Error> {
        let url = self.build_url(&["policies", policy_id])?;
        let req = self.http.delete(url);
        let resp = self.send(req)?;
        self.expect_no_content(resp)
    }

    pub fn activate_policy(&self, policy_id: &str) -> Result<(), Error> {
        self.policy_lifecycle(policy_id, "activate")
    }

    pub fn deactivate_policy(&self, policy_id: &str) -> Result<(), Error> {
        self.policy_lifecycle(policy_id, "deactivate")
    }

    fn policy_lifecycle(&self, policy_id: &str, action: &str) -> Result<(), Error> {
        let url = self.build_url(&["policies", policy_id, "lifecycle", action])?;
        let req = self.http.post(url);
        let resp = self.send(req)?;
        self.expect_no_content(resp)
    }
}
