use super::OktaClient;
use crate::error::Error;
use crate::models::{
    ActivateFactorRequest, AnyFactor, SecurityQuestion, VerifyFactorRequest,
    VerifyUserFactorResponse,
};
use crate::okta::common;
use crate::okta::{FactorEnrollOptions, FactorVerifyOptions};

impl OktaClient {
    /// Lists the factors enrolled for a user.
    pub fn list_factors(&self, user_id: &str) -> Result<Vec<AnyFactor>, Error> {
        let url = self.build_url(&["users", user_id, "factors"])?;
        let req = self.http.get(url);
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn enroll_factor(
        &self,
        user_id: &str,
        factor: &AnyFactor,
        options: &FactorEnrollOptions,
    ) -> Result<AnyFactor, Error> {
        let url = self.build_url(&["users", user_id, "factors"])?;
        let mut req = self.json_body(self.http.post(url), factor)?;
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    /// Lists the factors a user may enroll.
    pub fn list_supported_factors(&self, user_id: &str) -> Result<Vec<AnyFactor>, Error> {
        let url = self.build_url(&["users", user_id, "factors", "catalog"])?;
        let req = self.http.get(url);
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn list_supported_security_questions(
        &self,
        user_id: &str,
    ) -> Result<Vec<SecurityQuestion>, Error> {
        let url = self.build_url(&["users", user_id, "factors", "questions"])?;
        let req = self.http.get(url);
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn get_factor(&self, user_id: &str, factor_id: &str) -> Result<AnyFactor, Error> {
        let url = self.build_url(&["users", user_id, "factors", factor_id])?;
        let req = self.http.get(url);
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn delete_factor(&self, user_id: &str, factor_id: &str) -> Result<(), Error> {
        let url = self.build_url(&["users", user_id, "factors", factor_id])?;
        let req = self.http.delete(url);
        let resp = self.send(req)?;
        self.expect_no_content(resp)
    }

    pub fn activate_factor(
        &self,
        user_id: &str,
        factor_id: &str,
        request: &ActivateFactorRequest,
    ) -> Result<AnyFactor, Error> {
        let url = self.build_url(&[
            "users",
            user_id,
            "factors",
            factor_id,
            "lifecycle",
            "activate",
        ])?;
        let req = self.json_body(self.http.post(url), request)?;
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    /// Polls a push or callback verification started by [`verify_factor`](Self::verify_factor).
    pub fn get_factor_transaction_status(
        &self,
        user_id: &str,
        factor_id: &str,
        transaction_id: &str,
    ) -> Result<VerifyUserFactorResponse, Error> {
        let url = self.build_url(&[
            "users",
            user_id,
            "factors",
            factor_id,
            "transactions",
            transaction_id,
        ])?;
        let req = self.http.get(url);
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn verify_factor(
        &self,
        user_id: &str,
        factor_id: &str,
        request: &VerifyFactorRequest,
        options: &FactorVerifyOptions,
    ) -> Result<VerifyUserFactorResponse, Error> {
        let url = self.build_url(&["users", user_id, "factors", factor_id, "verify"])?;
        let mut req = self.json_body(self.http.post(url), request)?;
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }
}
