use super::OktaAsyncClient;
use crate::error::Error;
use crate::models::PolicyRule;

impl OktaAsyncClient {
    pub async fn list_policy_rules(&self, policy_id: &str) -> Result<Vec<PolicyRule>, Error> {
        let url = self.build_url(&["policies", policy_id, "rules"])?;
        let req = self.http.get(url);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn create_policy_rule(
        &self,
        policy_id: &str,
        rule: &PolicyRule,
    ) -> Result<PolicyRule, Error> {
        let url = self.build_url(&["policies", policy_id, "rules"])?;
        let req = self.json_body(self.http.post(url), rule)?;
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn get_policy_rule(
        &self,
        policy_id: &str,
        rule_id: &str,
    ) -> Result<PolicyRule, Error> {
        let url = self.build_url(&["policies", policy_id, "rules", rule_id])?;
        let req = self.http.get(url);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn update_policy_rule(
        &self,
        policy_id: &str,
        rule_id: &str,
        rule: &PolicyRule,
    ) -> Result<PolicyRule, Error> {
        let url = self.build_url(&["policies", policy_id, "rules", rule_id])?;
        let req = self.json_body(self.http.put(url), rule)?;
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn delete_policy_rule(&self, policy_id: &str, rule_id: &str) -> Result<(), Error> {
        let url = self.build_url(&["policies", policy_id, "rules", rule_id])?;
        let req = self.http.delete(url);
        let resp = self.send(req).await?;
        self.expect_no_content(resp).await
    }

    pub async fn activate_policy_rule(&self, policy_id: &str, rule_id: &str) -> Result<(), Error> {
        self.policy_rule_lifecycle(policy_id, rule_id, "activate").await
    }

    pub async fn deactivate_policy_rule(
        &self,
        policy_id: &str,
        rule_id: &str,
    ) -> Result<(), Error> {
        self.policy_rule_lifecycle(policy_id, rule_id, "deactivate").await
    }

    async fn policy_rule_lifecycle(
        &self,
        policy_id: &str,
        rule_id: &str,
        action: &str,
    ) -> Result<(), Error> {
        let url = self.build_url(&["policies", policy_id, "rules", rule_id, "lifecycle", action])?;
        let req = self.http.post(url);
        let resp = self.send(req).await?;
        self.expect_no_content(resp).await
    }
}
