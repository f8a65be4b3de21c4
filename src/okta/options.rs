#[derive(Debug, Clone, Default)]
pub struct PolicyListOptions {
    /// Required by the API: `OKTA_SIGN_ON`, `PASSWORD`, `MFA_ENROLL`,
    /// `IDP_DISCOVERY`, `ACCESS_POLICY`, `PROFILE_ENROLLMENT`, ...
    pub policy_type: Option<String>,
    pub status: Option<String>,
    pub expand: Option<String>,
}

impl PolicyListOptions {
    pub fn of_type(policy_type: impl Into<String>) -> Self {
        Self {
            policy_type: Some(policy_type.into()),
            ..Self::default()
        }
    }

    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref policy_type) = self.policy_type {
            pairs.push(("type", policy_type.clone()));
        }
        if let Some(ref status) = self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(ref expand) = self.expand {
            pairs.push(("expand", expand.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct PolicyGetOptions {
    pub expand: Option<String>,
}

impl PolicyGetOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref expand) = self.expand {
            pairs.push(("expand", expand.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct PolicyCreateOptions {
    pub activate: Option<bool>,
}

impl PolicyCreateOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(activate) = self.activate {
            pairs.push(("activate", activate.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmailTemplateListOptions {
    pub after: Option<String>,
    pub limit: Option<i32>,
    pub expand: Option<String>,
}

impl EmailTemplateListOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref after) = self.after {
            pairs.push(("after", after.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(ref expand) = self.expand {
            pairs.push(("expand", expand.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct FactorEnrollOptions {
    pub update_phone: Option<bool>,
    pub template_id: Option<String>,
    pub token_lifetime_seconds: Option<i32>,
    pub activate: Option<bool>,
}

impl FactorEnrollOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(update_phone) = self.update_phone {
            pairs.push(("updatePhone", update_phone.to_string()));
        }
        if let Some(ref template_id) = self.template_id {
            pairs.push(("templateId", template_id.clone()));
        }
        if let Some(token_lifetime_seconds) = self.token_lifetime_seconds {
            pairs.push(("tokenLifetimeSeconds", token_lifetime_seconds.to_string()));
        }
        if let Some(activate) = self.activate {
            pairs.push(("activate", activate.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct FactorVerifyOptions {
    pub template_id: Option<String>,
    pub token_lifetime_seconds: Option<i32>,
}

impl FactorVerifyOptions {
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref template_id) = self.template_id {
            pairs.push(("templateId", template_id.clone()));
        }
        if let Some(token_lifetime_seconds) = self.token_lifetime_seconds {
            pairs.push(("tokenLifetimeSeconds", token_lifetime_seconds.to_string()));
        }
        pairs
    }
}
