use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::policy::PolicyRuleConditions;

/// A rule attached to a policy.
///
/// Unlike [`Policy`](super::Policy), a rule's `priority` keeps a sent zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRule {
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<PolicyRuleActions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<PolicyRuleConditions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRuleActions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_sign_on: Option<AppSignOnAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enroll: Option<EnrollAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idp: Option<IdpPolicyRuleAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_change: Option<AccessAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_service_password_reset: Option<AccessAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_service_unlock: Option<AccessAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signon: Option<SignOnAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSignOnAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<VerificationMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reauthenticate_in: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub method_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollAction {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_enroll: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdpPolicyRuleAction {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub providers: Vec<IdpPolicyRuleActionProvider>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdpPolicyRuleActionProvider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOnAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor_lifetime: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor_prompt_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remember_device_by_default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_factor: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SignOnSession>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOnSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_session_idle_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_session_lifetime_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_persistent_cookie: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_value, encode_value};
    use serde_json::json;

    #[test]
    fn rule_priority_keeps_explicit_zero() {
        let input = json!({ "name": "first", "priority": 0 });
        let rule: PolicyRule = decode_value(input.clone()).expect("decode");
        assert_eq!(rule.priority, Some(0));
        assert_eq!(encode_value(&rule).expect("encode"), input);
    }

    #[test]
    fn sign_on_rule_round_trips() {
        let input = json!({
            "id": "0pr1",
            "name": "Require MFA",
            "type": "SIGN_ON",
            "status": "ACTIVE",
            "priority": 1,
            "conditions": {
                "network": { "connection": "ZONE", "include": ["nzo1"] },
                "authContext": { "authType": "ANY" }
            },
            "actions": {
                "signon": {
                    "access": "ALLOW",
                    "requireFactor": true,
                    "factorPromptMode": "SESSION",
                    "session": {
                        "maxSessionIdleMinutes": 120,
                        "usePersistentCookie": false
                    }
                }
            }
        });
        let rule: PolicyRule = decode_value(input.clone()).expect("decode");
        let signon = rule
            .actions
            .as_ref()
            .and_then(|a| a.signon.as_ref())
            .expect("signon");
        assert_eq!(signon.require_factor, Some(true));
        assert_eq!(encode_value(&rule).expect("encode"), input);
    }

    #[test]
    fn enroll_action_uses_self_key() {
        let actions: PolicyRuleActions =
            decode_value(json!({ "enroll": { "self": "CHALLENGE" } })).expect("decode");
        assert_eq!(
            actions.enroll.and_then(|e| e.self_enroll).as_deref(),
            Some("CHALLENGE")
        );
    }
}
