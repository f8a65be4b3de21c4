use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::common::{decode_variant, discriminator, IncludeExclude};
use crate::codec::zero_as_absent;

/// A policy as returned by `/api/v1/policies`.
///
/// `priority` is zero when the server did not send one; a zero priority is
/// never written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Value>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<PolicyRuleConditions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        with = "zero_as_absent",
        skip_serializing_if = "zero_as_absent::is_absent"
    )]
    pub priority: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
}

impl Policy {
    pub fn new(policy_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            policy_type: Some(policy_type.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// An `IDP_DISCOVERY` policy.
///
/// Both `priority` and `max_clock_skew` treat zero as "not provided".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProviderPolicy {
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Value>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<PolicyRuleConditions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        with = "zero_as_absent",
        skip_serializing_if = "zero_as_absent::is_absent"
    )]
    pub priority: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_link: Option<PolicyAccountLink>,
    #[serde(
        default,
        with = "zero_as_absent",
        skip_serializing_if = "zero_as_absent::is_absent"
    )]
    pub max_clock_skew: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning: Option<Provisioning>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<PolicySubject>,
}

impl IdentityProviderPolicy {
    pub const POLICY_TYPE: &'static str = "IDP_DISCOVERY";

    pub fn new() -> Self {
        Self {
            policy_type: Some(Self::POLICY_TYPE.to_string()),
            ..Self::default()
        }
    }
}

/// Any policy returned by the API, selected by its `type` field.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyPolicy {
    IdentityProvider(IdentityProviderPolicy),
    Policy(Policy),
}

impl AnyPolicy {
    pub fn id(&self) -> Option<&str> {
        match self {
            AnyPolicy::IdentityProvider(p) => p.id.as_deref(),
            AnyPolicy::Policy(p) => p.id.as_deref(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            AnyPolicy::IdentityProvider(p) => p.name.as_deref(),
            AnyPolicy::Policy(p) => p.name.as_deref(),
        }
    }

    pub fn policy_type(&self) -> Option<&str> {
        match self {
            AnyPolicy::IdentityProvider(p) => p.policy_type.as_deref(),
            AnyPolicy::Policy(p) => p.policy_type.as_deref(),
        }
    }

    pub fn priority(&self) -> i64 {
        match self {
            AnyPolicy::IdentityProvider(p) => p.priority,
            AnyPolicy::Policy(p) => p.priority,
        }
    }
}

impl<'de> Deserialize<'de> for AnyPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match discriminator(&value, "type") {
            Some(IdentityProviderPolicy::POLICY_TYPE) => {
                decode_variant(value).map(AnyPolicy::IdentityProvider)
            }
            _ => decode_variant(value).map(AnyPolicy::Policy),
        }
    }
}

impl From<Policy> for AnyPolicy {
    fn from(policy: Policy) -> Self {
        AnyPolicy::Policy(policy)
    }
}

impl From<IdentityProviderPolicy> for AnyPolicy {
    fn from(policy: IdentityProviderPolicy) -> Self {
        AnyPolicy::IdentityProvider(policy)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyAccountLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<PolicyAccountLinkFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyAccountLinkFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<IncludeExclude>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provisioning {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<ProvisioningConditions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<ProvisioningGroups>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_master: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprovisioned: Option<ProvisioningAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspended: Option<ProvisioningAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningGroups {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignments: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_attribute_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySubject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub format: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name_template: Option<PolicyUserNameTemplate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyUserNameTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Conditions shared by policies and policy rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRuleConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<AppAndInstancePolicyRuleCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_context: Option<PolicyRuleAuthContextCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_provider: Option<PasswordPolicyAuthenticationProviderCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clients: Option<IncludeExclude>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<DevicePolicyRuleCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_types: Option<IncludeExclude>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<IncludeExclude>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_provider: Option<IdentityProviderPolicyRuleCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mdm_enrollment: Option<MdmEnrollmentPolicyRuleCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<PolicyNetworkCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people: Option<PolicyPeopleCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformPolicyRuleCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskPolicyRuleCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<RiskScorePolicyRuleCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<IncludeExclude>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_identifier: Option<UserIdentifierPolicyRuleCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_status: Option<UserStatusPolicyRuleCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<IncludeExclude>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<IncludeExclude>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppAndInstancePolicyRuleCondition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<AppInstanceRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<AppInstanceRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInstanceRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRuleAuthContextCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPolicyAuthenticationProviderCondition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// Device state a policy rule matches on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePolicyRuleCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<DevicePolicyRuleConditionPlatform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePolicyRuleConditionPlatform {
    #[serde(
        rename = "supportedMDMFrameworks",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub supported_mdm_frameworks: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProviderPolicyRuleCondition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub idp_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MdmEnrollmentPolicyRuleCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_non_safe_android: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyNetworkCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyPeopleCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<IncludeExclude>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<IncludeExclude>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformPolicyRuleCondition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<PlatformConditionEvaluatorPlatform>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<PlatformConditionEvaluatorPlatform>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConditionEvaluatorPlatform {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<PlatformConditionOperatingSystem>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub platform_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConditionOperatingSystem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub os_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskPolicyRuleCondition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub behaviors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScorePolicyRuleCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentifierPolicyRuleCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<UserIdentifierPattern>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentifierPattern {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusPolicyRuleCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, decode_value, encode_value};
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn policy_round_trip_keeps_nonzero_priority() {
        let input = json!({
            "id": "00p1",
            "name": "Default Policy",
            "type": "OKTA_SIGN_ON",
            "priority": 4,
            "system": true,
            "conditions": { "people": { "groups": { "include": ["00g1"] } } },
            "_links": { "self": { "href": "https://example.okta.com/api/v1/policies/00p1" } }
        });
        let policy: Policy = decode_value(input.clone()).expect("decode");
        assert_eq!(policy.priority, 4);
        assert_eq!(policy.system, Some(true));
        assert_eq!(encode_value(&policy).expect("encode"), input);
    }

    #[test]
    fn policy_without_priority_encodes_without_priority() {
        let policy = Policy::new("PASSWORD", "Password policy");
        assert_eq!(
            encode_value(&policy).expect("encode"),
            json!({ "type": "PASSWORD", "name": "Password policy" })
        );
    }

    #[test]
    fn identity_provider_policy_drops_zero_clock_skew() {
        let input = json!({"id":"p1","priority":7,"maxClockSkew":0,"status":"ACTIVE"});
        let policy: IdentityProviderPolicy = decode_value(input).expect("decode");
        assert_eq!(policy.priority, 7);
        assert_eq!(policy.max_clock_skew, 0);
        assert_eq!(
            encode_value(&policy).expect("encode"),
            json!({"id":"p1","priority":7,"status":"ACTIVE"})
        );
    }

    #[test]
    fn identity_provider_policy_keeps_only_nonzero_designated_field() {
        let policy = IdentityProviderPolicy {
            max_clock_skew: 3,
            ..IdentityProviderPolicy::default()
        };
        assert_eq!(
            encode_value(&policy).expect("encode"),
            json!({ "maxClockSkew": 3 })
        );
    }

    #[test]
    fn identity_provider_policy_rejects_string_clock_skew() {
        let err = decode::<IdentityProviderPolicy>(
            br#"{"id":"p1","priority":1,"maxClockSkew":"five"}"#,
        )
        .expect_err("error");
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn identity_provider_policy_new_sets_type() {
        let policy = IdentityProviderPolicy::new();
        assert_eq!(policy.policy_type.as_deref(), Some("IDP_DISCOVERY"));
    }

    #[test]
    fn any_policy_dispatches_on_type() {
        let idp: AnyPolicy = decode(
            br#"{"id":"p1","type":"IDP_DISCOVERY","maxClockSkew":2,
                "subject":{"matchType":"USERNAME","userNameTemplate":{"template":"idpuser.email"}}}"#,
        )
        .expect("decode");
        match &idp {
            AnyPolicy::IdentityProvider(p) => {
                assert_eq!(p.max_clock_skew, 2);
                let subject = p.subject.as_ref().expect("subject");
                assert_eq!(subject.match_type.as_deref(), Some("USERNAME"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(idp.policy_type(), Some("IDP_DISCOVERY"));

        let sign_on: AnyPolicy =
            decode(br#"{"id":"p2","type":"OKTA_SIGN_ON","priority":1}"#).expect("decode");
        assert!(matches!(sign_on, AnyPolicy::Policy(_)));
        assert_eq!(sign_on.priority(), 1);
        assert_eq!(sign_on.id(), Some("p2"));
    }

    #[test]
    fn any_policy_without_type_is_plain_policy() {
        let policy: AnyPolicy = decode(br#"{"name":"untyped"}"#).expect("decode");
        assert!(matches!(policy, AnyPolicy::Policy(_)));
        assert_eq!(policy.name(), Some("untyped"));
    }

    #[test]
    fn any_policy_propagates_variant_errors() {
        let err = decode::<AnyPolicy>(br#"{"type":"IDP_DISCOVERY","priority":"x"}"#)
            .expect_err("error");
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn any_policy_encodes_untagged() {
        let policy = IdentityProviderPolicy {
            priority: 2,
            ..IdentityProviderPolicy::new()
        };
        let any = AnyPolicy::from(policy);
        assert_eq!(
            encode_value(&any).expect("encode"),
            json!({ "type": "IDP_DISCOVERY", "priority": 2 })
        );
    }

    #[test]
    fn device_condition_uses_mdm_framework_casing() {
        let input = json!({
            "device": {
                "migrated": true,
                "rooted": false,
                "trustLevel": "TRUSTED",
                "platform": { "supportedMDMFrameworks": ["AFW"], "types": ["ANDROID"] }
            }
        });
        let conditions: PolicyRuleConditions = decode_value(input.clone()).expect("decode");
        let device = conditions.device.as_ref().expect("device");
        assert_eq!(device.trust_level.as_deref(), Some("TRUSTED"));
        assert_eq!(
            device.platform.as_ref().expect("platform").supported_mdm_frameworks,
            vec!["AFW".to_string()]
        );
        assert_eq!(encode_value(&conditions).expect("encode"), input);
    }
}
