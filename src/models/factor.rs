use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::common::{decode_variant, discriminator};

/// Fields shared by every enrolled or enrollable factor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFactor {
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Value>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify: Option<VerifyFactorRequest>,
}

/// A factor together with its type-specific profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedUserFactor<P> {
    #[serde(flatten)]
    pub factor: UserFactor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<P>,
}

impl<P> TypedUserFactor<P> {
    fn enrollable(factor_type: &str, provider: &str, profile: P) -> Self {
        Self {
            factor: UserFactor {
                factor_type: Some(factor_type.to_string()),
                provider: Some(provider.to_string()),
                ..UserFactor::default()
            },
            profile: Some(profile),
        }
    }
}

pub type SmsUserFactor = TypedUserFactor<SmsUserFactorProfile>;
pub type CallUserFactor = TypedUserFactor<CallUserFactorProfile>;
pub type EmailUserFactor = TypedUserFactor<EmailUserFactorProfile>;
pub type PushUserFactor = TypedUserFactor<PushUserFactorProfile>;
pub type TotpUserFactor = TypedUserFactor<TotpUserFactorProfile>;
pub type HotpUserFactor = TypedUserFactor<HotpUserFactorProfile>;
pub type SecurityQuestionUserFactor = TypedUserFactor<SecurityQuestionUserFactorProfile>;
pub type TokenUserFactor = TypedUserFactor<TokenUserFactorProfile>;
pub type HardwareUserFactor = TypedUserFactor<HardwareUserFactorProfile>;
pub type WebUserFactor = TypedUserFactor<WebUserFactorProfile>;
pub type WebAuthnUserFactor = TypedUserFactor<WebAuthnUserFactorProfile>;
pub type U2fUserFactor = TypedUserFactor<U2fUserFactorProfile>;
pub type CustomUserFactor = TypedUserFactor<Value>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsUserFactorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallUserFactorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_extension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailUserFactorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushUserFactorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotpUserFactorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotpUserFactorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_secret: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityQuestionUserFactorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUserFactorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareUserFactorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebUserFactorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebAuthnUserFactorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct U2fUserFactorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}

/// Any factor returned by the API, selected by its `factorType` field.
///
/// Unknown factor types decode into [`AnyFactor::Custom`] with the profile
/// left as raw JSON.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyFactor {
    Sms(SmsUserFactor),
    Call(CallUserFactor),
    Email(EmailUserFactor),
    Push(PushUserFactor),
    Totp(TotpUserFactor),
    Hotp(HotpUserFactor),
    SecurityQuestion(SecurityQuestionUserFactor),
    Token(TokenUserFactor),
    Hardware(HardwareUserFactor),
    Web(WebUserFactor),
    WebAuthn(WebAuthnUserFactor),
    U2f(U2fUserFactor),
    Custom(CustomUserFactor),
}

impl AnyFactor {
    pub fn sms(phone_number: impl Into<String>) -> Self {
        AnyFactor::Sms(TypedUserFactor::enrollable(
            "sms",
            "OKTA",
            SmsUserFactorProfile {
                phone_number: Some(phone_number.into()),
            },
        ))
    }

    pub fn call(phone_number: impl Into<String>) -> Self {
        AnyFactor::Call(TypedUserFactor::enrollable(
            "call",
            "OKTA",
            CallUserFactorProfile {
                phone_number: Some(phone_number.into()),
                phone_extension: None,
            },
        ))
    }

    pub fn email(email: impl Into<String>) -> Self {
        AnyFactor::Email(TypedUserFactor::enrollable(
            "email",
            "OKTA",
            EmailUserFactorProfile {
                email: Some(email.into()),
            },
        ))
    }

    pub fn security_question(question: impl Into<String>, answer: impl Into<String>) -> Self {
        AnyFactor::SecurityQuestion(TypedUserFactor::enrollable(
            "question",
            "OKTA",
            SecurityQuestionUserFactorProfile {
                question: Some(question.into()),
                answer: Some(answer.into()),
                question_text: None,
            },
        ))
    }

    /// A software TOTP factor for the given provider (`OKTA` or `GOOGLE`).
    pub fn totp(provider: impl AsRef<str>) -> Self {
        AnyFactor::Totp(TypedUserFactor {
            factor: UserFactor {
                factor_type: Some("token:software:totp".to_string()),
                provider: Some(provider.as_ref().to_string()),
                ..UserFactor::default()
            },
            profile: None,
        })
    }

    pub fn push() -> Self {
        AnyFactor::Push(TypedUserFactor {
            factor: UserFactor {
                factor_type: Some("push".to_string()),
                provider: Some("OKTA".to_string()),
                ..UserFactor::default()
            },
            profile: None,
        })
    }

    pub fn factor(&self) -> &UserFactor {
        match self {
            AnyFactor::Sms(f) => &f.factor,
            AnyFactor::Call(f) => &f.factor,
            AnyFactor::Email(f) => &f.factor,
            AnyFactor::Push(f) => &f.factor,
            AnyFactor::Totp(f) => &f.factor,
            AnyFactor::Hotp(f) => &f.factor,
            AnyFactor::SecurityQuestion(f) => &f.factor,
            AnyFactor::Token(f) => &f.factor,
            AnyFactor::Hardware(f) => &f.factor,
            AnyFactor::Web(f) => &f.factor,
            AnyFactor::WebAuthn(f) => &f.factor,
            AnyFactor::U2f(f) => &f.factor,
            AnyFactor::Custom(f) => &f.factor,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.factor().id.as_deref()
    }

    pub fn factor_type(&self) -> Option<&str> {
        self.factor().factor_type.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.factor().status.as_deref()
    }
}

impl<'de> Deserialize<'de> for AnyFactor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match discriminator(&value, "factorType") {
            Some("sms") => decode_variant(value).map(AnyFactor::Sms),
            Some("call") => decode_variant(value).map(AnyFactor::Call),
            Some("email") => decode_variant(value).map(AnyFactor::Email),
            Some("push") => decode_variant(value).map(AnyFactor::Push),
            Some("token:software:totp") => decode_variant(value).map(AnyFactor::Totp),
            Some("token:hotp") => decode_variant(value).map(AnyFactor::Hotp),
            Some("question") => decode_variant(value).map(AnyFactor::SecurityQuestion),
            Some("token") => decode_variant(value).map(AnyFactor::Token),
            Some("token:hardware") => decode_variant(value).map(AnyFactor::Hardware),
            Some("web") => decode_variant(value).map(AnyFactor::Web),
            Some("webauthn") => decode_variant(value).map(AnyFactor::WebAuthn),
            Some("u2f") => decode_variant(value).map(AnyFactor::U2f),
            _ => decode_variant(value).map(AnyFactor::Custom),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivateFactorRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attestation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyFactorRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attestation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_pass_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyUserFactorResponse {
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Value>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor_result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor_result_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, decode_value, encode_value};
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn sms_factor_decodes_phone_profile() {
        let factor: AnyFactor = decode(
            br#"{"id":"mbl1","factorType":"sms","provider":"OKTA","status":"ACTIVE",
                "profile":{"phoneNumber":"+1-555-415-1337"}}"#,
        )
        .expect("decode");
        match &factor {
            AnyFactor::Sms(sms) => {
                let profile = sms.profile.as_ref().expect("profile");
                assert_eq!(profile.phone_number.as_deref(), Some("+1-555-415-1337"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(factor.id(), Some("mbl1"));
        assert_eq!(factor.status(), Some("ACTIVE"));
    }

    #[test]
    fn totp_factor_dispatches_on_compound_type() {
        let factor: AnyFactor = decode(
            br#"{"id":"ost1","factorType":"token:software:totp","provider":"GOOGLE",
                "profile":{"credentialId":"dade.murphy@example.com"}}"#,
        )
        .expect("decode");
        assert!(matches!(factor, AnyFactor::Totp(_)));
        assert_eq!(factor.factor().provider.as_deref(), Some("GOOGLE"));
    }

    #[test]
    fn unknown_factor_type_keeps_raw_profile() {
        let input = json!({
            "id": "cst1",
            "factorType": "claims_provider",
            "profile": { "issuer": "https://idp.example.com" }
        });
        let factor: AnyFactor = decode_value(input.clone()).expect("decode");
        match &factor {
            AnyFactor::Custom(custom) => {
                assert_eq!(
                    custom.profile.as_ref().and_then(|p| p.get("issuer")),
                    Some(&json!("https://idp.example.com"))
                );
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(encode_value(&factor).expect("encode"), input);
    }

    #[test]
    fn factor_without_type_is_custom() {
        let factor: AnyFactor = decode(br#"{"id":"x"}"#).expect("decode");
        assert!(matches!(factor, AnyFactor::Custom(_)));
        assert_eq!(factor.factor_type(), None);
    }

    #[test]
    fn sms_constructor_encodes_enroll_body() {
        assert_eq!(
            encode_value(&AnyFactor::sms("+1-555-415-1337")).expect("encode"),
            json!({
                "factorType": "sms",
                "provider": "OKTA",
                "profile": { "phoneNumber": "+1-555-415-1337" }
            })
        );
    }

    #[test]
    fn question_constructor_encodes_answer() {
        assert_eq!(
            encode_value(&AnyFactor::security_question("disliked_food", "mayonnaise"))
                .expect("encode"),
            json!({
                "factorType": "question",
                "provider": "OKTA",
                "profile": { "question": "disliked_food", "answer": "mayonnaise" }
            })
        );
    }

    #[test]
    fn malformed_typed_profile_is_decode_error() {
        let err = decode::<AnyFactor>(br#"{"factorType":"sms","profile":{"phoneNumber":7}}"#)
            .expect_err("error");
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn verify_response_reads_result() {
        let resp: VerifyUserFactorResponse = decode(
            br#"{"factorResult":"WAITING","expiresAt":"2015-04-01T15:57:32.000Z",
                "_links":{"poll":{"href":"https://example.okta.com/poll"}}}"#,
        )
        .expect("decode");
        assert_eq!(resp.factor_result.as_deref(), Some("WAITING"));
        assert!(resp.links.is_some());
    }
}
