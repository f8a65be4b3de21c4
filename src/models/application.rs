use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSettingsNotes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enduser: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSettingsNotifications {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpn: Option<ApplicationSettingsNotificationsVpn>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSettingsNotificationsVpn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<ApplicationSettingsNotificationsVpnNetwork>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSettingsNotificationsVpnNetwork {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
}

/// Template-specific `app` settings; keys depend on the application's sign-on
/// mode, so they are kept as raw JSON.
pub type ApplicationSettingsApplication = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaApplicationSettingsApplication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkbox: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_url_regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_field: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaApplicationSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<SwaApplicationSettingsApplication>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implicit_assignment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_hook_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<ApplicationSettingsNotes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<ApplicationSettingsNotifications>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlApplicationSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<ApplicationSettingsApplication>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implicit_assignment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_hook_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<ApplicationSettingsNotes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<ApplicationSettingsNotifications>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_on: Option<SamlApplicationSettingsSignOn>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlApplicationSettingsSignOn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assertion_signed: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_statements: Vec<SamlAttributeStatement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authn_context_class_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_relay_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest_algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honor_force_authn: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idp_issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_compressed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_signed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sp_issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sso_acs_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sso_acs_url_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name_id_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name_id_template: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlAttributeStatement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub statement_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

/// An OAuth 2.0 client as embedded in token and grant resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OAuth2Client {
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, decode_value, encode_value};
    use serde_json::json;

    #[test]
    fn oauth2_client_uses_snake_case() {
        let client: OAuth2Client = decode(
            br#"{"client_id":"0oa1","client_name":"Portal","logo_uri":"https://example.com/l.png"}"#,
        )
        .expect("decode");
        assert_eq!(client.client_id.as_deref(), Some("0oa1"));
        assert_eq!(client.client_name.as_deref(), Some("Portal"));
        assert!(client.client_uri.is_none());
    }

    #[test]
    fn saml_settings_round_trip() {
        let input = json!({
            "app": { "baseUrl": "https://sp.example.com" },
            "implicitAssignment": false,
            "notes": { "admin": "owned by IT" },
            "signOn": {
                "ssoAcsUrl": "https://sp.example.com/acs",
                "audience": "urn:example:sp",
                "responseSigned": true,
                "attributeStatements": [
                    { "type": "EXPRESSION", "name": "email", "values": ["user.email"] }
                ]
            }
        });
        let settings: SamlApplicationSettings = decode_value(input.clone()).expect("decode");
        let sign_on = settings.sign_on.as_ref().expect("sign on");
        assert_eq!(sign_on.response_signed, Some(true));
        assert_eq!(sign_on.attribute_statements.len(), 1);
        assert_eq!(encode_value(&settings).expect("encode"), input);
    }

    #[test]
    fn swa_settings_read_app_fields() {
        let settings: SwaApplicationSettings = decode(
            br#"{"app":{"url":"https://login.example.com","usernameField":"user","passwordField":"pass"},
                "notifications":{"vpn":{"network":{"connection":"DISABLED"}}}}"#,
        )
        .expect("decode");
        let app = settings.app.expect("app");
        assert_eq!(app.username_field.as_deref(), Some("user"));
        let vpn = settings
            .notifications
            .and_then(|n| n.vpn)
            .and_then(|v| v.network)
            .expect("network");
        assert_eq!(vpn.connection.as_deref(), Some("DISABLED"));
    }
}
